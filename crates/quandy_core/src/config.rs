use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

use crate::calendar::CalendarEvent;
use crate::field::{FieldConfig, render_field};
use crate::form::FormConfig;
use crate::page::{Doctype, PageConfig};

#[derive(Debug, Deserialize)]
struct PageDefaultsRaw {
    site: Option<SiteRaw>,
    styles: Option<IncludesRaw>,
    scripts: Option<IncludesRaw>,
}

#[derive(Debug, Deserialize)]
struct SiteRaw {
    name: Option<String>,
    author: Option<String>,
    language: Option<String>,
    charset: Option<String>,
    doctype: Option<String>,
    favicon: Option<String>,
    rss: Option<String>,
    nocache: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct IncludesRaw {
    path: Option<String>,
    #[serde(default)]
    files: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct FormDocumentRaw {
    #[serde(default)]
    form: FormConfig,
    #[serde(default)]
    fields: Vec<FieldConfig>,
}

pub fn load_page_defaults(path: &Path) -> Result<PageConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), "loading page defaults");
    parse_page_defaults(&contents).with_context(|| format!("invalid page config {}", path.display()))
}

/// Site-wide page settings; the body and page title are left to the caller.
pub fn parse_page_defaults(contents: &str) -> Result<PageConfig> {
    let parsed: PageDefaultsRaw =
        serde_yaml::from_str(contents).context("failed to parse page config")?;
    let defaults = PageConfig::default();
    let mut config = PageConfig::default();

    if let Some(site) = parsed.site {
        config.site_name = non_empty_or_default(site.name, &defaults.site_name, "site.name")?;
        config.page_author =
            non_empty_or_default(site.author, &defaults.page_author, "site.author")?;
        config.language = non_empty_or_default(site.language, &defaults.language, "site.language")?;
        config.charset = non_empty_or_default(site.charset, &defaults.charset, "site.charset")?;
        config.doctype = site
            .doctype
            .as_deref()
            .map(Doctype::from_name)
            .unwrap_or_default();
        config.favicon_url =
            non_empty_or_default(site.favicon, &defaults.favicon_url, "site.favicon")?;
        config.rss_url = site.rss.filter(|value| !value.trim().is_empty());
        config.suppress_cache = site.nocache.unwrap_or(false);
    }
    if let Some(styles) = parsed.styles {
        config.css_path = styles.path.unwrap_or(defaults.css_path);
        config.css_files = clean_file_list(styles.files, "styles.files")?;
    }
    if let Some(scripts) = parsed.scripts {
        config.js_path = scripts.path.unwrap_or(defaults.js_path);
        config.js_files = clean_file_list(scripts.files, "scripts.files")?;
    }
    Ok(config)
}

pub fn load_calendar_events(path: &Path) -> Result<Vec<CalendarEvent>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let events: Vec<CalendarEvent> = serde_yaml::from_str(&contents)
        .with_context(|| format!("invalid event list {}", path.display()))?;
    debug!(path = %path.display(), count = events.len(), "loaded calendar events");
    Ok(events)
}

pub fn load_form(path: &Path) -> Result<FormConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_form(&contents).with_context(|| format!("invalid form config {}", path.display()))
}

/// Form settings under `form:` and field definitions under `fields:`,
/// with every field rendered into the returned config.
pub fn parse_form(contents: &str) -> Result<FormConfig> {
    let parsed: FormDocumentRaw =
        serde_yaml::from_str(contents).context("failed to parse form config")?;
    let mut form = parsed.form;
    if !form.fields.is_empty() {
        bail!("form.fields must not be set; list field definitions under `fields`");
    }
    form.fields = parsed.fields.iter().map(render_field).collect();
    Ok(form)
}

fn non_empty_or_default(value: Option<String>, default: &str, field: &str) -> Result<String> {
    match value {
        Some(text) => {
            if text.trim().is_empty() {
                bail!("{field} must not be empty");
            }
            Ok(text)
        }
        None => Ok(default.to_string()),
    }
}

fn clean_file_list(files: Vec<String>, field: &str) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(files.len());
    for (idx, file) in files.into_iter().enumerate() {
        let trimmed = file.trim();
        if trimmed.is_empty() {
            bail!("{field}[{idx}] must not be empty");
        }
        out.push(trimmed.to_string());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn write_temp(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("quandy-config-{}.yaml", Uuid::new_v4()));
        fs::write(&path, contents).expect("write temp config");
        path
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = parse_page_defaults("{}").expect("config should load");
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn site_section_overrides_defaults() {
        let config = parse_page_defaults(
            "site:\n  name: \"Demo\"\n  author: \"Ryan\"\n  doctype: \"xhtml 1 strict\"\n  nocache: true\n  rss: \"/feed.xml\"\n",
        )
        .expect("config should load");
        assert_eq!(config.site_name, "Demo");
        assert_eq!(config.page_author, "Ryan");
        assert_eq!(config.doctype, Doctype::Xhtml1Strict);
        assert!(config.suppress_cache);
        assert_eq!(config.rss_url.as_deref(), Some("/feed.xml"));
        assert_eq!(config.language, "en");
    }

    #[test]
    fn unknown_doctype_falls_back() {
        let config =
            parse_page_defaults("site:\n  doctype: \"html5\"\n").expect("config should load");
        assert_eq!(config.doctype, Doctype::Html4Strict);
    }

    #[test]
    fn empty_charset_fails() {
        let err = parse_page_defaults("site:\n  charset: \"  \"\n").expect_err("expected error");
        assert!(err.to_string().contains("site.charset"));
    }

    #[test]
    fn include_lists_are_read() {
        let config = parse_page_defaults(
            "styles:\n  path: \"/css/\"\n  files: [\"base.css\", \" print.css \"]\nscripts:\n  files: [\"app.js\"]\n",
        )
        .expect("config should load");
        assert_eq!(config.css_path, "/css/");
        assert_eq!(config.css_files, vec!["base.css", "print.css"]);
        assert_eq!(config.js_path, "/static/scripts/");
        assert_eq!(config.js_files, vec!["app.js"]);
    }

    #[test]
    fn blank_include_entry_fails() {
        let err = parse_page_defaults("scripts:\n  files: [\"a.js\", \"\"]\n")
            .expect_err("expected error");
        assert!(err.to_string().contains("scripts.files[1]"));
    }

    #[test]
    fn loads_page_defaults_from_file() {
        let path = write_temp("site:\n  name: \"From File\"\n");
        let config = load_page_defaults(&path).expect("config should load");
        assert_eq!(config.site_name, "From File");
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join(format!("quandy-missing-{}.yaml", Uuid::new_v4()));
        let err = load_page_defaults(&path).expect_err("expected error");
        assert!(err.to_string().contains("quandy-missing-"));
    }

    #[test]
    fn loads_calendar_events() {
        let path = write_temp(
            "- date: 2024-02-15\n  text: \"Launch\"\n- date: 2024-02-15\n  details: \"<b>Party</b>\"\n",
        );
        let events = load_calendar_events(&path).expect("events should load");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].details, "Launch");
        assert_eq!(events[1].details, "<b>Party</b>");
    }

    #[test]
    fn form_document_renders_fields() {
        let form = parse_form(
            "form:\n  id: signup\n  method: get\nfields:\n  - widget: select\n    id: fruit\n    value: b\n    options:\n      - [a, Apple]\n      - [b, Banana]\n  - widget: input\n    id: go\n    input_type: submit\n    value: Send\n",
        )
        .expect("form should load");
        assert_eq!(form.id, "signup");
        assert_eq!(form.fields.len(), 2);
        assert!(form.fields[0].contains("<option value=\"b\" selected>Banana</option>"));
        assert!(form.fields[1].contains("class=\"form_button\""));
    }

    #[test]
    fn form_fields_must_not_be_inline() {
        let err = parse_form("form:\n  fields: [\"<tr></tr>\"]\n").expect_err("expected error");
        assert!(err.to_string().contains("form.fields"));
    }
}
