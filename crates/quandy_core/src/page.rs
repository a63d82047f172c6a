//! Full HTML document with head boilerplate.

use serde::Deserialize;
use tracing::warn;

use crate::html::{escape_attr, escape_text};

pub const GENERATOR: &str = concat!("Quandy ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Doctype {
    #[default]
    Html4Strict,
    Html4Transitional,
    Html4Quirks,
    Xhtml1Strict,
    Xhtml1Transitional,
}

impl Doctype {
    /// Looks up a doctype by its name, e.g. `xhtml 1 strict`. Unknown
    /// names fall back to HTML 4.01 strict.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.to_ascii_lowercase().as_str() {
            "html 4 strict" => Doctype::Html4Strict,
            "html 4 transitional" => Doctype::Html4Transitional,
            "html 4 quirks" => Doctype::Html4Quirks,
            "xhtml 1 strict" => Doctype::Xhtml1Strict,
            "xhtml 1 transitional" => Doctype::Xhtml1Transitional,
            _ => {
                warn!(doctype = name, "unknown doctype, using html 4 strict");
                Doctype::Html4Strict
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Doctype::Html4Strict => "html 4 strict",
            Doctype::Html4Transitional => "html 4 transitional",
            Doctype::Html4Quirks => "html 4 quirks",
            Doctype::Xhtml1Strict => "xhtml 1 strict",
            Doctype::Xhtml1Transitional => "xhtml 1 transitional",
        }
    }

    pub fn is_xhtml(self) -> bool {
        matches!(self, Doctype::Xhtml1Strict | Doctype::Xhtml1Transitional)
    }

    fn declaration(self) -> &'static str {
        match self {
            Doctype::Html4Strict => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \n\"http://www.w3.org/TR/html4/strict.dtd\">"
            }
            Doctype::Html4Transitional => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">"
            }
            Doctype::Html4Quirks => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\">"
            }
            Doctype::Xhtml1Strict => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">"
            }
            Doctype::Xhtml1Transitional => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">"
            }
        }
    }

    fn root_open(self, language: &str) -> String {
        if self.is_xhtml() {
            format!(
                "<html xmlns=\"http://www.w3.org/1999/xhtml\" xml:lang=\"{language}\" lang=\"{language}\">"
            )
        } else {
            format!("<html lang=\"{language}\">")
        }
    }

    /// Terminator for void elements such as `<meta>`.
    fn void_close(self) -> &'static str {
        if self.is_xhtml() { " />" } else { ">" }
    }
}

impl From<String> for Doctype {
    fn from(value: String) -> Self {
        Doctype::from_name(&value)
    }
}

impl From<&str> for Doctype {
    fn from(value: &str) -> Self {
        Doctype::from_name(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Inserted verbatim between the body tags.
    pub body: String,
    pub site_name: String,
    pub page_title: String,
    pub page_author: String,
    pub doctype: Doctype,
    pub language: String,
    pub charset: String,
    pub css_path: String,
    pub css_files: Vec<String>,
    pub css_extra: Vec<String>,
    pub js_path: String,
    pub js_files: Vec<String>,
    pub js_extra: Vec<String>,
    pub favicon_url: String,
    pub suppress_cache: bool,
    pub rss_url: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            body: String::new(),
            site_name: "Default Site Name".to_string(),
            page_title: "Default Page Title".to_string(),
            page_author: "Default Page Author".to_string(),
            doctype: Doctype::Html4Strict,
            language: "en".to_string(),
            charset: "UTF-8".to_string(),
            css_path: "/static/styles/".to_string(),
            css_files: Vec::new(),
            css_extra: Vec::new(),
            js_path: "/static/scripts/".to_string(),
            js_files: Vec::new(),
            js_extra: Vec::new(),
            favicon_url: "/static/favicon.ico".to_string(),
            suppress_cache: false,
            rss_url: None,
        }
    }
}

impl PageConfig {
    pub fn render(&self) -> String {
        render_page(self)
    }
}

pub fn render_page(config: &PageConfig) -> String {
    let doctype = config.doctype;
    let close = doctype.void_close();
    let language = escape_attr(&config.language);

    let mut out = Vec::new();
    out.push(doctype.declaration().to_string());
    out.push(doctype.root_open(&language));
    out.push("  <head>".to_string());
    out.push(format!(
        "    <meta name=\"author\" content=\"{}\"{close}",
        escape_attr(&config.page_author)
    ));
    out.push(format!(
        "    <meta http-equiv=\"Content-Type\" content=\"text/html; charset={}\"{close}",
        escape_attr(&config.charset)
    ));
    out.push(format!(
        "    <meta http-equiv=\"Content-Style-Type\" content=\"text/css\"{close}"
    ));
    out.push(format!(
        "    <meta name=\"generator\" content=\"{GENERATOR}\"{close}"
    ));
    if config.suppress_cache {
        out.push(format!(
            "    <meta http-equiv=\"pragma\" content=\"no-cache\"{close}"
        ));
    }
    if let Some(rss) = config.rss_url.as_deref().filter(|url| !url.is_empty()) {
        out.push(format!(
            "    <link href=\"{}\" rel=\"alternate\" title=\"RSS\" type=\"application/rss+xml\"{close}",
            escape_attr(rss)
        ));
    }
    out.push(format!(
        "    <link rel=\"shortcut icon\" href=\"{}\"{close}",
        escape_attr(&config.favicon_url)
    ));
    out.push(format!(
        "    <title>{} - {}</title>",
        escape_text(&config.page_title),
        escape_text(&config.site_name)
    ));
    for file in config.css_files.iter().chain(&config.css_extra) {
        out.push(format!(
            "    <style type=\"text/css\">@import \"{}\";</style>",
            escape_attr(&format!("{}{}", config.css_path, file))
        ));
    }
    for file in config.js_files.iter().chain(&config.js_extra) {
        out.push(format!(
            "    <script type=\"text/javascript\" src=\"{}\"></script>",
            escape_attr(&format!("{}{}", config.js_path, file))
        ));
    }
    out.push("  </head>".to_string());
    out.push("  <body>".to_string());
    out.push(config.body.clone());
    out.push("  </body>".to_string());
    out.push("</html>".to_string());
    out.join("\n")
}
