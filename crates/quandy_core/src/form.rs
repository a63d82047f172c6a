//! `<form>` wrapper around pre-rendered field rows.

use chrono::{Duration, NaiveDate};
use serde::Deserialize;

use crate::html::{Attributes, escape_attr, escape_text};
use crate::names::random_id;

pub const DEFAULT_ENCTYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMethod {
    Get,
    #[default]
    Post,
}

impl FormMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            FormMethod::Get => "get",
            FormMethod::Post => "post",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub id: String,
    pub name: String,
    pub css_class: String,
    /// Shown as the table caption when set.
    pub title: String,
    pub method: FormMethod,
    pub action: String,
    pub encoding_type: String,
    /// Field rows from [`crate::field::render_field`], in display order.
    pub fields: Vec<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            css_class: String::new(),
            title: String::new(),
            method: FormMethod::Post,
            action: String::new(),
            encoding_type: DEFAULT_ENCTYPE.to_string(),
            fields: Vec::new(),
        }
    }
}

impl FormConfig {
    pub fn render(&self) -> String {
        render_form(self)
    }
}

/// Element id and name, generating the id when empty and reusing it as
/// the name when that is empty too.
pub(crate) fn resolve_identity(id: &str, name: &str) -> (String, String) {
    let id = if id.is_empty() {
        random_id("id_")
    } else {
        id.to_string()
    };
    let name = if name.is_empty() {
        id.clone()
    } else {
        name.to_string()
    };
    (id, name)
}

pub fn render_form(config: &FormConfig) -> String {
    let (id, name) = resolve_identity(&config.id, &config.name);
    let enctype = if config.encoding_type.is_empty() {
        DEFAULT_ENCTYPE
    } else {
        config.encoding_type.as_str()
    };
    let mut attrs = Attributes::new();
    attrs
        .push("id", id.as_str())
        .push("name", name)
        .push_non_empty("class", &config.css_class)
        .push("method", config.method.as_str())
        .push_non_empty("action", &config.action)
        .push("enctype", enctype);

    let escaped_id = escape_attr(&id);
    let mut out = Vec::with_capacity(config.fields.len() + 7);
    out.push(format!("<form{}>", attrs.render()));
    out.push("<table>".to_string());
    if !config.title.is_empty() {
        out.push(format!(
            "<caption id=\"{escaped_id}_caption\">{}</caption>",
            escape_text(&config.title)
        ));
    }
    out.push(format!("<tbody id=\"{escaped_id}_tbody\">"));
    out.extend(config.fields.iter().cloned());
    out.push("</tbody>".to_string());
    out.push("</table>".to_string());
    out.push("</form>".to_string());
    out.join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrder {
    Ascending,
    #[default]
    Descending,
}

/// `days` consecutive dates ending `offset` days before `today`, for use
/// as choice-list options.
pub fn form_dates(today: NaiveDate, days: u32, offset: u32, order: DateOrder) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = (0..days)
        .filter_map(|step| {
            today.checked_sub_signed(Duration::days(i64::from(offset) + i64::from(step)))
        })
        .collect();
    if order == DateOrder::Ascending {
        dates.reverse();
    }
    dates
}
