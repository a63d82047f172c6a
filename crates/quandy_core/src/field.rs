//! Single form field rendered as a two-column table row.

use serde::Deserialize;
use std::fmt;

use crate::form::resolve_identity;
use crate::html::{Attributes, escape_attr, escape_text};
use crate::names::friendly_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    #[serde(alias = "select")]
    ChoiceList,
    #[default]
    #[serde(alias = "input")]
    SingleValue,
    #[serde(alias = "textarea")]
    MultiLine,
}

/// Scalar option value as it may appear in YAML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{value}"),
            Scalar::Int(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ChoiceOptionRaw {
    Pair(Scalar, Scalar),
    Entry { value: Scalar, label: Option<Scalar> },
    Bare(Scalar),
}

/// One `<option>` of a choice list. Bare values use the value as label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl ToString, label: impl ToString) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }

    pub fn bare(value: impl ToString) -> Self {
        let value = value.to_string();
        Self {
            label: value.clone(),
            value,
        }
    }
}

impl<'de> Deserialize<'de> for ChoiceOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = ChoiceOptionRaw::deserialize(deserializer)?;
        Ok(match raw {
            ChoiceOptionRaw::Pair(value, label) => ChoiceOption::new(value, label),
            ChoiceOptionRaw::Entry {
                value,
                label: Some(label),
            } => ChoiceOption::new(value, label),
            ChoiceOptionRaw::Entry { value, label: None } | ChoiceOptionRaw::Bare(value) => {
                ChoiceOption::bare(value)
            }
        })
    }
}

impl From<&str> for ChoiceOption {
    fn from(value: &str) -> Self {
        ChoiceOption::bare(value)
    }
}

impl From<String> for ChoiceOption {
    fn from(value: String) -> Self {
        ChoiceOption::bare(value)
    }
}

impl From<i64> for ChoiceOption {
    fn from(value: i64) -> Self {
        ChoiceOption::bare(value)
    }
}

impl<V: ToString, L: ToString> From<(V, L)> for ChoiceOption {
    fn from((value, label): (V, L)) -> Self {
        ChoiceOption::new(value, label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub widget: WidgetKind,
    pub id: String,
    pub name: String,
    pub css_class: String,
    pub title: String,
    pub disabled: bool,
    /// Keep `value` selected when the form is shown again.
    pub preserve_value: bool,
    pub options: Vec<ChoiceOption>,
    pub leading_blank_option: bool,
    pub value: String,
    pub input_type: String,
    /// Show a hidden input's value as text instead of hiding the row.
    pub visible: bool,
    pub multiple: bool,
    pub rows: u32,
    pub cols: u32,
    pub two_line_layout: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            widget: WidgetKind::SingleValue,
            id: String::new(),
            name: String::new(),
            css_class: String::new(),
            title: String::new(),
            disabled: false,
            preserve_value: true,
            options: Vec::new(),
            leading_blank_option: false,
            value: String::new(),
            input_type: "text".to_string(),
            visible: false,
            multiple: false,
            rows: 10,
            cols: 40,
            two_line_layout: false,
        }
    }
}

impl FieldConfig {
    pub fn new(widget: WidgetKind, id: &str) -> Self {
        Self {
            widget,
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn choice_list<O: Into<ChoiceOption>>(
        id: &str,
        options: impl IntoIterator<Item = O>,
    ) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            ..Self::new(WidgetKind::ChoiceList, id)
        }
    }

    pub fn input(id: &str, input_type: &str) -> Self {
        Self {
            input_type: input_type.to_string(),
            ..Self::new(WidgetKind::SingleValue, id)
        }
    }

    pub fn text_area(id: &str) -> Self {
        Self::new(WidgetKind::MultiLine, id)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn render(&self) -> String {
        render_field(self)
    }
}

struct FieldContext {
    id: String,
    title: String,
    row_open: String,
    attrs: Attributes,
}

impl FieldContext {
    fn new(config: &FieldConfig) -> Self {
        let (id, name) = resolve_identity(&config.id, &config.name);
        let title = if config.title.is_empty() {
            friendly_name(&id)
        } else {
            config.title.clone()
        };
        let escaped_id = escape_attr(&id);
        let row_open = if config.css_class.is_empty() {
            format!("  <tr id=\"{escaped_id}_tablerow\">")
        } else {
            format!(
                "  <tr id=\"{escaped_id}_tablerow\" class=\"{}_tablerow\">",
                escape_attr(&config.css_class)
            )
        };
        let mut attrs = Attributes::new();
        attrs
            .push("id", id.as_str())
            .push("name", name)
            .push_non_empty("class", &config.css_class)
            .flag("disabled", config.disabled);
        Self {
            id,
            title: escape_attr(&title),
            row_open,
            attrs,
        }
    }

    fn label_cells(&self, out: &mut Vec<String>) {
        out.push(format!("    <th title=\"{0}\">{0}</th>", self.title));
        out.push(format!("    <td title=\"{}\">", self.title));
    }
}

/// Renders one field as table row markup, ready for [`crate::form::FormConfig::fields`].
pub fn render_field(config: &FieldConfig) -> String {
    let mut ctx = FieldContext::new(config);
    tracing::trace!(id = %ctx.id, widget = ?config.widget, "rendering field");
    let out = match config.widget {
        WidgetKind::ChoiceList => render_choice_list(config, &mut ctx),
        WidgetKind::SingleValue => render_single_value(config, &mut ctx),
        WidgetKind::MultiLine => render_multi_line(config, &mut ctx),
    };
    out.join("\n")
}

fn render_choice_list(config: &FieldConfig, ctx: &mut FieldContext) -> Vec<String> {
    ctx.attrs.flag("multiple", config.multiple);
    let mut out = vec![ctx.row_open.clone()];
    ctx.label_cells(&mut out);
    out.push(format!("      <select{}>", ctx.attrs.render()));
    if config.leading_blank_option {
        out.push("        <option value=\"\">--</option>".to_string());
    }
    for option in &config.options {
        let selected = if config.preserve_value && option.value == config.value {
            " selected"
        } else {
            ""
        };
        out.push(format!(
            "        <option value=\"{}\"{selected}>{}</option>",
            escape_attr(&option.value),
            escape_text(&option.label)
        ));
    }
    out.push("      </select>".to_string());
    out.push("    </td>".to_string());
    out.push("  </tr>".to_string());
    out
}

fn render_single_value(config: &FieldConfig, ctx: &mut FieldContext) -> Vec<String> {
    let input_type = config.input_type.trim().to_ascii_lowercase();
    ctx.attrs
        .push_non_empty("value", &config.value)
        .push_non_empty("type", &input_type);
    let hidden = input_type == "hidden";
    if hidden && !config.visible {
        return vec![format!(
            "  <tr style=\"display: none\"><td><input{}></td></tr>",
            ctx.attrs.render()
        )];
    }
    let mut out = vec![ctx.row_open.clone()];
    if input_type == "submit" {
        out.push(format!(
            "    <td colspan=\"2\" title=\"{}\" class=\"form_button\">",
            ctx.title
        ));
    } else {
        ctx.label_cells(&mut out);
    }
    out.push(format!("      <input{}>", ctx.attrs.render()));
    if hidden {
        out.push(format!("      {}", escape_text(&config.value)));
    }
    out.push("    </td>".to_string());
    out.push("  </tr>".to_string());
    out
}

fn render_multi_line(config: &FieldConfig, ctx: &mut FieldContext) -> Vec<String> {
    if config.rows > 0 {
        ctx.attrs.push("rows", config.rows.to_string());
    }
    if config.cols > 0 {
        ctx.attrs.push("cols", config.cols.to_string());
    }
    let mut out = vec![ctx.row_open.clone()];
    if config.two_line_layout {
        out.push(format!(
            "    <th colspan=\"2\" title=\"{0}\">{0}</th>",
            ctx.title
        ));
        out.push("  </tr>".to_string());
        out.push("  <tr>".to_string());
        out.push(format!(
            "    <td colspan=\"2\" title=\"{}\" class=\"form_textarea\">",
            ctx.title
        ));
    } else {
        ctx.label_cells(&mut out);
    }
    out.push(format!(
        "      <textarea{}>{}</textarea>",
        ctx.attrs.render(),
        escape_text(&config.value)
    ));
    out.push("    </td>".to_string());
    out.push("  </tr>".to_string());
    out
}
