//! Markup primitives shared by the renderers.

pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Ordered attribute list rendered as ` name="value"` pairs.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    items: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.items.push((name.to_string(), value.into()));
        self
    }

    pub fn push_non_empty(&mut self, name: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.push(name, value);
        }
        self
    }

    /// Boolean attribute in the `name="name"` form.
    pub fn flag(&mut self, name: &str, enabled: bool) -> &mut Self {
        if enabled {
            self.push(name, name);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.items {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out
    }
}

/// Element with opening and closing tags. `inner` is inserted verbatim.
pub fn tag(name: &str, inner: &str, attrs: &[(&str, &str)]) -> String {
    let mut attributes = Attributes::new();
    for (key, value) in attrs {
        attributes.push(key, *value);
    }
    format!("<{name}{}>{inner}</{name}>", attributes.render())
}

/// Two-column table with keys as `<th>` and values as `<td>`.
pub fn table_from_pairs<K, V>(pairs: &[(K, V)], caption: &str, id: &str) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let id = if id.is_empty() {
        crate::names::random_id("id_")
    } else {
        id.to_string()
    };
    let mut out = Vec::with_capacity(pairs.len() + 3);
    out.push(format!("<table id=\"{}\">", escape_attr(&id)));
    if !caption.is_empty() {
        out.push(format!("<caption>{}</caption>", escape_text(caption)));
    }
    for (key, value) in pairs {
        out.push(format!(
            "  <tr>\n    <th>{}</th>\n    <td>{}</td>\n  </tr>",
            key.as_ref(),
            value.as_ref()
        ));
    }
    out.push("</table>".to_string());
    out.join("\n")
}
