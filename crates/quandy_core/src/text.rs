//! Free-text helpers.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::html::{escape_attr, escape_text};

/// Unicode replacements for the C1 range U+0080..U+009F as Windows-1252
/// uses it. `None` marks the five positions 1252 leaves undefined.
pub const CP1252_C1: [Option<char>; 32] = [
    Some('\u{20AC}'), // 0x80 euro sign
    None,
    Some('\u{201A}'), // 0x82 single low-9 quotation mark
    Some('\u{0192}'), // 0x83 latin small f with hook
    Some('\u{201E}'), // 0x84 double low-9 quotation mark
    Some('\u{2026}'), // 0x85 horizontal ellipsis
    Some('\u{2020}'), // 0x86 dagger
    Some('\u{2021}'), // 0x87 double dagger
    Some('\u{02C6}'), // 0x88 modifier circumflex
    Some('\u{2030}'), // 0x89 per mille
    Some('\u{0160}'), // 0x8A S with caron
    Some('\u{2039}'), // 0x8B single left angle quotation mark
    Some('\u{0152}'), // 0x8C OE ligature
    None,
    Some('\u{017D}'), // 0x8E Z with caron
    None,
    None,
    Some('\u{2018}'), // 0x91 left single quotation mark
    Some('\u{2019}'), // 0x92 right single quotation mark
    Some('\u{201C}'), // 0x93 left double quotation mark
    Some('\u{201D}'), // 0x94 right double quotation mark
    Some('\u{2022}'), // 0x95 bullet
    Some('\u{2013}'), // 0x96 en dash
    Some('\u{2014}'), // 0x97 em dash
    Some('\u{02DC}'), // 0x98 small tilde
    Some('\u{2122}'), // 0x99 trade mark
    Some('\u{0161}'), // 0x9A s with caron
    Some('\u{203A}'), // 0x9B single right angle quotation mark
    Some('\u{0153}'), // 0x9C oe ligature
    None,
    Some('\u{017E}'), // 0x9E z with caron
    Some('\u{0178}'), // 0x9F Y with diaeresis
];

fn remap_c1(ch: char) -> char {
    let code = ch as u32;
    if (0x80..=0x9F).contains(&code) {
        CP1252_C1[(code - 0x80) as usize].unwrap_or(ch)
    } else {
        ch
    }
}

/// Replaces C1 control characters that really are mis-decoded
/// Windows-1252 punctuation with the intended code points.
pub fn fix_1252_codes(text: &str) -> String {
    text.chars().map(remap_c1).collect()
}

/// Decodes Windows-1252 bytes, reading everything outside 0x80..0x9F as
/// Latin-1.
pub fn decode_cp1252(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| remap_c1(char::from(*byte))).collect()
}

const LINK_TRAILING: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']'];

fn link_regex() -> &'static Regex {
    static LINK_RE: OnceLock<Regex> = OnceLock::new();
    LINK_RE.get_or_init(|| {
        Regex::new(
            r#"(?P<url>(?:(?:https?|ftp|file)://|www\.)[^\s<>"']+)|(?P<email>[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,})"#,
        )
        .expect("link pattern should compile")
    })
}

fn tag_regex() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag pattern should compile"))
}

/// Drops trailing sentence punctuation. A closing `)` stays when it
/// balances an opening one inside the link.
fn trim_link_tail(raw: &str) -> &str {
    let mut link = raw;
    while let Some(last) = link.chars().last() {
        if !LINK_TRAILING.contains(&last) {
            break;
        }
        if last == ')' && link.matches(')').count() <= link.matches('(').count() {
            break;
        }
        link = &link[..link.len() - last.len_utf8()];
    }
    link
}

/// Turns URLs and e-mail addresses in plain text into links.
///
/// Matching is permissive: anything that starts with a known scheme or
/// `www.` runs to the next whitespace, minus trailing sentence
/// punctuation. Each span is linked once, so addresses inside URLs are
/// left alone.
pub fn mark_it_up(text: &str) -> String {
    link_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            if let Some(url) = caps.name("url") {
                let raw = url.as_str();
                let link = trim_link_tail(raw);
                let tail = &raw[link.len()..];
                let href = if link.starts_with("www.") {
                    format!("http://{link}")
                } else {
                    link.to_string()
                };
                format!(
                    "<a href=\"{}\">{}</a>{tail}",
                    escape_attr(&href),
                    escape_text(link)
                )
            } else {
                let email = &caps["email"];
                format!(
                    "<a href=\"mailto:{}\">{}</a>",
                    escape_attr(email),
                    escape_text(email)
                )
            }
        })
        .into_owned()
}

pub fn strip_html(markup: &str) -> String {
    tag_regex().replace_all(markup, "").into_owned()
}

/// Splits on any run of whitespace, commas and semicolons.
pub fn make_list_from_string(text: &str) -> Vec<String> {
    text.split(|ch: char| ch.is_ascii_whitespace() || ch == ',' || ch == ';' || ch == '\x0b')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// One character per line, each followed by `<br>`.
pub fn make_vertical(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 5);
    for ch in text.chars() {
        out.push(ch);
        out.push_str("<br>");
    }
    out
}

pub fn single_or_plural<'a>(value: i64, single: &'a str, plural: &'a str) -> &'a str {
    if value == 1 { single } else { plural }
}
