use anyhow::Result;
use quandy_core::names::{friendly_name, unfriendly_name};
use quandy_core::password::{HashAlgorithm, make_hash};
use quandy_core::text::{decode_cp1252, fix_1252_codes, mark_it_up};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    Friendly,
    Unfriendly,
}

pub fn run_hash(password: &str, salt: &str, algorithm: &str) -> Result<String> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    Ok(make_hash(password, salt, algorithm))
}

/// Link-ifies raw input. Bytes that are not UTF-8 are read as Windows-1252.
pub fn run_markup(input: &[u8]) -> String {
    let text = match std::str::from_utf8(input) {
        Ok(text) => fix_1252_codes(text),
        Err(_) => {
            tracing::debug!("input is not utf-8, decoding as windows-1252");
            decode_cp1252(input)
        }
    };
    mark_it_up(&text)
}

pub fn run_name(style: NameStyle, text: &str) -> String {
    match style {
        NameStyle::Friendly => friendly_name(text),
        NameStyle::Unfriendly => unfriendly_name(text),
    }
}
