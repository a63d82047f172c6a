//! Identifier and label transforms.

use uuid::Uuid;

const UNFRIENDLY_DROPPED: &[char] = &['.', ',', '!', '?', ';', '/'];

/// Uppercases the first character and leaves the rest alone.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut result = String::with_capacity(word.len());
    for ch in first.to_uppercase() {
        result.push(ch);
    }
    result.push_str(chars.as_str());
    result
}

fn capitalize_after(text: &str, separator: &str) -> String {
    text.split(separator)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Proper case: initial capital after spaces, hyphens and quotes.
///
/// With `names` set, letters following `Mc` and `Mac` are capitalized as
/// well, so `mcdonald` becomes `McDonald`. This also hits words such as
/// `Machine` (`MacHine`); only enable it for personal names.
pub fn pcase(text: &str, names: bool) -> String {
    let mut out = text.to_lowercase();
    for separator in [" ", "-", "\"", "'"] {
        out = capitalize_after(&out, separator);
    }
    out = out.replace("'S ", "'s ");
    if out.ends_with("'S") {
        out.truncate(out.len() - 1);
        out.push('s');
    }
    if names {
        for prefix in ["Mc", "Mac"] {
            out = capitalize_after(&out, prefix);
        }
    }
    out.trim().to_string()
}

/// `first_name` becomes `First Name`.
pub fn friendly_name(identifier: &str) -> String {
    pcase(&identifier.replace('_', " "), false)
}

/// `First Name` becomes `first_name`.
///
/// For labels made of letters, single spaces and hyphens with each word
/// capitalized, `friendly_name(&unfriendly_name(label)) == label`.
/// Punctuation is dropped, so labels carrying it do not round-trip.
pub fn unfriendly_name(label: &str) -> String {
    let lowered = label.replace(' ', "_").to_lowercase().replace("&#39;", "");
    let mut out = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        if UNFRIENDLY_DROPPED.contains(&ch) {
            continue;
        }
        if ch == '_' && out.ends_with('_') {
            continue;
        }
        out.push(ch);
    }
    out
}

/// Element id that is distinct enough for DOM lookups, e.g. `id_3f2a9c0e41b7`.
pub fn random_id(prefix: &str) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{prefix}{}", &token[..12])
}
