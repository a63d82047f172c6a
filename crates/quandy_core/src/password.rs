//! Password and account helpers.

use md4::Md4;
use md5::Md5;
use rand::Rng;
use regex::Regex;
use sha1::Sha1;
use sha2::digest::Digest;
use sha2::{Sha256, Sha512};
use std::fmt::Write;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{HashError, PasswordError};

const PASSWORD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const DEFAULT_SALT: &str = "saltydog";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum HashAlgorithm {
    #[default]
    Blake3,
    Md4,
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "blake3" => Ok(HashAlgorithm::Blake3),
            "md4" => Ok(HashAlgorithm::Md4),
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            other => Err(HashError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Uppercase hex digest of `password + salt`, encoded as UTF-16LE.
///
/// A single shared salt and a fast digest make this unfit for storing
/// credentials. MD4, MD5 and SHA-1 exist to match digests stored by older
/// systems; use a dedicated password hashing scheme for anything
/// security sensitive.
pub fn make_hash(password: &str, salt: &str, algorithm: HashAlgorithm) -> String {
    let mut bytes = Vec::with_capacity((password.len() + salt.len()) * 2);
    for unit in password.encode_utf16().chain(salt.encode_utf16()) {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    match algorithm {
        HashAlgorithm::Blake3 => upper_hex(blake3::hash(&bytes).as_bytes()),
        HashAlgorithm::Md4 => upper_hex(&Md4::digest(&bytes)),
        HashAlgorithm::Md5 => upper_hex(&Md5::digest(&bytes)),
        HashAlgorithm::Sha1 => upper_hex(&Sha1::digest(&bytes)),
        HashAlgorithm::Sha256 => upper_hex(&Sha256::digest(&bytes)),
        HashAlgorithm::Sha512 => upper_hex(&Sha512::digest(&bytes)),
    }
}

fn upper_hex(digest: &[u8]) -> String {
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(out, "{byte:02X}");
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRules {
    pub strict: bool,
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            strict: false,
            min_len: 8,
            max_len: 40,
        }
    }
}

/// Checks a new password and its confirmation.
///
/// Strict mode also requires characters from three of: lowercase,
/// uppercase, digits, everything else.
pub fn validate_password(
    username: &str,
    password: &str,
    confirmation: &str,
    rules: PasswordRules,
) -> Result<(), PasswordError> {
    if password != confirmation {
        return Err(PasswordError::Mismatch);
    }
    let len = password.chars().count();
    if len < rules.min_len {
        return Err(PasswordError::TooShort(rules.min_len));
    }
    if len > rules.max_len {
        return Err(PasswordError::TooLong(rules.max_len));
    }
    if password == username {
        return Err(PasswordError::SameAsUsername);
    }
    if rules.strict {
        let groups = [
            password.chars().any(|ch| ch.is_ascii_lowercase()),
            password.chars().any(|ch| ch.is_ascii_uppercase()),
            password.chars().any(|ch| ch.is_ascii_digit()),
            password.chars().any(|ch| !ch.is_ascii_alphanumeric()),
        ];
        if groups.iter().filter(|present| **present).count() < 3 {
            return Err(PasswordError::TooSimple);
        }
    }
    Ok(())
}

pub fn generate_random_password(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(PASSWORD_CHARS[rng.random_range(0..PASSWORD_CHARS.len())]))
        .collect()
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(
            r#"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$"#,
        )
        .expect("email pattern should compile")
    })
}

/// Whether the whole string looks like an e-mail address.
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}
