//! Globally-unique identifiers as they appear in directory descriptors.
//!
//! Directory tooling prints GUIDs in several textual layouts. [`Guid::parse`]
//! accepts all of them:
//!
//! | Layout | Example |
//! |--------|---------|
//! | digits | `0123456789abcdef0123456789abcdef` |
//! | hyphenated | `01234567-89ab-cdef-0123-456789abcdef` |
//! | braces | `{01234567-89ab-cdef-0123-456789abcdef}` |
//! | parentheses | `(01234567-89ab-cdef-0123-456789abcdef)` |
//! | hex struct | `{0x01234567,0x89ab,0xcdef,{0x01,0x23,0x45,0x67,0x89,0xab,0xcd,0xef}}` |
//!
//! Hex digits are case-insensitive and surrounding whitespace is ignored.

use std::{fmt::Display, str::FromStr};

use uuid::Uuid;

use crate::error::NamingError;

const HYPHENATED_LEN: usize = 36;
const DIGITS_LEN: usize = 32;

/// 128-bit identifier of a directory object, independent of its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Guid(Uuid);

impl Guid {
    /// Parses any of the supported textual layouts.
    pub fn parse(text: &str) -> Result<Self, NamingError> {
        let invalid = || NamingError::InvalidGuid(text.to_string());
        let trimmed = text.trim();

        let uuid = if trimmed.len() == DIGITS_LEN {
            parse_plain(trimmed)
        } else if trimmed.len() == HYPHENATED_LEN {
            parse_hyphenated(trimmed)
        } else if trimmed.starts_with("{0x") || trimmed.starts_with("{0X") {
            parse_hex_struct(trimmed)
        } else if let Some(inner) = unwrap_delimited(trimmed, '{', '}')
            .or_else(|| unwrap_delimited(trimmed, '(', ')'))
        {
            parse_hyphenated(inner)
        } else {
            None
        };

        uuid.map(Self).ok_or_else(invalid)
    }

    /// Rebuilds a GUID from the mixed-endian layout stored in `objectGUID`.
    pub fn from_bytes_le(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes_le(bytes))
    }

    /// Mixed-endian layout used by directory services for `objectGUID`.
    pub fn to_bytes_le(&self) -> [u8; 16] {
        self.0.to_bytes_le()
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

fn parse_plain(text: &str) -> Option<Uuid> {
    if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Uuid::try_parse(text).ok()
}

fn parse_hyphenated(text: &str) -> Option<Uuid> {
    if text.len() != HYPHENATED_LEN {
        return None;
    }
    Uuid::try_parse(text).ok()
}

fn unwrap_delimited(text: &str, open: char, close: char) -> Option<&str> {
    text.strip_prefix(open)?.strip_suffix(close)
}

/// `{0xXXXXXXXX,0xXXXX,0xXXXX,{0xXX,0xXX,0xXX,0xXX,0xXX,0xXX,0xXX,0xXX}}`
fn parse_hex_struct(text: &str) -> Option<Uuid> {
    let inner = unwrap_delimited(text, '{', '}')?;
    let (head, tail) = inner.split_once(",{")?;
    let tail = tail.strip_suffix('}')?;

    let mut head = head.split(',');
    let d1 = hex_field(head.next()?, 8)?;
    let d2 = hex_field(head.next()?, 4)?;
    let d3 = hex_field(head.next()?, 4)?;
    if head.next().is_some() {
        return None;
    }

    let mut d4 = [0u8; 8];
    let mut bytes = tail.split(',');
    for slot in d4.iter_mut() {
        *slot = hex_field(bytes.next()?, 2)? as u8;
    }
    if bytes.next().is_some() {
        return None;
    }

    Some(Uuid::from_fields(d1, d2 as u16, d3 as u16, &d4))
}

fn hex_field(field: &str, max_digits: usize) -> Option<u32> {
    let digits = field.strip_prefix("0x").or_else(|| field.strip_prefix("0X"))?;
    if digits.is_empty()
        || digits.len() > max_digits
        || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

impl FromStr for Guid {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for Guid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<Guid> for Uuid {
    fn from(guid: Guid) -> Self {
        guid.0
    }
}
