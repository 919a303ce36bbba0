//! Security identifiers (SIDs) of directory principals.
//!
//! A SID is a revision byte, a 48-bit identifier authority and up to fifteen
//! 32-bit sub-authorities. It is written `S-1-5-21-1004336348-1177238915-682003330-512`,
//! or, for a handful of well-known principals, as a two-letter SDDL alias such
//! as `BA` (`S-1-5-32-544`).

use std::{fmt::Display, str::FromStr};

use crate::error::NamingError;

pub const SID_REVISION: u8 = 1;
pub const MAX_SUB_AUTHORITIES: usize = 15;
const MAX_IDENTIFIER_AUTHORITY: u64 = (1 << 48) - 1;
const BINARY_HEADER_LEN: usize = 8;

/// SDDL aliases that resolve without knowing the domain.
const WELL_KNOWN_ALIASES: &[(&str, u64, &[u32])] = &[
    ("AN", 5, &[7]),
    ("AO", 5, &[32, 548]),
    ("AU", 5, &[11]),
    ("BA", 5, &[32, 544]),
    ("BG", 5, &[32, 546]),
    ("BO", 5, &[32, 551]),
    ("BU", 5, &[32, 545]),
    ("CG", 3, &[1]),
    ("CO", 3, &[0]),
    ("ED", 5, &[9]),
    ("IU", 5, &[4]),
    ("LS", 5, &[19]),
    ("NO", 5, &[32, 556]),
    ("NS", 5, &[20]),
    ("NU", 5, &[2]),
    ("PO", 5, &[32, 550]),
    ("PS", 5, &[10]),
    ("PU", 5, &[32, 547]),
    ("RC", 5, &[12]),
    ("RD", 5, &[32, 555]),
    ("RE", 5, &[32, 552]),
    ("RU", 5, &[32, 554]),
    ("SO", 5, &[32, 549]),
    ("SU", 5, &[6]),
    ("SY", 5, &[18]),
    ("WD", 1, &[0]),
];

/// Owned security identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SecurityIdentifier {
    revision: u8,
    identifier_authority: u64,
    sub_authorities: Vec<u32>,
}

impl SecurityIdentifier {
    /// Builds a revision 1 SID.
    ///
    /// Fails when the authority does not fit in 48 bits or when more than
    /// [`MAX_SUB_AUTHORITIES`] sub-authorities are given.
    pub fn new(identifier_authority: u64, sub_authorities: &[u32]) -> Result<Self, NamingError> {
        if identifier_authority > MAX_IDENTIFIER_AUTHORITY {
            return Err(NamingError::InvalidSid(format!(
                "identifier authority {identifier_authority} exceeds 48 bits"
            )));
        }
        if sub_authorities.len() > MAX_SUB_AUTHORITIES {
            return Err(NamingError::InvalidSid(format!(
                "{} sub-authorities, at most {MAX_SUB_AUTHORITIES} allowed",
                sub_authorities.len()
            )));
        }
        Ok(Self {
            revision: SID_REVISION,
            identifier_authority,
            sub_authorities: sub_authorities.to_vec(),
        })
    }

    /// Parses the `S-1-...` form or a well-known SDDL alias.
    pub fn parse(text: &str) -> Result<Self, NamingError> {
        let invalid = || NamingError::InvalidSid(text.to_string());

        if text.len() == 2 {
            return WELL_KNOWN_ALIASES
                .iter()
                .find(|(alias, _, _)| alias.eq_ignore_ascii_case(text))
                .map(|(_, authority, subs)| Self {
                    revision: SID_REVISION,
                    identifier_authority: *authority,
                    sub_authorities: subs.to_vec(),
                })
                .ok_or_else(invalid);
        }

        let body = text
            .strip_prefix("S-")
            .or_else(|| text.strip_prefix("s-"))
            .ok_or_else(invalid)?;
        let mut fields = body.split('-');

        let revision = fields.next().and_then(parse_decimal).ok_or_else(invalid)?;
        if revision != u64::from(SID_REVISION) {
            return Err(invalid());
        }

        let identifier_authority = fields
            .next()
            .and_then(parse_authority)
            .filter(|authority| *authority <= MAX_IDENTIFIER_AUTHORITY)
            .ok_or_else(invalid)?;

        let sub_authorities = fields
            .map(|field| parse_decimal(field).and_then(|value| u32::try_from(value).ok()))
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(invalid)?;
        if sub_authorities.len() > MAX_SUB_AUTHORITIES {
            return Err(invalid());
        }

        Ok(Self { revision: SID_REVISION, identifier_authority, sub_authorities })
    }

    /// Decodes the binary layout stored in `objectSid` attributes.
    ///
    /// Layout: revision, sub-authority count, 6-byte big-endian authority,
    /// then the sub-authorities as little-endian `u32`s.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NamingError> {
        let invalid = |reason: &str| NamingError::InvalidSid(format!("binary SID: {reason}"));

        if bytes.len() < BINARY_HEADER_LEN {
            return Err(invalid("truncated header"));
        }
        if bytes[0] != SID_REVISION {
            return Err(invalid("unsupported revision"));
        }
        let count = usize::from(bytes[1]);
        if count > MAX_SUB_AUTHORITIES {
            return Err(invalid("too many sub-authorities"));
        }
        if bytes.len() != BINARY_HEADER_LEN + 4 * count {
            return Err(invalid("length does not match sub-authority count"));
        }

        let identifier_authority =
            bytes[2..BINARY_HEADER_LEN].iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b));
        let sub_authorities = bytes[BINARY_HEADER_LEN..]
            .chunks_exact(4)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(Self { revision: SID_REVISION, identifier_authority, sub_authorities })
    }

    /// Encodes into the `objectSid` binary layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(BINARY_HEADER_LEN + 4 * self.sub_authorities.len());
        bytes.push(self.revision);
        bytes.push(self.sub_authorities.len() as u8);
        bytes.extend_from_slice(&self.identifier_authority.to_be_bytes()[2..]);
        for sub_authority in &self.sub_authorities {
            bytes.extend_from_slice(&sub_authority.to_le_bytes());
        }
        bytes
    }

    pub fn revision(&self) -> u8 {
        self.revision
    }

    pub fn identifier_authority(&self) -> u64 {
        self.identifier_authority
    }

    pub fn sub_authorities(&self) -> &[u32] {
        &self.sub_authorities
    }

    /// Relative identifier: the last sub-authority, if any.
    pub fn rid(&self) -> Option<u32> {
        self.sub_authorities.last().copied()
    }
}

fn parse_decimal(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn parse_authority(field: &str) -> Option<u64> {
    match field.strip_prefix("0x").or_else(|| field.strip_prefix("0X")) {
        Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            u64::from_str_radix(hex, 16).ok()
        }
        Some(_) => None,
        None => parse_decimal(field),
    }
}

impl FromStr for SecurityIdentifier {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for SecurityIdentifier {
    type Error = NamingError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl Display for SecurityIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S-{}-", self.revision)?;
        if self.identifier_authority > u64::from(u32::MAX) {
            write!(f, "0x{:012X}", self.identifier_authority)?;
        } else {
            write!(f, "{}", self.identifier_authority)?;
        }
        for sub_authority in &self.sub_authorities {
            write!(f, "-{}", sub_authority)?;
        }
        Ok(())
    }
}
