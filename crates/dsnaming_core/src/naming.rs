//! Naming-context descriptors.
//!
//! Directory servers describe naming contexts with a semicolon separated
//! descriptor. Besides the distinguished name it can carry the object GUID and
//! the object SID:
//!
//! ```text
//! <GUID=01234567-89ab-cdef-0123-456789abcdef>;<SID=S-1-5-21-1-2-3>;DC=example,DC=com
//! ```
//!
//! ## Parsing Rules
//!
//! - A descriptor without `;` is a bare distinguished name, taken verbatim.
//! - Otherwise every segment is classified on its prefix. `<GUID=` and `<SID=`
//!   segments are decoded; anything else (empty segments included) becomes the
//!   distinguished name.
//! - When a kind repeats, the rightmost segment wins.
//! - An identifier segment that fails to decode is dropped. It never becomes the
//!   distinguished name and never aborts the remaining segments.
//!
//! Parsing is therefore total over `&str`. Callers holding an attribute that may
//! be missing go through [`NamingContext::try_from_optional`].

use std::{convert::Infallible, fmt::Display, str::FromStr};

use tracing::{debug, trace};

use crate::{
    error::NamingError,
    identifiers::{guid::Guid, sid::SecurityIdentifier},
};

const SEGMENT_SEPARATOR: char = ';';
const GUID_PREFIX: &str = "<GUID=";
const SID_PREFIX: &str = "<SID=";

/// Structured naming context.
///
/// Every field is independently optional. The textual representation is the
/// distinguished name alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NamingContext {
    security_identifier: Option<SecurityIdentifier>,
    global_id: Option<Guid>,
    distinguished_name: Option<String>,
}

/// One `;` separated piece of a descriptor, with identifier bodies already
/// cut out of their `<...=` `>` wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// `None` when the segment is too short to hold a body.
    Guid(Option<&'a str>),
    Sid(Option<&'a str>),
    Path(&'a str),
}

impl<'a> Segment<'a> {
    /// Classifies on the prefix only. The closing `>` is not checked: the body
    /// is whatever lies between the prefix and the last character.
    fn classify(segment: &'a str) -> Self {
        if let Some(rest) = segment.strip_prefix(GUID_PREFIX) {
            Segment::Guid(drop_last_char(rest))
        } else if let Some(rest) = segment.strip_prefix(SID_PREFIX) {
            Segment::Sid(drop_last_char(rest))
        } else {
            Segment::Path(segment)
        }
    }
}

fn drop_last_char(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    chars.next_back()?;
    Some(chars.as_str())
}

impl NamingContext {
    /// Builds a context from already decoded parts.
    ///
    /// # Errors
    ///
    /// [`NamingError::InvalidArgument`] when the distinguished name could not
    /// be told apart from the identifiers in [`extended_form`](Self::extended_form):
    /// it contains `;`, or it starts with `<GUID=` / `<SID=` while an
    /// identifier is set.
    pub fn new(
        distinguished_name: Option<String>,
        global_id: Option<Guid>,
        security_identifier: Option<SecurityIdentifier>,
    ) -> Result<Self, NamingError> {
        if let Some(dn) = &distinguished_name {
            if dn.contains(SEGMENT_SEPARATOR) {
                return Err(NamingError::InvalidArgument(
                    "distinguished name contains a segment separator",
                ));
            }
            let has_identifier = global_id.is_some() || security_identifier.is_some();
            if has_identifier && !matches!(Segment::classify(dn), Segment::Path(_)) {
                return Err(NamingError::InvalidArgument(
                    "distinguished name starts with an identifier prefix",
                ));
            }
        }
        Ok(Self { security_identifier, global_id, distinguished_name })
    }

    /// Parses a naming-context descriptor. Never fails.
    pub fn parse(raw: &str) -> Self {
        if !raw.contains(SEGMENT_SEPARATOR) {
            return Self { distinguished_name: Some(raw.to_string()), ..Self::default() };
        }

        let mut context = Self::default();
        for segment in raw.split(SEGMENT_SEPARATOR) {
            let classified = Segment::classify(segment);
            trace!("[naming] Segment {:?} classified as {:?}", segment, classified);
            match classified {
                Segment::Guid(body) => match body.map_or_else(
                    || Err(NamingError::InvalidGuid(segment.to_string())),
                    Guid::parse,
                ) {
                    Ok(guid) => context.global_id = Some(guid),
                    Err(err) => debug!("[naming] Discarded GUID segment {:?}: {}", segment, err),
                },
                Segment::Sid(body) => match body.map_or_else(
                    || Err(NamingError::InvalidSid(segment.to_string())),
                    SecurityIdentifier::parse,
                ) {
                    Ok(sid) => context.security_identifier = Some(sid),
                    Err(err) => debug!("[naming] Discarded SID segment {:?}: {}", segment, err),
                },
                Segment::Path(path) => context.distinguished_name = Some(path.to_string()),
            }
        }
        context
    }

    /// Parses an attribute value that may be missing.
    ///
    /// # Errors
    ///
    /// [`NamingError::InvalidArgument`] when `raw` is `None`. Any present
    /// string parses.
    pub fn try_from_optional(raw: Option<&str>) -> Result<Self, NamingError> {
        raw.map(Self::parse)
            .ok_or(NamingError::InvalidArgument("naming context descriptor is absent"))
    }

    pub fn distinguished_name(&self) -> Option<&str> {
        self.distinguished_name.as_deref()
    }

    pub fn global_id(&self) -> Option<&Guid> {
        self.global_id.as_ref()
    }

    pub fn security_identifier(&self) -> Option<&SecurityIdentifier> {
        self.security_identifier.as_ref()
    }

    /// Renders the descriptor back as `<GUID=...>;<SID=...>;dn`, skipping
    /// absent parts.
    ///
    /// A context holding only identifiers keeps a trailing empty segment so the
    /// output still goes through the multi-segment path when parsed again.
    /// Whenever a distinguished name is present, parsing the output gives back
    /// an equal context.
    pub fn extended_form(&self) -> String {
        let mut segments = Vec::with_capacity(3);
        if let Some(guid) = &self.global_id {
            segments.push(format!("{GUID_PREFIX}{guid}>"));
        }
        if let Some(sid) = &self.security_identifier {
            segments.push(format!("{SID_PREFIX}{sid}>"));
        }
        match &self.distinguished_name {
            Some(dn) => segments.push(dn.clone()),
            None if !segments.is_empty() => segments.push(String::new()),
            None => {}
        }
        segments.join(";")
    }
}

/// Parses a naming-context descriptor. See [`NamingContext::parse`].
pub fn parse_naming_context(raw: &str) -> NamingContext {
    NamingContext::parse(raw)
}

impl From<&str> for NamingContext {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl FromStr for NamingContext {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for NamingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.distinguished_name.as_deref().unwrap_or_default())
    }
}
