//! Helpers for the naming layer of a directory service.
//!
//! Two independent, stateless pieces live here:
//!
//! - [`naming`]: parses naming-context descriptors such as
//!   `<GUID=...>;<SID=...>;CN=Users,DC=example,DC=com` into a [`NamingContext`].
//!   Malformed identifier segments are dropped, never reported, so parsing a
//!   string always yields a value.
//! - [`flatten`]: reduces a sequence of attribute values to nothing, a single
//!   value or the full sequence.
//!
//! The [`identifiers`] module carries the GUID and SID value types consumed by
//! the naming parser.
pub mod error;
pub mod flatten;
pub mod identifiers;
pub mod naming;

pub use error::NamingError;
pub use flatten::{Flattened, flatten};
pub use identifiers::{guid::Guid, sid::SecurityIdentifier};
pub use naming::{NamingContext, parse_naming_context};

#[cfg(test)]
mod tests;
