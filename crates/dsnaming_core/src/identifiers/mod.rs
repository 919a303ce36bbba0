//! Identifier value types embedded in naming-context descriptors.
//!
//! Both types expose a `parse` constructor returning [`NamingError`] on
//! malformed text; the naming parser relies on nothing else.
//!
//! [`NamingError`]: crate::error::NamingError

pub mod guid;
pub mod sid;
