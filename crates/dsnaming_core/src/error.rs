use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("Naming error, invalid GUID text ({0:?})")]
    InvalidGuid(String),

    #[error("Naming error, invalid SID text ({0:?})")]
    InvalidSid(String),

    #[error("Naming error, invalid argument: {0}")]
    InvalidArgument(&'static str),
}
