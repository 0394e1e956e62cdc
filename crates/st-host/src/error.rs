use std::fmt;

#[derive(Debug)]
pub enum HostError {
    /// A dynamic member or method was absent on a host object.
    MissingMember(String),
    /// A host call failed.
    Invocation(String),
    /// The settings file did not parse.
    InvalidSettings(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::MissingMember(name) => write!(f, "missing host member: {name}"),
            HostError::Invocation(msg) => write!(f, "host invocation failed: {msg}"),
            HostError::InvalidSettings(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for HostError {}

pub type Result<T> = std::result::Result<T, HostError>;
