use std::fmt;

use crate::node::{Location, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A node had a different shape (map, list, scalar) than its handler needs.
    Structural,
    /// A scalar was present but its text could not be read as the requested type.
    InvalidScalar,
    DepthLimit,
    Syntax,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Structural => "structural",
            ErrorKind::InvalidScalar => "invalid scalar",
            ErrorKind::DepthLimit => "depth limit",
            ErrorKind::Syntax => "syntax",
            ErrorKind::Io => "io",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Option<Location>,
}

impl Error {
    pub fn structural(expected: NodeKind, found: NodeKind, location: &Location) -> Self {
        Self {
            kind: ErrorKind::Structural,
            message: format!("expected {expected} at {location}, found {found}"),
            location: Some(location.clone()),
        }
    }

    pub fn invalid_scalar(expected: &'static str, text: &str, location: &Location) -> Self {
        Self {
            kind: ErrorKind::InvalidScalar,
            message: format!("expected {expected} at {location}, found {text:?}"),
            location: Some(location.clone()),
        }
    }

    pub fn depth_limit(limit: usize, location: &Location) -> Self {
        Self {
            kind: ErrorKind::DepthLimit,
            message: format!("nesting deeper than {limit} maps at {location}"),
            location: Some(location.clone()),
        }
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            location: None,
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
            location: None,
        }
    }

    pub fn is_structural(&self) -> bool {
        self.kind == ErrorKind::Structural
    }
}
