use std::fmt::Display;
use std::io;

use thiserror::Error;

use crate::value::Kind;

/// Error type for `tagged_qs`.
///
/// Only the strict entry points ever return the first two variants; the
/// permissive ones drop the offending field instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A field was visited without a query annotation.
    #[error("missing query annotation for field {field:?}")]
    MissingAnnotation { field: &'static str },

    /// A field's value has no query-string representation.
    #[error("unsupported value kind \"{kind}\"")]
    UnsupportedValueKind { kind: Kind },

    /// Raised by a user `Serialize` implementation.
    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Generate error for a field missing its query annotation.
    pub fn missing_annotation(field: &'static str) -> Self {
        Error::MissingAnnotation { field }
    }

    /// Generate error for a value of an unsupported kind.
    pub fn unsupported(kind: Kind) -> Self {
        Error::UnsupportedValueKind { kind }
    }
}

impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
