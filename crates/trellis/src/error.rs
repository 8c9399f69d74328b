//! Error types for Trellis widgets.
//!
//! Widget operations never fail; errors only arise while moving widget
//! configuration to and from TOML.

use std::path::PathBuf;

/// Result type alias for Trellis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring widgets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("Invalid widget configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("Failed to serialize widget configuration: {0}")]
    Serialize(String),

    /// Unknown combobox mode name.
    #[error("Unknown combobox mode '{0}' (expected single, multiple or search)")]
    InvalidMode(String),

    /// Unknown input type name.
    #[error("Unknown input type '{0}' (expected text, password, email, number or search)")]
    InvalidInputType(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidMode("dual".into());
        assert_eq!(
            err.to_string(),
            "Unknown combobox mode 'dual' (expected single, multiple or search)"
        );

        let err = Error::io(
            "widgets.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("widgets.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
