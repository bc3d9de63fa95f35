//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors.
///
/// Validation problems indicate a deploy-time data error and are allowed
/// to fail fast at startup; nothing here ever reaches a rendering path.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_display() {
        let err = ConfigError::Io(
            PathBuf::from("reva.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("reva.toml"));
    }

    #[test]
    fn test_validation_lists_every_problem() {
        let err = ConfigError::Validation(vec![
            "[cache] ttl_secs must be at least 1".to_string(),
            "[image] widths must not be empty".to_string(),
        ]);
        let display = format!("{err}");
        assert!(display.contains("ttl_secs"));
        assert!(display.contains("widths"));
    }
}
