//! Error types for upgoer-core.
//!
//! The rendering pipeline itself cannot fail. These errors come from loading
//! configuration and word files, and from input guards.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A configured word file could not be read.
    #[error("failed to read word file {path}: {source}")]
    WordFile {
        /// The resolved path that was read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while accepting input text.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input is larger than the configured limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// Size of the rejected input in bytes.
        size: usize,
        /// The configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;

/// Reject input larger than `limit` bytes. `None` disables the check.
pub const fn check_input_size(size: usize, limit: Option<usize>) -> InputResult<()> {
    match limit {
        Some(limit) if size > limit => Err(InputError::TooLarge { size, limit }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_within_limit_passes() {
        assert!(check_input_size(10, Some(10)).is_ok());
        assert!(check_input_size(usize::MAX, None).is_ok());
    }

    #[test]
    fn input_over_limit_fails() {
        let err = check_input_size(11, Some(10)).unwrap_err();
        assert_eq!(err.to_string(), "input too large: 11 bytes (limit: 10 bytes)");
    }
}
