use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when persisting configuration.
///
/// Reads never produce these: an unreadable file or value is masked by
/// defaults at the call site.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to create config directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
