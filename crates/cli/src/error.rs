use std::path::PathBuf;

use shm_core::InvalidArgument;
use thiserror::Error;

/// Errors surfaced by the command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
