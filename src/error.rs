use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("could not determine the home directory")]
    HomeDirNotFound,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("invalid exclude pattern '{pattern}': {source}")]
    ExcludePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("disk usage command failed: {0}")]
    DiskUsageCommand(String),

    #[error("disk usage output contained no filesystem rows")]
    DiskUsageEmpty,
}

pub type SweepResult<T> = std::result::Result<T, SweepError>;
