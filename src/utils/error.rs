use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TwinPaneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Source and destination are the same: {}", path.display())]
    SameSourceAndDest { path: PathBuf },

    #[error("Cannot copy {} into itself ({})", src.display(), dest.display())]
    RecursiveCopy { src: PathBuf, dest: PathBuf },

    #[error("Copy failed: {} -> {}: {reason}", src.display(), dest.display())]
    CopyFailed {
        src: PathBuf,
        dest: PathBuf,
        reason: String,
    },

    #[error("Invalid settings file: {0}")]
    PreferencesDecode(#[from] toml::de::Error),

    #[error("Cannot encode settings: {0}")]
    PreferencesEncode(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, TwinPaneError>;
