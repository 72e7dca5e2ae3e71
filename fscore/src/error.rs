//! Error types for the directory browser

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{name}' already exists")]
    AlreadyExists { name: String },

    #[error("{}", not_a_file_message(.name.as_deref()))]
    NotAFile { name: Option<String> },

    #[error("directory '{name}' is not empty")]
    DirectoryNotEmpty { name: String },

    #[error("unable to open '{}' with the default application: {source}", .path.display())]
    LaunchFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{name}' no longer exists")]
    NotFound { name: String },

    #[error("invalid name '{name}'")]
    InvalidName { name: String },
}

pub type Result<T> = std::result::Result<T, BrowseError>;

impl BrowseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BrowseError::Io { path: path.into(), source }
    }

    /// Short title for the notice window that reports this error.
    pub fn title(&self) -> &'static str {
        match self {
            BrowseError::Io { .. } => "i/o error",
            BrowseError::AlreadyExists { .. } => "already exists",
            BrowseError::NotAFile { .. } => "not a file",
            BrowseError::DirectoryNotEmpty { .. } => "directory not empty",
            BrowseError::LaunchFailed { .. } => "launch failed",
            BrowseError::NotFound { .. } => "not found",
            BrowseError::InvalidName { .. } => "invalid name",
        }
    }
}

fn not_a_file_message(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("'{}' is not a file", name),
        None => "select a file first".to_string(),
    }
}
