use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PvReportError {
    #[error("Failed to read report file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for PvReportError {
    fn user_message(&self) -> String {
        match self {
            PvReportError::FileRead { path, source } => {
                format!("Cannot read report file {}: {}", path.display(), source)
            }
            PvReportError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            PvReportError::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some(
                    "Check that the path is correct and the file exists. Shell globs that match nothing may be passed through literally.".to_string(),
                ),
                std::io::ErrorKind::PermissionDenied => Some(
                    "Ensure you have read permission for the file.".to_string(),
                ),
                std::io::ErrorKind::InvalidData => Some(
                    "The file is not valid UTF-8 text. pvreport only processes text reports.".to_string(),
                ),
                _ => None,
            },
            PvReportError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string(),
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for PvReportError {
    fn from(error: toml::de::Error) -> Self {
        PvReportError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PvReportError>;
