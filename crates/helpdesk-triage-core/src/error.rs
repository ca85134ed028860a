use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Home directory not found")]
    HomeNotFound,
}

pub type Result<T> = std::result::Result<T, TriageError>;

impl TriageError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigParse { .. } | Self::TomlDe(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_exit_with_two() {
        let err = TriageError::ConfigParse {
            path: PathBuf::from("config.toml"),
            message: "bad".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_io_errors_exit_with_one() {
        let err = TriageError::from(std::io::Error::other("boom"));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(TriageError::HomeNotFound.exit_code(), 1);
    }
}
