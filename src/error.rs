use std::path::PathBuf;

/// Errors that can occur when reading or writing the high-score file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read high score from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse high score from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write high score to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Read {
            path: PathBuf::from("high_score.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read high score from high_score.json: denied"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("frame_rate must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: frame_rate must be > 0"
        );
    }
}
