use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The store file could not be opened or its schema applied.
    #[error("{store} store unavailable: {reason}")]
    StorageUnavailable { store: &'static str, reason: String },

    /// Dependent entities were requested without any parents to reference.
    #[error("invalid precondition: {0}")]
    InvalidPrecondition(String),

    #[error("malformed {field}: {reason}")]
    MalformedInput { field: &'static str, reason: String },

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn storage(store: &'static str, reason: impl ToString) -> Self {
        Error::StorageUnavailable {
            store,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_unavailable_names_the_store() {
        let err = Error::storage("authors", "unable to open database file");
        assert_eq!(
            err.to_string(),
            "authors store unavailable: unable to open database file"
        );
    }

    #[test]
    fn config_errors_are_transparent() {
        let err: Error = ConfigError::InvalidValue {
            field: "logging.format",
            reason: "expected \"pretty\" or \"json\"".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("invalid value for logging.format"));
    }
}
