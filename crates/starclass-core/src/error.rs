//! Error types for starclass registry lookups.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which registry rejected a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Classifier,
    TrainingSet,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classifier => write!(f, "classifier"),
            Self::TrainingSet => write!(f, "training set"),
        }
    }
}

/// starclass error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Key is not in the registered set (unknown or disabled)
    #[error("Invalid {kind} key specified: {key:?}")]
    InvalidKey { kind: KeyKind, key: String },

    /// Data-root override does not point at an existing directory
    #[error(
        "The environment variable {variable} is set, but points to a non-existent directory: {}",
        .path.display()
    )]
    InvalidConfiguration {
        variable: &'static str,
        path: PathBuf,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_classifier(key: impl Into<String>) -> Self {
        Self::InvalidKey {
            kind: KeyKind::Classifier,
            key: key.into(),
        }
    }

    pub fn invalid_trainingset(key: impl Into<String>) -> Self {
        Self::InvalidKey {
            kind: KeyKind::TrainingSet,
            key: key.into(),
        }
    }

    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey { .. })
    }

    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_message_names_registry_and_key() {
        let err = Error::invalid_trainingset("keplerq9v3");
        assert_eq!(
            err.to_string(),
            "Invalid training set key specified: \"keplerq9v3\""
        );
        assert!(err.is_invalid_key());
        assert!(!err.is_invalid_configuration());
    }

    #[test]
    fn invalid_configuration_message_names_variable() {
        let err = Error::InvalidConfiguration {
            variable: "STARCLASS_TSETS",
            path: PathBuf::from("/does/not/exist"),
        };
        let msg = err.to_string();
        assert!(msg.contains("STARCLASS_TSETS"));
        assert!(msg.contains("/does/not/exist"));
        assert!(err.is_invalid_configuration());
    }
}
