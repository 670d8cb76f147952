//! Data-root configuration.
//!
//! The data root is resolved from the `STARCLASS_TSETS` environment
//! variable, falling back to a directory inside the package. An override
//! that does not name an existing directory is rejected rather than ignored.

pub mod paths;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use paths::{TODO_FILE_NAME, TSETS_ENV_VAR, default_data_root};

/// Where a data root came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataRootSource {
    /// `STARCLASS_TSETS` override
    Environment,
    /// Package default
    Default,
}

/// A resolved training set data root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRoot {
    path: PathBuf,
    source: DataRootSource,
}

impl DataRoot {
    /// Resolve from an explicit override value.
    ///
    /// `None` selects `default`. `Some` must name an existing directory, even
    /// when empty.
    pub fn resolve(override_value: Option<OsString>, default: &Path) -> Result<Self> {
        match override_value {
            None => Ok(Self {
                path: default.to_path_buf(),
                source: DataRootSource::Default,
            }),
            Some(value) => {
                let path = PathBuf::from(value);
                if !path.is_dir() {
                    return Err(Error::InvalidConfiguration {
                        variable: TSETS_ENV_VAR,
                        path,
                    });
                }
                Ok(Self {
                    path,
                    source: DataRootSource::Environment,
                })
            }
        }
    }

    /// Resolve from the process environment.
    pub fn from_env(default: &Path) -> Result<Self> {
        let root = Self::resolve(std::env::var_os(TSETS_ENV_VAR), default)?;
        tracing::debug!(
            path = %root.path.display(),
            source = ?root.source,
            "resolved training set data root"
        );
        Ok(root)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> DataRootSource {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn unset_override_uses_default_without_checking_it() {
        let default = PathBuf::from("/nonexistent/starclass/default");

        let root = DataRoot::resolve(None, &default).unwrap();

        assert_eq!(root.path(), default.as_path());
        assert_eq!(root.source(), DataRootSource::Default);
    }

    #[test]
    fn existing_override_wins() {
        let temp = TempDir::new().unwrap();

        let root = DataRoot::resolve(
            Some(temp.path().as_os_str().to_os_string()),
            Path::new("/unused"),
        )
        .unwrap();

        assert_eq!(root.path(), temp.path());
        assert_eq!(root.source(), DataRootSource::Environment);
    }

    #[test]
    fn missing_override_is_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let err = DataRoot::resolve(Some(missing.clone().into_os_string()), temp.path())
            .unwrap_err();

        match err {
            Error::InvalidConfiguration { variable, path } => {
                assert_eq!(variable, TSETS_ENV_VAR);
                assert_eq!(path, missing);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn override_pointing_at_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("tsets.txt");
        std::fs::write(&file, "").unwrap();

        let err = DataRoot::resolve(Some(file.into_os_string()), temp.path()).unwrap_err();

        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn empty_override_is_fatal() {
        let temp = TempDir::new().unwrap();

        let err = DataRoot::resolve(Some(OsString::new()), temp.path()).unwrap_err();

        assert!(err.is_invalid_configuration());
    }
}
