//! Data-root path helpers.

use std::path::{Path, PathBuf};

/// Environment variable overriding the training set data root.
pub const TSETS_ENV_VAR: &str = "STARCLASS_TSETS";

/// Marker file whose presence means a training set is installed.
pub const TODO_FILE_NAME: &str = "todo.sqlite";

/// `<package-dir>/training_sets/data`.
pub fn default_data_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("training_sets")
        .join("data")
}

pub fn trainingset_dir(root: &Path, key: &str) -> PathBuf {
    root.join(key)
}

pub fn todo_file(root: &Path, key: &str) -> PathBuf {
    trainingset_dir(root, key).join(TODO_FILE_NAME)
}
