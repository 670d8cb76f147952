//! Training set availability checks.
//!
//! A training set is available when its readiness marker
//! (`<data-root>/<key>/todo.sqlite`) exists as a regular file. A missing
//! marker is a normal negative result; a misconfigured data root is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{DataRoot, DataRootSource, default_data_root};
use crate::error::Result;
use crate::trainingset::{DataLevel, TrainingSet, TrainingSetKey, lookup_trainingset};
use crate::trainingset::{resolve_trainingset, trainingset_list};

// =============================================================================
// Data Structures
// =============================================================================

/// Availability of a single training set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSetAvailability {
    pub key: TrainingSetKey,
    pub data_level: DataLevel,
    pub linfit: bool,
    pub todo_file: PathBuf,
    pub available: bool,
}

/// Availability of every registered training set under one data root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityReport {
    pub data_root: PathBuf,
    pub source: DataRootSource,
    pub trainingsets: Vec<TrainingSetAvailability>,
    pub summary: AvailabilitySummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySummary {
    pub total: usize,
    pub available: usize,
    pub missing: usize,
}

impl AvailabilityReport {
    pub fn get(&self, key: TrainingSetKey) -> Option<&TrainingSetAvailability> {
        self.trainingsets.iter().find(|t| t.key == key)
    }
}

// =============================================================================
// Checker
// =============================================================================

/// Decides whether training set data is installed.
///
/// Every call re-reads the environment and the filesystem.
#[derive(Debug, Clone)]
pub struct AvailabilityChecker {
    default_root: PathBuf,
}

impl Default for AvailabilityChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl AvailabilityChecker {
    /// Checker falling back to the package data directory.
    pub fn new() -> Self {
        Self {
            default_root: default_data_root(),
        }
    }

    /// Checker with a custom fallback root (for testing).
    ///
    /// `STARCLASS_TSETS` still takes precedence when set.
    pub fn with_default_root(default_root: impl Into<PathBuf>) -> Self {
        Self {
            default_root: default_root.into(),
        }
    }

    pub fn default_root(&self) -> &Path {
        &self.default_root
    }

    /// Resolve the data root for this call.
    pub fn data_root(&self) -> Result<DataRoot> {
        DataRoot::from_env(&self.default_root)
    }

    /// Whether the training set `key` has its data installed.
    ///
    /// Fails with `InvalidConfiguration` before looking at `key` when the
    /// override is bad, and with `InvalidKey` for unknown keys.
    pub fn is_available(&self, key: &str) -> Result<bool> {
        let root = self.data_root()?;
        let tset = resolve_trainingset(key)?;

        let todo = tset.todo_file(root.path());
        let available = todo.is_file();
        tracing::debug!(key, todo = %todo.display(), available, "checked training set");
        Ok(available)
    }

    /// Availability of every registered training set.
    pub fn status(&self) -> Result<AvailabilityReport> {
        let root = self.data_root()?;

        let trainingsets: Vec<TrainingSetAvailability> = trainingset_list()
            .into_iter()
            .map(|key| check_one(lookup_trainingset(key), root.path()))
            .collect();

        let available = trainingsets.iter().filter(|t| t.available).count();
        let summary = AvailabilitySummary {
            total: trainingsets.len(),
            available,
            missing: trainingsets.len() - available,
        };

        Ok(AvailabilityReport {
            data_root: root.path().to_path_buf(),
            source: root.source(),
            trainingsets,
            summary,
        })
    }
}

fn check_one(tset: &dyn TrainingSet, root: &Path) -> TrainingSetAvailability {
    let todo_file = tset.todo_file(root);
    let available = todo_file.is_file();
    TrainingSetAvailability {
        key: tset.key(),
        data_level: tset.data_level(),
        linfit: tset.linfit(),
        todo_file,
        available,
    }
}

/// Whether the training set `key` is installed, using the package default
/// data root unless `STARCLASS_TSETS` is set.
pub fn is_available(key: &str) -> Result<bool> {
    AvailabilityChecker::new().is_available(key)
}
