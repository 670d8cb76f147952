//! Training set keys and the training set capability.
//!
//! A training set is a labeled collection of light curves stored in its own
//! directory under the data root. Keys resolve to a static [`TrainingSet`]
//! identity through [`resolve_trainingset`].

pub mod builtin;
pub mod registry;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::paths;
use crate::error::Error;

pub use registry::{lookup_trainingset, resolve_trainingset, trainingset_list};

/// Known training set keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingSetKey {
    #[serde(rename = "keplerq9v2")]
    KeplerQ9v2,
    #[serde(rename = "keplerq9")]
    KeplerQ9,
    #[serde(rename = "keplerq9-linfit")]
    KeplerQ9Linfit,
    #[serde(rename = "tdasim")]
    TdaSim,
    #[serde(rename = "tdasim-raw")]
    TdaSimRaw,
    #[serde(rename = "tdasim-clean")]
    TdaSimClean,
}

impl TrainingSetKey {
    pub const fn all() -> [TrainingSetKey; 6] {
        [
            Self::KeplerQ9v2,
            Self::KeplerQ9,
            Self::KeplerQ9Linfit,
            Self::TdaSim,
            Self::TdaSimRaw,
            Self::TdaSimClean,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeplerQ9v2 => "keplerq9v2",
            Self::KeplerQ9 => "keplerq9",
            Self::KeplerQ9Linfit => "keplerq9-linfit",
            Self::TdaSim => "tdasim",
            Self::TdaSimRaw => "tdasim-raw",
            Self::TdaSimClean => "tdasim-clean",
        }
    }
}

impl fmt::Display for TrainingSetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TrainingSetKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::invalid_trainingset(s))
    }
}

/// Light-curve product a training set is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataLevel {
    /// Systematics-corrected light curves
    Corr,
    /// Raw simulated light curves
    Raw,
    /// Noise-free simulated light curves
    Clean,
}

impl DataLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            DataLevel::Corr => "corr",
            DataLevel::Raw => "raw",
            DataLevel::Clean => "clean",
        }
    }
}

/// Common capability of every training set implementation.
pub trait TrainingSet: Send + Sync + fmt::Debug {
    fn key(&self) -> TrainingSetKey;

    fn data_level(&self) -> DataLevel {
        DataLevel::Corr
    }

    /// Whether a linear fit is removed from the light curves before use.
    fn linfit(&self) -> bool {
        false
    }

    /// Directory holding this training set under `root`.
    fn data_dir(&self, root: &Path) -> PathBuf {
        paths::trainingset_dir(root, self.key().as_str())
    }

    /// Readiness marker for this training set under `root`.
    fn todo_file(&self, root: &Path) -> PathBuf {
        paths::todo_file(root, self.key().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_through_as_str() {
        for key in TrainingSetKey::all() {
            assert_eq!(key.as_str().parse::<TrainingSetKey>().unwrap(), key);
        }
    }

    #[test]
    fn parse_rejects_near_misses() {
        for bad in ["keplerq9v3", "KeplerQ9", "tdasim_raw", "keplerq9linfit", ""] {
            let err = bad.parse::<TrainingSetKey>().unwrap_err();
            assert!(err.is_invalid_key(), "{bad} should be an invalid key");
        }
    }

    #[test]
    fn serde_matches_key_string() {
        for key in TrainingSetKey::all() {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }
}
