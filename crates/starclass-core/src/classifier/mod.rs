//! Classifier keys and the classifier capability.
//!
//! Each stellar-classification algorithm is addressed by a short key. Keys
//! are parsed from strings at the boundary and resolved to a static
//! [`Classifier`] identity through [`resolve_classifier`].

pub mod builtin;
pub mod registry;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use registry::{classifier_list, lookup_classifier, resolve_classifier};

/// Known classifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKey {
    /// Random Forest Graph Classifier
    Rfgc,
    /// Convolutional network on power-density spectrum images
    Slosh,
    /// OPTICS clustering; enumerated but not registered
    Foptics,
    /// Gradient boosted trees
    Xgb,
    /// SortingHat random forest
    SortingHat,
    /// Combines the outputs of the other classifiers
    Meta,
}

impl ClassifierKey {
    /// Every enumerated key, including disabled ones, in declaration order.
    pub const fn all() -> [ClassifierKey; 6] {
        [
            Self::Rfgc,
            Self::Slosh,
            Self::Foptics,
            Self::Xgb,
            Self::SortingHat,
            Self::Meta,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rfgc => "rfgc",
            Self::Slosh => "slosh",
            Self::Foptics => "foptics",
            Self::Xgb => "xgb",
            Self::SortingHat => "sortinghat",
            Self::Meta => "meta",
        }
    }

    /// Whether the key is registered and can be resolved.
    pub fn is_enabled(self) -> bool {
        registry::lookup_classifier(self).is_some()
    }
}

impl fmt::Display for ClassifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ClassifierKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::invalid_classifier(s))
    }
}

/// Common capability of every classifier implementation.
pub trait Classifier: Send + Sync + fmt::Debug {
    fn key(&self) -> ClassifierKey;

    /// Short human-readable description.
    fn description(&self) -> &'static str;

    /// Meta classifiers consume other classifiers' outputs instead of
    /// light-curve features.
    fn is_meta(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact_and_case_sensitive() {
        assert_eq!("rfgc".parse::<ClassifierKey>().unwrap(), ClassifierKey::Rfgc);
        assert_eq!(
            "sortinghat".parse::<ClassifierKey>().unwrap(),
            ClassifierKey::SortingHat
        );
        assert!("RFGC".parse::<ClassifierKey>().is_err());
        assert!(" rfgc".parse::<ClassifierKey>().is_err());
        assert!("".parse::<ClassifierKey>().is_err());
    }

    #[test]
    fn disabled_key_parses_but_is_not_enabled() {
        let key: ClassifierKey = "foptics".parse().unwrap();
        assert_eq!(key, ClassifierKey::Foptics);
        assert!(!key.is_enabled());
    }

    #[test]
    fn display_matches_as_str() {
        for key in ClassifierKey::all() {
            assert_eq!(key.to_string(), key.as_str());
        }
    }

    #[test]
    fn serde_uses_key_string() {
        let json = serde_json::to_string(&ClassifierKey::SortingHat).unwrap();
        assert_eq!(json, "\"sortinghat\"");
        let key: ClassifierKey = serde_json::from_str("\"xgb\"").unwrap();
        assert_eq!(key, ClassifierKey::Xgb);
    }
}
