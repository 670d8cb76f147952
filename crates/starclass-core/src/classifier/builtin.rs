//! Built-in classifier identities.
//!
//! The algorithms themselves live outside this crate; these types only
//! stand for them in the registry.

use super::{Classifier, ClassifierKey};

#[derive(Debug, Default)]
pub struct RfgcClassifier;

impl Classifier for RfgcClassifier {
    fn key(&self) -> ClassifierKey {
        ClassifierKey::Rfgc
    }

    fn description(&self) -> &'static str {
        "Random Forest Graph Classifier"
    }
}

#[derive(Debug, Default)]
pub struct SloshClassifier;

impl Classifier for SloshClassifier {
    fn key(&self) -> ClassifierKey {
        ClassifierKey::Slosh
    }

    fn description(&self) -> &'static str {
        "Convolutional neural network on power-density spectrum images"
    }
}

#[derive(Debug, Default)]
pub struct XgbClassifier;

impl Classifier for XgbClassifier {
    fn key(&self) -> ClassifierKey {
        ClassifierKey::Xgb
    }

    fn description(&self) -> &'static str {
        "Gradient boosted decision trees (XGBoost)"
    }
}

#[derive(Debug, Default)]
pub struct SortingHatClassifier;

impl Classifier for SortingHatClassifier {
    fn key(&self) -> ClassifierKey {
        ClassifierKey::SortingHat
    }

    fn description(&self) -> &'static str {
        "SortingHat random forest"
    }
}

#[derive(Debug, Default)]
pub struct MetaClassifier;

impl Classifier for MetaClassifier {
    fn key(&self) -> ClassifierKey {
        ClassifierKey::Meta
    }

    fn description(&self) -> &'static str {
        "Meta-classifier combining the other classifiers' outputs"
    }

    fn is_meta(&self) -> bool {
        true
    }
}
