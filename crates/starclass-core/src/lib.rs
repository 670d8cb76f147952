//! starclass core library
//!
//! Resolves classifier and training set keys to their implementations and
//! checks whether a training set's data is installed under the data root.

pub mod availability;
pub mod classifier;
pub mod config;
pub mod error;
pub mod trainingset;

pub use availability::is_available;
pub use classifier::resolve_classifier;
pub use error::{Error, Result};
pub use trainingset::resolve_trainingset;

/// Re-exports of commonly used types
pub mod prelude {
    // Errors
    pub use crate::error::{Error, KeyKind, Result};

    // Classifiers
    pub use crate::classifier::{Classifier, ClassifierKey, classifier_list, resolve_classifier};

    // Training sets
    pub use crate::trainingset::{
        DataLevel, TrainingSet, TrainingSetKey, resolve_trainingset, trainingset_list,
    };

    // Availability
    pub use crate::availability::{
        AvailabilityChecker, AvailabilityReport, TrainingSetAvailability, is_available,
    };
    pub use crate::config::{DataRoot, DataRootSource, TSETS_ENV_VAR};
}
