//! Fixed mapping from classifier keys to classifier identities.

use super::builtin::{
    MetaClassifier, RfgcClassifier, SloshClassifier, SortingHatClassifier, XgbClassifier,
};
use super::{Classifier, ClassifierKey};
use crate::error::{Error, Result};

static RFGC: RfgcClassifier = RfgcClassifier;
static SLOSH: SloshClassifier = SloshClassifier;
static XGB: XgbClassifier = XgbClassifier;
static SORTINGHAT: SortingHatClassifier = SortingHatClassifier;
static META: MetaClassifier = MetaClassifier;

/// Look up the identity registered for a parsed key.
///
/// Returns `None` for keys that are enumerated but not registered.
pub fn lookup_classifier(key: ClassifierKey) -> Option<&'static dyn Classifier> {
    match key {
        ClassifierKey::Rfgc => Some(&RFGC),
        ClassifierKey::Slosh => Some(&SLOSH),
        ClassifierKey::Foptics => None,
        ClassifierKey::Xgb => Some(&XGB),
        ClassifierKey::SortingHat => Some(&SORTINGHAT),
        ClassifierKey::Meta => Some(&META),
    }
}

/// Resolve a classifier key string to its identity.
///
/// Matching is exact and case-sensitive. Unknown and disabled keys both fail
/// with [`Error::InvalidKey`].
pub fn resolve_classifier(key: &str) -> Result<&'static dyn Classifier> {
    let parsed: ClassifierKey = key.parse()?;
    lookup_classifier(parsed).ok_or_else(|| Error::invalid_classifier(key))
}

/// Registered classifier keys in declaration order.
pub fn classifier_list() -> Vec<ClassifierKey> {
    ClassifierKey::all()
        .into_iter()
        .filter(|key| key.is_enabled())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_keys() {
        let keys = classifier_list();

        assert_eq!(
            keys,
            vec![
                ClassifierKey::Rfgc,
                ClassifierKey::Slosh,
                ClassifierKey::Xgb,
                ClassifierKey::SortingHat,
                ClassifierKey::Meta,
            ]
        );
        assert!(!keys.contains(&ClassifierKey::Foptics));
    }

    #[test]
    fn test_lookup_matches_key() {
        for key in classifier_list() {
            let classifier = lookup_classifier(key).unwrap();
            assert_eq!(classifier.key(), key);
        }
    }

    #[test]
    fn test_only_meta_is_meta() {
        let metas: Vec<_> = classifier_list()
            .into_iter()
            .filter(|key| lookup_classifier(*key).unwrap().is_meta())
            .collect();
        assert_eq!(metas, vec![ClassifierKey::Meta]);
    }
}
