//! Fixed mapping from training set keys to training set identities.

use super::builtin::{KeplerQ9, KeplerQ9Linfit, KeplerQ9v2, TdaSim, TdaSimClean, TdaSimRaw};
use super::{TrainingSet, TrainingSetKey};
use crate::error::Result;

static KEPLERQ9V2: KeplerQ9v2 = KeplerQ9v2;
static KEPLERQ9: KeplerQ9 = KeplerQ9;
static KEPLERQ9_LINFIT: KeplerQ9Linfit = KeplerQ9Linfit;
static TDASIM: TdaSim = TdaSim;
static TDASIM_RAW: TdaSimRaw = TdaSimRaw;
static TDASIM_CLEAN: TdaSimClean = TdaSimClean;

pub fn lookup_trainingset(key: TrainingSetKey) -> &'static dyn TrainingSet {
    match key {
        TrainingSetKey::KeplerQ9v2 => &KEPLERQ9V2,
        TrainingSetKey::KeplerQ9 => &KEPLERQ9,
        TrainingSetKey::KeplerQ9Linfit => &KEPLERQ9_LINFIT,
        TrainingSetKey::TdaSim => &TDASIM,
        TrainingSetKey::TdaSimRaw => &TDASIM_RAW,
        TrainingSetKey::TdaSimClean => &TDASIM_CLEAN,
    }
}

/// Resolve a training set key string to its identity.
///
/// Matching is exact and case-sensitive; anything else fails with
/// [`crate::Error::InvalidKey`].
pub fn resolve_trainingset(key: &str) -> Result<&'static dyn TrainingSet> {
    let parsed: TrainingSetKey = key.parse()?;
    Ok(lookup_trainingset(parsed))
}

pub fn trainingset_list() -> Vec<TrainingSetKey> {
    TrainingSetKey::all().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trainingset::DataLevel;

    #[test]
    fn test_lookup_matches_key() {
        for key in trainingset_list() {
            assert_eq!(lookup_trainingset(key).key(), key);
        }
    }

    #[test]
    fn test_data_levels() {
        let level = |key| lookup_trainingset(key).data_level();

        assert_eq!(level(TrainingSetKey::KeplerQ9v2), DataLevel::Corr);
        assert_eq!(level(TrainingSetKey::TdaSim), DataLevel::Corr);
        assert_eq!(level(TrainingSetKey::TdaSimRaw), DataLevel::Raw);
        assert_eq!(level(TrainingSetKey::TdaSimClean), DataLevel::Clean);
    }

    #[test]
    fn test_only_linfit_variant_removes_linear_fit() {
        let linfit: Vec<_> = trainingset_list()
            .into_iter()
            .filter(|key| lookup_trainingset(*key).linfit())
            .collect();
        assert_eq!(linfit, vec![TrainingSetKey::KeplerQ9Linfit]);
    }
}
