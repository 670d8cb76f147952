//! Built-in training set identities.

use super::{DataLevel, TrainingSet, TrainingSetKey};

/// Kepler Q9 training set, second revision.
#[derive(Debug, Default)]
pub struct KeplerQ9v2;

impl TrainingSet for KeplerQ9v2 {
    fn key(&self) -> TrainingSetKey {
        TrainingSetKey::KeplerQ9v2
    }
}

#[derive(Debug, Default)]
pub struct KeplerQ9;

impl TrainingSet for KeplerQ9 {
    fn key(&self) -> TrainingSetKey {
        TrainingSetKey::KeplerQ9
    }
}

/// Kepler Q9 with a linear fit removed from every light curve.
#[derive(Debug, Default)]
pub struct KeplerQ9Linfit;

impl TrainingSet for KeplerQ9Linfit {
    fn key(&self) -> TrainingSetKey {
        TrainingSetKey::KeplerQ9Linfit
    }

    fn linfit(&self) -> bool {
        true
    }
}

/// Simulated light curves from the T'DA working group.
#[derive(Debug, Default)]
pub struct TdaSim;

impl TrainingSet for TdaSim {
    fn key(&self) -> TrainingSetKey {
        TrainingSetKey::TdaSim
    }
}

#[derive(Debug, Default)]
pub struct TdaSimRaw;

impl TrainingSet for TdaSimRaw {
    fn key(&self) -> TrainingSetKey {
        TrainingSetKey::TdaSimRaw
    }

    fn data_level(&self) -> DataLevel {
        DataLevel::Raw
    }
}

#[derive(Debug, Default)]
pub struct TdaSimClean;

impl TrainingSet for TdaSimClean {
    fn key(&self) -> TrainingSetKey {
        TrainingSetKey::TdaSimClean
    }

    fn data_level(&self) -> DataLevel {
        DataLevel::Clean
    }
}
