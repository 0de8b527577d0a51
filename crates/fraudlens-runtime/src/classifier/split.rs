//! Seeded train/evaluation split

use super::forest::{class_targets, design_matrix};
use crate::error::{Result, RuntimeError};
use fraudlens_core::{FeatureVector, Label};
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Training and held-out partitions, as smartcore inputs
#[derive(Debug)]
pub struct TrainTestSplit {
    pub x_train: DenseMatrix<f64>,
    pub x_test: DenseMatrix<f64>,
    pub y_train: Vec<i32>,
    pub y_test: Vec<i32>,
}

impl TrainTestSplit {
    pub fn train_size(&self) -> usize {
        self.y_train.len()
    }

    pub fn test_size(&self) -> usize {
        self.y_test.len()
    }
}

/// Shuffle with `seed` and hold out `floor(test_fraction * n)` rows through
/// `smartcore::model_selection::train_test_split`.
///
/// Both partitions must end up non-empty.
pub fn train_test_split(
    features: &[FeatureVector],
    labels: &[Label],
    test_fraction: f64,
    seed: u64,
) -> Result<TrainTestSplit> {
    if features.len() != labels.len() {
        return Err(RuntimeError::LengthMismatch {
            features: features.len(),
            labels: labels.len(),
        });
    }
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(RuntimeError::InvalidParameter(format!(
            "test_fraction must be in (0, 1), got {}",
            test_fraction
        )));
    }

    // same rounding smartcore applies, checked here because it panics on an empty test set
    let n = features.len();
    let n_test = (n as f32 * test_fraction as f32) as usize;
    let n_train = n.saturating_sub(n_test);
    if n_test == 0 || n_train == 0 {
        return Err(RuntimeError::InsufficientData(format!(
            "{} records cannot be split into {} training and {} evaluation rows",
            n, n_train, n_test
        )));
    }

    let x = design_matrix(features);
    let y = class_targets(labels);
    let (x_train, x_test, y_train, y_test) =
        smartcore::model_selection::train_test_split(&x, &y, test_fraction as f32, true, Some(seed));

    Ok(TrainTestSplit {
        x_train,
        x_test,
        y_train,
        y_test,
    })
}
