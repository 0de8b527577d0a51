//! Random forest classifier on smartcore
//!
//! The forest is a seeded ensemble of smartcore `RandomForestClassifier`
//! members, one tree each. Every member draws its own bootstrap sample and
//! feature subsets from a seed derived from the forest seed, so a fit is
//! reproducible, and the fraud probability is the fraction of members that
//! vote fraud.

use crate::error::{Result, RuntimeError};
use fraudlens_core::{FeatureVector, Label, FEATURE_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_classifier::SplitCriterion;
use std::fmt;
use std::sync::Arc;

/// Probability above which a record is predicted fraudulent
pub const FRAUD_THRESHOLD: f64 = 0.5;

type Member = RandomForestClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>;

/// Number of features considered at each split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxFeatures {
    /// floor(sqrt(n_features))
    #[default]
    Sqrt,
    /// floor(log2(n_features))
    Log2,
    /// Every feature
    All,
    /// A fixed count, capped at the number of features
    Fixed(usize),
}

impl MaxFeatures {
    pub fn resolve(&self, n_features: usize) -> usize {
        let count = match self {
            MaxFeatures::Sqrt => (n_features as f64).sqrt() as usize,
            MaxFeatures::Log2 => (n_features as f64).log2() as usize,
            MaxFeatures::All => n_features,
            MaxFeatures::Fixed(n) => *n,
        };
        count.clamp(1, n_features)
    }
}

/// Forest hyperparameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestParams {
    /// Number of trees
    pub n_estimators: usize,

    /// Maximum tree depth; `None` grows each tree without a depth limit
    pub max_depth: Option<u16>,

    /// Minimum samples required to split a node
    pub min_samples_split: usize,

    /// Minimum samples required in each leaf
    pub min_samples_leaf: usize,

    pub max_features: MaxFeatures,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: MaxFeatures::Sqrt,
        }
    }
}

impl ForestParams {
    pub fn validate(&self) -> Result<()> {
        if self.n_estimators == 0 {
            return Err(RuntimeError::InvalidParameter(
                "n_estimators must be at least 1".to_string(),
            ));
        }
        if self.min_samples_split < 2 {
            return Err(RuntimeError::InvalidParameter(
                "min_samples_split must be at least 2".to_string(),
            ));
        }
        if self.min_samples_leaf == 0 {
            return Err(RuntimeError::InvalidParameter(
                "min_samples_leaf must be at least 1".to_string(),
            ));
        }
        if self.max_depth == Some(0) {
            return Err(RuntimeError::InvalidParameter(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn member_parameters(&self, seed: u64) -> RandomForestClassifierParameters {
        let parameters = RandomForestClassifierParameters::default()
            .with_criterion(SplitCriterion::Gini)
            .with_n_trees(1)
            .with_min_samples_split(self.min_samples_split)
            .with_min_samples_leaf(self.min_samples_leaf)
            .with_m(self.max_features.resolve(FEATURE_COUNT))
            .with_seed(seed);
        match self.max_depth {
            Some(depth) => parameters.with_max_depth(depth),
            None => parameters,
        }
    }
}

/// Build the smartcore design matrix for a batch of feature vectors
pub(crate) fn design_matrix(samples: &[FeatureVector]) -> DenseMatrix<f64> {
    let rows: Vec<Vec<f64>> = samples.iter().map(|v| v.as_slice().to_vec()).collect();
    DenseMatrix::from_2d_vec(&rows)
}

/// Class targets: 0 = legit, 1 = fraud
pub(crate) fn class_targets(labels: &[Label]) -> Vec<i32> {
    labels.iter().map(|l| i32::from(l.class())).collect()
}

/// Fitted random forest
#[derive(Clone)]
pub struct RandomForest {
    members: Arc<Vec<Member>>,
    seed: u64,
}

impl fmt::Debug for RandomForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomForest")
            .field("n_trees", &self.members.len())
            .field("seed", &self.seed)
            .finish()
    }
}

impl RandomForest {
    /// Fit a forest on `samples` with ground-truth `labels`
    pub fn fit(
        samples: &[FeatureVector],
        labels: &[Label],
        params: &ForestParams,
        seed: u64,
    ) -> Result<Self> {
        params.validate()?;
        if samples.is_empty() {
            return Err(RuntimeError::EmptyTrainingSet);
        }
        if samples.len() != labels.len() {
            return Err(RuntimeError::LengthMismatch {
                features: samples.len(),
                labels: labels.len(),
            });
        }

        let x = design_matrix(samples);
        let y = class_targets(labels);
        Self::fit_matrix(&x, &y, params, seed)
    }

    pub(crate) fn fit_matrix(
        x: &DenseMatrix<f64>,
        y: &Vec<i32>,
        params: &ForestParams,
        seed: u64,
    ) -> Result<Self> {
        let mut seeds = StdRng::seed_from_u64(seed);
        let members = (0..params.n_estimators)
            .map(|_| {
                RandomForestClassifier::fit(x, y, params.member_parameters(seeds.gen()))
                    .map_err(|e| RuntimeError::Model(e.to_string()))
            })
            .collect::<Result<Vec<Member>>>()?;

        Ok(Self {
            members: Arc::new(members),
            seed,
        })
    }

    /// Fraction of trees voting fraud for each row of `x`
    pub(crate) fn vote_fractions(&self, x: &DenseMatrix<f64>, rows: usize) -> Result<Vec<f64>> {
        let mut votes = vec![0usize; rows];
        for member in self.members.iter() {
            let predicted = member
                .predict(x)
                .map_err(|e| RuntimeError::Model(e.to_string()))?;
            for (count, class) in votes.iter_mut().zip(predicted) {
                if class == 1 {
                    *count += 1;
                }
            }
        }

        let trees = self.members.len() as f64;
        Ok(votes.into_iter().map(|v| v as f64 / trees).collect())
    }

    /// Fraud probability for each sample, in [0, 1]
    pub fn predict_proba_batch(&self, samples: &[FeatureVector]) -> Result<Vec<f64>> {
        if samples.is_empty() {
            return Ok(Vec::new());
        }
        self.vote_fractions(&design_matrix(samples), samples.len())
    }

    /// Fraud probability in [0, 1]
    pub fn predict_proba(&self, x: &FeatureVector) -> Result<f64> {
        let probabilities = self.predict_proba_batch(std::slice::from_ref(x))?;
        Ok(probabilities.first().copied().unwrap_or(0.0))
    }

    pub fn predict(&self, x: &FeatureVector) -> Result<Label> {
        self.predict_proba(x).map(Self::label_for)
    }

    /// Fraud when the probability is strictly above [`FRAUD_THRESHOLD`]
    pub fn label_for(probability: f64) -> Label {
        if probability > FRAUD_THRESHOLD {
            Label::Fraud
        } else {
            Label::Legit
        }
    }

    pub fn n_trees(&self) -> usize {
        self.members.len()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
