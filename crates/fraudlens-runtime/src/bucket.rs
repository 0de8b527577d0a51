//! Risk bucketizer
//!
//! Maps a fraud probability in [0, 1] to a [`RiskBucket`]. Buckets are closed
//! on the lower edge and open on the upper edge; the top bucket extends to 1.0.
//!
//! Two cut-point schemes exist. `Quartile` (0.25 / 0.50 / 0.75) is the
//! canonical one. `Inference` (0.50 / 0.62 / 0.75) reproduces the cut points
//! of the per-record inference report, re-expressed as probabilities and
//! using the same lower-closed convention.

use crate::error::{Result, RuntimeError};
use fraudlens_core::RiskBucket;
use serde::{Deserialize, Serialize};

/// Named cut-point scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketScheme {
    #[default]
    Quartile,
    Inference,
}

impl BucketScheme {
    pub fn cut_points(&self) -> CutPoints {
        match self {
            BucketScheme::Quartile => CutPoints {
                moderate: 0.25,
                high: 0.50,
                ultra_high: 0.75,
            },
            BucketScheme::Inference => CutPoints {
                moderate: 0.50,
                high: 0.62,
                ultra_high: 0.75,
            },
        }
    }
}

/// Lower edges of the Moderate, High and UltraHigh buckets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutPoints {
    pub moderate: f64,
    pub high: f64,
    pub ultra_high: f64,
}

impl CutPoints {
    /// Custom cut points; must be strictly increasing within (0, 1]
    pub fn new(moderate: f64, high: f64, ultra_high: f64) -> Result<Self> {
        let ordered = 0.0 < moderate && moderate < high && high < ultra_high && ultra_high <= 1.0;
        if !ordered {
            return Err(RuntimeError::InvalidParameter(format!(
                "cut points must satisfy 0 < {} < {} < {} <= 1",
                moderate, high, ultra_high
            )));
        }
        Ok(Self {
            moderate,
            high,
            ultra_high,
        })
    }
}

/// Probability → risk bucket mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskBucketizer {
    cuts: CutPoints,
}

impl RiskBucketizer {
    pub fn new(cuts: CutPoints) -> Self {
        Self { cuts }
    }

    pub fn from_scheme(scheme: BucketScheme) -> Self {
        Self::new(scheme.cut_points())
    }

    pub fn cut_points(&self) -> CutPoints {
        self.cuts
    }

    /// Bucket for a probability. Values outside [0, 1] are clamped; NaN is Low.
    pub fn bucketize(&self, probability: f64) -> RiskBucket {
        if probability.is_nan() {
            return RiskBucket::Low;
        }
        let p = probability.clamp(0.0, 1.0);

        if p >= self.cuts.ultra_high {
            RiskBucket::UltraHigh
        } else if p >= self.cuts.high {
            RiskBucket::High
        } else if p >= self.cuts.moderate {
            RiskBucket::Moderate
        } else {
            RiskBucket::Low
        }
    }

    /// Bucket for a probability given as a percentage in [0, 100]
    pub fn bucketize_percent(&self, percent: f64) -> RiskBucket {
        self.bucketize(percent / 100.0)
    }
}

impl Default for RiskBucketizer {
    fn default() -> Self {
        Self::from_scheme(BucketScheme::default())
    }
}
