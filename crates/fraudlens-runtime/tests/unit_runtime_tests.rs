//! Unit tests for fraudlens-runtime
//!
//! Exercises the scoring stages together on small hand-built corpora.

use fraudlens_core::{Diagnostics, Feature, FraudTag, Label, RawRecord, RiskBucket};
use fraudlens_runtime::{
    BucketScheme, ClassifierConfig, FeatureNormalizer, ForestParams, FraudTagger, RiskBucketizer,
    RiskClassifier, UnknownCategoryPolicy,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LOCATIONS: [&str; 4] = ["Delhi", "Mumbai", "Pune", "Kolkata"];
const DEVICES: [&str; 3] = ["mobile", "desktop", "tablet"];
const PAYMENTS: [&str; 3] = ["card", "upi", "netbanking"];

fn random_record(row: usize, rng: &mut StdRng) -> RawRecord {
    let amount = rng.gen_range(100..30000) as f64;
    let logins = rng.gen_range(0..6) as f64;
    RawRecord::new(row)
        .with_field("userid", format!("U{:03}", row))
        .with_field("amount", amount)
        .with_field("location", LOCATIONS[rng.gen_range(0..LOCATIONS.len())])
        .with_field("multi_login_attempts", logins)
        .with_field(
            "time",
            format!("2024-02-{:02} {:02}:15:00", rng.gen_range(1..28), rng.gen_range(0..24)),
        )
        .with_field(
            "ip_address",
            format!("{}.{}.{}.{}", rng.gen_range(1..255), rng.gen_range(0..255), rng.gen_range(0..255), rng.gen_range(1..255)),
        )
        .with_field("device", DEVICES[rng.gen_range(0..DEVICES.len())])
        .with_field("change_in_personal_info", rng.gen_bool(0.2))
        .with_field("payment_type", PAYMENTS[rng.gen_range(0..PAYMENTS.len())])
        .with_field("beneficiary", format!("B{}", rng.gen_range(0..5)))
}

fn corpus(n: usize, seed: u64) -> Vec<RawRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|row| random_record(row, &mut rng)).collect()
}

fn label_for(record: &RawRecord) -> Label {
    let risky = record.number_or_zero("amount") > 12000.0
        || record.number_or_zero("multi_login_attempts") > 3.0;
    if risky {
        Label::Fraud
    } else {
        Label::Legit
    }
}

fn small_classifier() -> RiskClassifier {
    RiskClassifier::new(ClassifierConfig {
        forest: ForestParams {
            n_estimators: 25,
            ..ForestParams::default()
        },
        ..ClassifierConfig::default()
    })
}

// ========== Normalizer Tests ==========

#[test]
fn test_every_vector_is_complete_and_finite() {
    let records = corpus(60, 1);
    let normalizer = FeatureNormalizer::fit(&records, UnknownCategoryPolicy::ReserveCode);
    let mut diagnostics = Diagnostics::new();

    let vectors = normalizer.normalize_all(&records, &mut diagnostics).unwrap();

    assert_eq!(vectors.len(), records.len());
    for vector in &vectors {
        assert_eq!(vector.as_slice().len(), Feature::ALL.len());
        assert!(vector.as_slice().iter().all(|v| v.is_finite()));
        let hour = vector.get(Feature::Time);
        assert!((0.0..24.0).contains(&hour));
    }
    assert!(diagnostics.is_empty());
}

#[test]
fn test_encoder_fitted_once_and_reused() {
    let records = corpus(30, 2);
    let normalizer = FeatureNormalizer::fit(&records, UnknownCategoryPolicy::ReserveCode);
    let encoder = normalizer.encoder(Feature::Location).unwrap();
    assert!(encoder.len() <= LOCATIONS.len());

    let mut diagnostics = Diagnostics::new();
    let first = normalizer.normalize_all(&records, &mut diagnostics).unwrap();
    let second = normalizer.normalize_all(&records, &mut diagnostics).unwrap();
    assert_eq!(first, second);
}

// ========== Tagger Tests ==========

#[test]
fn test_tagger_is_total_over_random_records() {
    let records = corpus(200, 3);
    let normalizer = FeatureNormalizer::fit(&records, UnknownCategoryPolicy::ReserveCode);
    let tagger = FraudTagger::default();
    let mut diagnostics = Diagnostics::new();

    for record in &records {
        let vector = normalizer.normalize(record, &mut diagnostics).unwrap();
        let tags = tagger.classify_fraud_type(&vector);
        assert!(tags.len() <= FraudTag::ALL.len());
        assert!(tags.iter().all(|t| FraudTag::ALL.contains(&t)));

        if record.number_or_zero("amount") > 10000.0 {
            assert!(tags.contains(FraudTag::CreditCard));
        }
    }
}

// ========== Classifier Tests ==========

#[test]
fn test_probabilities_in_unit_interval() {
    let records = corpus(80, 4);
    let labels: Vec<Label> = records.iter().map(label_for).collect();
    let normalizer = FeatureNormalizer::fit(&records, UnknownCategoryPolicy::ReserveCode);
    let mut diagnostics = Diagnostics::new();
    let vectors = normalizer.normalize_all(&records, &mut diagnostics).unwrap();

    let outcome = small_classifier().train(&vectors, &labels).unwrap();

    for vector in &vectors {
        let p = outcome.model.predict_proba(vector).unwrap();
        assert!((0.0..=1.0).contains(&p), "probability out of range: {}", p);
        assert_eq!(outcome.model.predict(vector).unwrap() == Label::Fraud, p > 0.5);
    }
    assert_eq!(outcome.evaluation.test_size, 24);
}

#[test]
fn test_learns_threshold_signal() {
    let records = corpus(150, 5);
    let labels: Vec<Label> = records.iter().map(label_for).collect();
    let normalizer = FeatureNormalizer::fit(&records, UnknownCategoryPolicy::ReserveCode);
    let mut diagnostics = Diagnostics::new();
    let vectors = normalizer.normalize_all(&records, &mut diagnostics).unwrap();

    let outcome = small_classifier().train(&vectors, &labels).unwrap();

    assert!(
        outcome.evaluation.accuracy >= 0.8,
        "accuracy too low: {}",
        outcome.evaluation.accuracy
    );
}

#[test]
fn test_same_seed_same_accuracy() {
    let records = corpus(60, 6);
    let labels: Vec<Label> = records.iter().map(label_for).collect();
    let normalizer = FeatureNormalizer::fit(&records, UnknownCategoryPolicy::ReserveCode);
    let mut diagnostics = Diagnostics::new();
    let vectors = normalizer.normalize_all(&records, &mut diagnostics).unwrap();

    let a = small_classifier().train(&vectors, &labels).unwrap();
    let b = small_classifier().train(&vectors, &labels).unwrap();

    assert_eq!(a.evaluation.accuracy, b.evaluation.accuracy);
    assert_eq!(a.evaluation.report, b.evaluation.report);
}

// ========== Bucketizer Tests ==========

#[test]
fn test_bucket_every_probability() {
    let records = corpus(40, 7);
    let labels: Vec<Label> = records.iter().map(label_for).collect();
    let normalizer = FeatureNormalizer::fit(&records, UnknownCategoryPolicy::ReserveCode);
    let mut diagnostics = Diagnostics::new();
    let vectors = normalizer.normalize_all(&records, &mut diagnostics).unwrap();
    let outcome = small_classifier().train(&vectors, &labels).unwrap();

    let quartile = RiskBucketizer::from_scheme(BucketScheme::Quartile);
    for vector in &vectors {
        let p = outcome.model.predict_proba(vector).unwrap();
        let bucket = quartile.bucketize(p);
        assert!(RiskBucket::ALL.contains(&bucket));
        if p >= 0.75 {
            assert_eq!(bucket, RiskBucket::UltraHigh);
        }
    }
}

#[test]
fn test_bucket_boundaries() {
    let bucketizer = RiskBucketizer::default();
    assert_eq!(bucketizer.bucketize(0.25), RiskBucket::Moderate);
    assert_eq!(bucketizer.bucketize(0.999), RiskBucket::UltraHigh);
}
