//! Unit tests for ScoringEngine

use super::*;
use crate::config::{MissingLabelPolicy, PipelineConfig};
use crate::dataset::Dataset;
use crate::error::SdkError;
use fraudlens_core::{CoreError, Diagnostic, FraudTag, RawRecord, RiskBucket};
use fraudlens_runtime::{ForestParams, UnknownCategoryPolicy};

fn record(row: usize, amount: f64, logins: f64, beneficiary: &str, fraudulent: bool) -> RawRecord {
    RawRecord::new(row)
        .with_field("userid", format!("U{}", row))
        .with_field("amount", amount)
        .with_field("location", if row % 2 == 0 { "Mumbai" } else { "Delhi" })
        .with_field("multi_login_attempts", logins)
        .with_field("time", format!("2024-05-01 {:02}:00:00", row % 24))
        .with_field("ip_address", format!("10.0.{}.{}", row % 7, row % 11))
        .with_field("device", "mobile")
        .with_field("change_in_personal_info", false)
        .with_field("payment_type", "card")
        .with_field("beneficiary", beneficiary)
        .with_field("fraudulent", if fraudulent { 1.0 } else { 0.0 })
}

fn dataset(n: usize) -> Dataset {
    let records = (0..n)
        .map(|i| {
            let fraud = i % 3 == 0;
            let amount = if fraud { 12000.0 + i as f64 * 10.0 } else { 500.0 + i as f64 };
            let logins = if fraud { 4.0 } else { 0.0 };
            record(i, amount, logins, if i % 4 == 0 { "B1" } else { "B0" }, fraud)
        })
        .collect();
    Dataset::from_records(records)
}

fn small_config() -> PipelineConfig {
    PipelineConfig::new().with_forest(ForestParams {
        n_estimators: 15,
        ..ForestParams::default()
    })
}

#[test]
fn test_run_scores_every_record_in_order() {
    let data = dataset(30);
    let output = ScoringEngine::new(small_config()).run(&data).unwrap();

    assert_eq!(output.len(), 30);
    for (i, result) in output.results.iter().enumerate() {
        assert_eq!(result.row, i);
        assert_eq!(result.record_id, format!("U{}", i));
        assert!((0.0..=1.0).contains(&result.probability));
        assert!(RiskBucket::ALL.contains(&result.risk_bucket));
    }
    assert_eq!(output.evaluation.test_size, 9);
    assert_eq!(output.evaluation.train_size, 21);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_tags_follow_rules() {
    let data = dataset(12);
    let output = ScoringEngine::new(small_config()).run(&data).unwrap();

    // Row 0: amount 12000, 4 logins, beneficiary B1 (code 1)
    let first = &output.results[0];
    assert!(first.fraud_tags.contains(FraudTag::Transaction));
    assert!(first.fraud_tags.contains(FraudTag::CreditCard));
    assert!(first.fraud_tags.contains(FraudTag::Phishing));
    assert!(first.fraud_tags.contains(FraudTag::IdentityTheft));

    // Row 1: small amount, no logins
    assert!(output.results[1].fraud_tags.is_empty());
}

#[test]
fn test_parallel_scoring_matches_sequential() {
    let data = dataset(40);
    let sequential = ScoringEngine::new(small_config()).run(&data).unwrap();
    let parallel = ScoringEngine::new(small_config().parallel_scoring(true))
        .run(&data)
        .unwrap();

    assert_eq!(sequential.results, parallel.results);
}

#[test]
fn test_predicted_label_comes_from_model() {
    let data = dataset(30);
    let pipeline = ScoringEngine::new(small_config()).fit(&data).unwrap();
    let batch = pipeline.score(&data.records).unwrap();

    for (record, result) in data.records.iter().zip(&batch.results) {
        let vector = pipeline
            .normalizer()
            .normalize(record, &mut fraudlens_core::Diagnostics::new())
            .unwrap();
        assert_eq!(result.predicted_label, pipeline.model().predict(&vector).unwrap());
        assert_eq!(result.probability, pipeline.model().predict_proba(&vector).unwrap());
    }
}

#[test]
fn test_fitted_pipeline_scores_new_records() {
    let data = dataset(24);
    let pipeline = ScoringEngine::new(small_config()).fit(&data).unwrap();

    let unseen = record(100, 20000.0, 5.0, "B9", true);
    let batch = pipeline.score(&[unseen.clone()]).unwrap();

    assert_eq!(batch.results.len(), 1);
    assert_eq!(batch.results[0].record_id, "U100");
    // Reserved code never triggers the phishing rule
    assert!(!batch.results[0].fraud_tags.contains(FraudTag::Phishing));
    assert!(matches!(
        batch.diagnostics.iter().next(),
        Some(Diagnostic::UnknownCategory { row: 100, .. })
    ));

    let mut diagnostics = fraudlens_core::Diagnostics::new();
    let single = pipeline.score_record(&unseen, &mut diagnostics).unwrap();
    assert_eq!(single, batch.results[0]);
}

#[test]
fn test_unknown_category_rejected_by_policy() {
    let data = dataset(24);
    let config = small_config().with_unknown_category(UnknownCategoryPolicy::Reject);
    let pipeline = ScoringEngine::new(config).fit(&data).unwrap();

    let err = pipeline
        .score(&[record(100, 100.0, 0.0, "B9", false)])
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::RuntimeError(fraudlens_runtime::RuntimeError::Core(
            CoreError::UnknownCategory { .. }
        ))
    ));
}

#[test]
fn test_missing_columns_fail_before_training() {
    let records = vec![RawRecord::new(0)
        .with_field("amount", 10.0)
        .with_field("location", "Pune")];
    let data = Dataset::from_records(records);

    let err = ScoringEngine::new(small_config()).run(&data).unwrap_err();
    match err {
        SdkError::CoreError(CoreError::MissingFeatures(missing)) => {
            assert_eq!(missing.len(), 7);
            assert!(missing.contains(&"time".to_string()));
            assert!(!missing.contains(&"amount".to_string()));
        }
        other => panic!("Expected MissingFeatures, got {:?}", other),
    }
}

#[test]
fn test_empty_dataset() {
    let data = Dataset::from_reader(
        "amount,location,multi_login_attempts,time,ip_address,device,change_in_personal_info,payment_type,beneficiary\n"
            .as_bytes(),
    )
    .unwrap();

    let err = ScoringEngine::new(small_config()).run(&data).unwrap_err();
    assert!(matches!(err, SdkError::EmptyDataset));
}

#[test]
fn test_missing_labels_policy() {
    let records: Vec<RawRecord> = dataset(20)
        .records
        .into_iter()
        .map(|mut r| {
            r.fields.remove("fraudulent");
            r
        })
        .collect();
    let data = Dataset::from_records(records);

    let output = ScoringEngine::new(small_config()).run(&data).unwrap();
    assert!(output.diagnostics.has_synthetic_labels());
    assert_eq!(output.len(), 20);

    let reject = small_config().with_missing_labels(MissingLabelPolicy::Reject);
    let err = ScoringEngine::new(reject).run(&data).unwrap_err();
    assert!(matches!(err, SdkError::MissingLabels));
}
