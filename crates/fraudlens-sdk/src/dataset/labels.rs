//! Ground-truth label resolution

use super::loader::Dataset;
use crate::config::MissingLabelPolicy;
use crate::error::{Result, SdkError};
use fraudlens_core::{Diagnostic, Diagnostics, Label, Value, LABEL_COLUMN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

/// Read the `fraudulent` column, or synthesize labels when it is absent.
///
/// Synthesized labels are uniform over {0, 1} from `seed` and are flagged with
/// a [`Diagnostic::SyntheticLabels`]; any evaluation computed on them is
/// meaningless.
pub fn resolve_labels(
    dataset: &Dataset,
    policy: MissingLabelPolicy,
    seed: u64,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<Label>> {
    if dataset.schema.has_labels() {
        return dataset
            .records
            .iter()
            .map(|record| parse_label(record.row, record.get(LABEL_COLUMN)))
            .collect();
    }

    match policy {
        MissingLabelPolicy::Reject => Err(SdkError::MissingLabels),
        MissingLabelPolicy::Synthesize => {
            warn!(
                count = dataset.len(),
                seed,
                "Label column '{}' missing, synthesizing random labels; evaluation is not meaningful",
                LABEL_COLUMN
            );
            diagnostics.push(Diagnostic::SyntheticLabels {
                count: dataset.len(),
                seed,
            });

            let mut rng = StdRng::seed_from_u64(seed);
            Ok((0..dataset.len())
                .map(|_| Label::from_class(rng.gen_range(0..2)))
                .collect())
        }
    }
}

fn parse_label(row: usize, value: Option<&Value>) -> Result<Label> {
    let invalid = || SdkError::InvalidLabel {
        row,
        value: value.map(|v| v.to_string()).unwrap_or_default(),
    };

    match value {
        Some(Value::Bool(b)) => Ok(if *b { Label::Fraud } else { Label::Legit }),
        Some(Value::Number(n)) if *n == 0.0 => Ok(Label::Legit),
        Some(Value::Number(n)) if *n == 1.0 => Ok(Label::Fraud),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraudlens_core::RawRecord;

    fn unlabeled(n: usize) -> Dataset {
        Dataset::from_records((0..n).map(|i| RawRecord::new(i).with_field("amount", 10.0)).collect())
    }

    #[test]
    fn test_reads_label_column() {
        let dataset = Dataset::from_reader("amount,fraudulent\n1,0\n2,1\n3,true\n".as_bytes()).unwrap();
        let mut diagnostics = Diagnostics::new();

        let labels =
            resolve_labels(&dataset, MissingLabelPolicy::Synthesize, 42, &mut diagnostics).unwrap();

        assert_eq!(labels, vec![Label::Legit, Label::Fraud, Label::Fraud]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_label_cell() {
        let dataset = Dataset::from_reader("amount,fraudulent\n1,0\n2,7\n".as_bytes()).unwrap();
        let mut diagnostics = Diagnostics::new();

        let err = resolve_labels(&dataset, MissingLabelPolicy::Synthesize, 42, &mut diagnostics)
            .unwrap_err();

        match err {
            SdkError::InvalidLabel { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "7");
            }
            other => panic!("Expected InvalidLabel, got {:?}", other),
        }
    }

    #[test]
    fn test_synthesized_labels_are_seeded() {
        let dataset = unlabeled(50);
        let mut diagnostics = Diagnostics::new();

        let a = resolve_labels(&dataset, MissingLabelPolicy::Synthesize, 42, &mut diagnostics).unwrap();
        let b = resolve_labels(&dataset, MissingLabelPolicy::Synthesize, 42, &mut diagnostics).unwrap();

        assert_eq!(a.len(), 50);
        assert_eq!(a, b);
        assert!(diagnostics.has_synthetic_labels());
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_missing_labels_rejected() {
        let dataset = unlabeled(3);
        let mut diagnostics = Diagnostics::new();

        let err =
            resolve_labels(&dataset, MissingLabelPolicy::Reject, 42, &mut diagnostics).unwrap_err();
        assert!(matches!(err, SdkError::MissingLabels));
        assert!(diagnostics.is_empty());
    }
}
