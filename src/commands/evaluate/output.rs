use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{EvaluationSummary, InputFingerprint, PerItemScore};
use crate::util::{ensure_parent_directory, sha256_file};

use super::scoring::Evaluation;

const SUMMARY_MANIFEST_VERSION: u32 = 1;

pub(super) fn write_per_item_csv(path: &Path, items: &[PerItemScore]) -> Result<()> {
    ensure_parent_directory(path)?;

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create per-item csv: {}", path.display()))?;
    for item in items {
        writer
            .serialize(item)
            .with_context(|| format!("failed to write per-item csv: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush per-item csv: {}", path.display()))?;

    Ok(())
}

pub(super) struct SummaryInputs<'a> {
    pub(super) test_path: &'a Path,
    pub(super) test_count: usize,
    pub(super) pred_path: &'a Path,
    pub(super) pred_count: usize,
    pub(super) report_path: &'a Path,
    pub(super) per_item_csv_path: Option<&'a Path>,
}

pub(super) fn build_summary(
    evaluation: &Evaluation,
    inputs: &SummaryInputs<'_>,
) -> Result<EvaluationSummary> {
    Ok(EvaluationSummary {
        manifest_version: SUMMARY_MANIFEST_VERSION,
        test_set: fingerprint(inputs.test_path, inputs.test_count)?,
        predictions: fingerprint(inputs.pred_path, inputs.pred_count)?,
        overall: evaluation.overall,
        buckets: evaluation.bucket_summaries(),
        missing_prediction_count: evaluation.missing_prediction_ids.len(),
        unmatched_prediction_count: evaluation.unmatched_prediction_count,
        report_path: inputs.report_path.display().to_string(),
        per_item_csv_path: inputs
            .per_item_csv_path
            .map(|path| path.display().to_string()),
    })
}

fn fingerprint(path: &Path, record_count: usize) -> Result<InputFingerprint> {
    Ok(InputFingerprint {
        path: path.display().to_string(),
        sha256: sha256_file(path)?,
        record_count,
    })
}
