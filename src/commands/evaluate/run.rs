use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::EvaluateArgs;
use crate::model::{Prediction, TestCase};
use crate::util::{write_json_pretty, write_text};

use super::output::{SummaryInputs, build_summary, write_per_item_csv};
use super::records::{index_predictions, load_jsonl};
use super::report::render_report;
use super::scoring::evaluate;

pub fn run(args: EvaluateArgs) -> Result<PathBuf> {
    info!(
        test_path = %args.test_path.display(),
        pred_path = %args.pred_path.display(),
        "starting evaluation"
    );

    let test_cases = load_jsonl::<TestCase>(&args.test_path)?;
    info!(count = test_cases.len(), "loaded test cases");

    let predictions = load_jsonl::<Prediction>(&args.pred_path)?;
    let pred_count = predictions.len();
    let predictions = index_predictions(predictions);
    info!(
        records = pred_count,
        distinct_ids = predictions.len(),
        "loaded predictions"
    );

    let evaluation = evaluate(&test_cases, &predictions);
    for id in &evaluation.missing_prediction_ids {
        debug!(id = %id, "no prediction for test case; scored against empty text");
    }
    info!(
        scored = evaluation.items.len(),
        buckets = evaluation.buckets.len(),
        missing_predictions = evaluation.missing_prediction_ids.len(),
        unmatched_predictions = evaluation.unmatched_prediction_count,
        rouge_l_mean = evaluation.overall.rouge_l_mean,
        "scoring completed"
    );

    let per_item_csv_path = match args.per_item_csv_path.as_deref() {
        Some(path) if !evaluation.items.is_empty() => {
            write_per_item_csv(path, &evaluation.items)?;
            info!(path = %path.display(), rows = evaluation.items.len(), "wrote per-item csv");
            Some(path)
        }
        Some(path) => {
            info!(path = %path.display(), "no items scored; per-item csv skipped");
            None
        }
        None => None,
    };

    let report = render_report(&evaluation)?;
    write_text(&args.report_path, &report)?;
    info!(path = %args.report_path.display(), "wrote evaluation report");

    if let Some(summary_path) = args.summary_json_path.as_deref() {
        let summary = build_summary(
            &evaluation,
            &SummaryInputs {
                test_path: &args.test_path,
                test_count: test_cases.len(),
                pred_path: &args.pred_path,
                pred_count,
                report_path: &args.report_path,
                per_item_csv_path,
            },
        )?;
        write_json_pretty(summary_path, &summary)?;
        info!(path = %summary_path.display(), "wrote evaluation summary");
    }

    Ok(args.report_path)
}
