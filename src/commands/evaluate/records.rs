use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::model::Prediction;

pub(super) fn load_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_jsonl(&raw, path)
}

pub(super) fn parse_jsonl<T: DeserializeOwned>(raw: &str, source: &Path) -> Result<Vec<T>> {
    let mut records = Vec::new();

    for (index, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record = serde_json::from_str::<T>(line).with_context(|| {
            format!("failed to parse {} line {}", source.display(), index + 1)
        })?;
        records.push(record);
    }

    Ok(records)
}

pub(super) fn index_predictions(predictions: Vec<Prediction>) -> HashMap<String, Prediction> {
    let mut indexed = HashMap::with_capacity(predictions.len());
    for prediction in predictions {
        indexed.insert(prediction.id.clone(), prediction);
    }
    indexed
}
