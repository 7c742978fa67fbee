use serde::{Deserialize, Deserializer, Serialize};

pub const UNKNOWN_LABEL: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestCase {
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub reference_answer: String,
    #[serde(default = "unknown_label", deserialize_with = "null_as_unknown")]
    pub difficulty: String,
    #[serde(default = "unknown_label", deserialize_with = "null_as_unknown")]
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub model_answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerItemScore {
    pub id: String,
    pub difficulty: String,
    pub topic: String,
    pub rouge1_f1: f64,
    pub rouge2_f1: f64,
    #[serde(rename = "rougeL_f1")]
    pub rouge_l_f1: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OverallReport {
    pub count: usize,
    pub rouge1_mean: f64,
    pub rouge2_mean: f64,
    #[serde(rename = "rougeL_mean")]
    pub rouge_l_mean: f64,
    #[serde(rename = "rougeL_p10")]
    pub rouge_l_p10: f64,
    #[serde(rename = "rougeL_p90")]
    pub rouge_l_p90: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSummary {
    pub difficulty: String,
    pub topic: String,
    pub count: usize,
    #[serde(rename = "rougeL_mean")]
    pub rouge_l_mean: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputFingerprint {
    pub path: String,
    pub sha256: String,
    pub record_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationSummary {
    pub manifest_version: u32,
    pub test_set: InputFingerprint,
    pub predictions: InputFingerprint,
    pub overall: OverallReport,
    pub buckets: Vec<BucketSummary>,
    pub missing_prediction_count: usize,
    pub unmatched_prediction_count: usize,
    pub report_path: String,
    pub per_item_csv_path: Option<String>,
}

fn unknown_label() -> String {
    UNKNOWN_LABEL.to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_defaults_missing_labels_to_unknown() {
        let raw = r#"{"id": "t1", "reference_answer": "pay rent monthly"}"#;
        let case: TestCase = serde_json::from_str(raw).expect("minimal test case should parse");
        assert_eq!(case.difficulty, UNKNOWN_LABEL);
        assert_eq!(case.topic, UNKNOWN_LABEL);
    }

    #[test]
    fn test_case_treats_null_fields_as_defaults() {
        let raw = r#"{"id": "t1", "reference_answer": null, "difficulty": null, "topic": "rent"}"#;
        let case: TestCase = serde_json::from_str(raw).expect("null fields should parse");
        assert_eq!(case.reference_answer, "");
        assert_eq!(case.difficulty, UNKNOWN_LABEL);
        assert_eq!(case.topic, "rent");
    }

    #[test]
    fn test_case_requires_reference_answer_key() {
        let raw = r#"{"id": "t1", "difficulty": "easy"}"#;
        assert!(serde_json::from_str::<TestCase>(raw).is_err());
    }

    #[test]
    fn test_case_ignores_unknown_keys() {
        let raw = r#"{"id": "t1", "reference_answer": "x", "question": "what?", "source": 3}"#;
        let case: TestCase = serde_json::from_str(raw).expect("extra keys should be ignored");
        assert_eq!(case.id, "t1");
    }

    #[test]
    fn prediction_without_answer_resolves_to_empty_text() {
        let missing: Prediction =
            serde_json::from_str(r#"{"id": "t1"}"#).expect("missing answer should parse");
        assert_eq!(missing.model_answer, "");

        let null: Prediction = serde_json::from_str(r#"{"id": "t1", "model_answer": null}"#)
            .expect("null answer should parse");
        assert_eq!(null.model_answer, "");
    }

    #[test]
    fn per_item_score_serializes_with_report_column_names() {
        let score = PerItemScore {
            id: "t1".to_string(),
            difficulty: "easy".to_string(),
            topic: "rent".to_string(),
            rouge1_f1: 0.5,
            rouge2_f1: 0.2,
            rouge_l_f1: 0.5,
        };
        let value = serde_json::to_value(&score).expect("score should serialize");
        assert_eq!(value["rougeL_f1"], serde_json::json!(0.5));
        assert!(value.get("rouge_l_f1").is_none());
    }
}
