use std::collections::{BTreeMap, HashMap, HashSet};

use crate::metrics::{rouge_l_tokens, rouge_n_tokens, tokenize};
use crate::model::{BucketSummary, OverallReport, PerItemScore, Prediction, TestCase};

use super::stats::{mean, overall_report};

pub(super) type BucketKey = (String, String);

#[derive(Debug, Clone, Default)]
pub(super) struct Evaluation {
    pub(super) items: Vec<PerItemScore>,
    pub(super) buckets: BTreeMap<BucketKey, Vec<f64>>,
    pub(super) overall: OverallReport,
    pub(super) missing_prediction_ids: Vec<String>,
    pub(super) unmatched_prediction_count: usize,
}

impl Evaluation {
    pub(super) fn bucket_summaries(&self) -> Vec<BucketSummary> {
        self.buckets
            .iter()
            .map(|((difficulty, topic), scores)| BucketSummary {
                difficulty: difficulty.clone(),
                topic: topic.clone(),
                count: scores.len(),
                rouge_l_mean: mean(scores),
            })
            .collect()
    }
}

pub(super) fn evaluate(
    test_cases: &[TestCase],
    predictions: &HashMap<String, Prediction>,
) -> Evaluation {
    let mut items = Vec::with_capacity(test_cases.len());
    let mut buckets = BTreeMap::<BucketKey, Vec<f64>>::new();
    let mut rouge1 = Vec::with_capacity(test_cases.len());
    let mut rouge2 = Vec::with_capacity(test_cases.len());
    let mut rouge_l = Vec::with_capacity(test_cases.len());
    let mut missing_prediction_ids = Vec::new();

    for case in test_cases {
        let candidate = match predictions.get(&case.id) {
            Some(prediction) => prediction.model_answer.as_str(),
            None => {
                missing_prediction_ids.push(case.id.clone());
                ""
            }
        };

        let item = score_item(case, candidate);

        rouge1.push(item.rouge1_f1);
        rouge2.push(item.rouge2_f1);
        rouge_l.push(item.rouge_l_f1);
        buckets
            .entry((case.difficulty.clone(), case.topic.clone()))
            .or_default()
            .push(item.rouge_l_f1);
        items.push(item);
    }

    let known_ids = test_cases
        .iter()
        .map(|case| case.id.as_str())
        .collect::<HashSet<&str>>();
    let unmatched_prediction_count = predictions
        .keys()
        .filter(|id| !known_ids.contains(id.as_str()))
        .count();

    let overall = overall_report(&rouge1, &rouge2, &rouge_l, items.len());

    Evaluation {
        items,
        buckets,
        overall,
        missing_prediction_ids,
        unmatched_prediction_count,
    }
}

fn score_item(case: &TestCase, candidate: &str) -> PerItemScore {
    let reference_tokens = tokenize(&case.reference_answer);
    let candidate_tokens = tokenize(candidate);

    PerItemScore {
        id: case.id.clone(),
        difficulty: case.difficulty.clone(),
        topic: case.topic.clone(),
        rouge1_f1: rouge_n_tokens(&reference_tokens, &candidate_tokens, 1).f1,
        rouge2_f1: rouge_n_tokens(&reference_tokens, &candidate_tokens, 2).f1,
        rouge_l_f1: rouge_l_tokens(&reference_tokens, &candidate_tokens).f1,
    }
}
