use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreResult {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl ScoreResult {
    pub fn from_counts(matched: usize, candidate_total: usize, reference_total: usize) -> Self {
        let precision = ratio(matched, candidate_total);
        let recall = ratio(matched, reference_total);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Self {
            precision,
            recall,
            f1,
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| !token.trim().is_empty())
        .collect()
}

pub fn ngrams(tokens: &[String], n: usize) -> Vec<&[String]> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }
    tokens.windows(n).collect()
}

fn ngram_counts(tokens: &[String], n: usize) -> (HashMap<&[String], usize>, usize) {
    let grams = ngrams(tokens, n);
    let total = grams.len();

    let mut counts = HashMap::<&[String], usize>::with_capacity(total);
    for gram in grams {
        *counts.entry(gram).or_default() += 1;
    }
    (counts, total)
}

fn clipped_overlap(
    reference: &HashMap<&[String], usize>,
    candidate: &HashMap<&[String], usize>,
) -> usize {
    candidate
        .iter()
        .map(|(gram, count)| (*count).min(reference.get(gram).copied().unwrap_or(0)))
        .sum()
}

pub fn rouge_n(reference: &str, candidate: &str, n: usize) -> ScoreResult {
    let reference_tokens = tokenize(reference);
    let candidate_tokens = tokenize(candidate);
    rouge_n_tokens(&reference_tokens, &candidate_tokens, n)
}

pub fn rouge_n_tokens(reference: &[String], candidate: &[String], n: usize) -> ScoreResult {
    let (reference_counts, reference_total) = ngram_counts(reference, n);
    let (candidate_counts, candidate_total) = ngram_counts(candidate, n);
    let overlap = clipped_overlap(&reference_counts, &candidate_counts);

    ScoreResult::from_counts(overlap, candidate_total, reference_total)
}

pub fn rouge_l(reference: &str, candidate: &str) -> ScoreResult {
    let reference_tokens = tokenize(reference);
    let candidate_tokens = tokenize(candidate);
    rouge_l_tokens(&reference_tokens, &candidate_tokens)
}

pub fn rouge_l_tokens(reference: &[String], candidate: &[String]) -> ScoreResult {
    let lcs = lcs_length(reference, candidate);
    ScoreResult::from_counts(lcs, candidate.len(), reference.len())
}

pub fn lcs_length<T: PartialEq>(xs: &[T], ys: &[T]) -> usize {
    if xs.is_empty() || ys.is_empty() {
        return 0;
    }

    let mut row = vec![0_usize; ys.len() + 1];
    for x in xs {
        // row[j - 1] from the previous pass, before it was overwritten
        let mut diagonal = 0_usize;
        for (j, y) in ys.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if x == y {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    row[ys.len()]
}
