use crate::model::OverallReport;

pub(super) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub(super) fn nearest_rank_p10_p90(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|left, right| left.total_cmp(right));

    let n = sorted.len();
    let last = n - 1;
    let p10_index = ((0.1 * n as f64) as usize).min(last);
    let p90_index = ((0.9 * n as f64) as usize).saturating_sub(1).min(last);

    (sorted[p10_index], sorted[p90_index])
}

pub(super) fn overall_report(
    rouge1: &[f64],
    rouge2: &[f64],
    rouge_l: &[f64],
    count: usize,
) -> OverallReport {
    let (rouge_l_p10, rouge_l_p90) = nearest_rank_p10_p90(rouge_l);

    OverallReport {
        count,
        rouge1_mean: mean(rouge1),
        rouge2_mean: mean(rouge2),
        rouge_l_mean: mean(rouge_l),
        rouge_l_p10,
        rouge_l_p90,
    }
}
