use std::fmt::Write;

use anyhow::Result;

use super::scoring::Evaluation;

const REPORT_NOTE: &str = "ROUGE implemented locally (no external scoring dependencies).";

pub(super) fn render_report(evaluation: &Evaluation) -> Result<String> {
    let overall = &evaluation.overall;
    let mut output = String::new();

    writeln!(output, "# Evaluation Report")?;
    writeln!(output)?;
    writeln!(output, "- Total items: **{}**", overall.count)?;
    writeln!(output, "- ROUGE-1(F1) mean: **{:.3}**", overall.rouge1_mean)?;
    writeln!(output, "- ROUGE-2(F1) mean: **{:.3}**", overall.rouge2_mean)?;
    writeln!(output, "- ROUGE-L(F1) mean: **{:.3}**", overall.rouge_l_mean)?;
    writeln!(
        output,
        "- ROUGE-L P10 / P90: **{:.3} / {:.3}**",
        overall.rouge_l_p10, overall.rouge_l_p90
    )?;
    writeln!(output)?;

    writeln!(output, "## Buckets (difficulty × topic)")?;
    writeln!(output)?;
    writeln!(output, "| difficulty | topic | count | ROUGE-L mean |")?;
    writeln!(output, "|---|---:|---:|---:|")?;
    for bucket in evaluation.bucket_summaries() {
        writeln!(
            output,
            "| {} | {} | {} | {:.3} |",
            bucket.difficulty, bucket.topic, bucket.count, bucket.rouge_l_mean
        )?;
    }

    writeln!(output)?;
    writeln!(output, "---")?;
    writeln!(output)?;
    writeln!(output, "**Notes**:")?;
    writeln!(output, "- {REPORT_NOTE}")?;

    Ok(output)
}
