use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::cli::ScoreArgs;
use crate::metrics::{ScoreResult, rouge_l, rouge_n, tokenize};

#[derive(Debug, Serialize)]
struct NgramScore {
    n: usize,
    #[serde(flatten)]
    score: ScoreResult,
}

#[derive(Debug, Serialize)]
struct PairScores {
    reference_tokens: usize,
    candidate_tokens: usize,
    rouge_n: Vec<NgramScore>,
    rouge_l: ScoreResult,
}

pub fn run(args: ScoreArgs) -> Result<()> {
    if args.max_n == 0 {
        bail!("--max-n must be at least 1");
    }

    let scores = score_pair(&args.reference, &args.candidate, args.max_n);

    let mut output = io::BufWriter::new(io::stdout().lock());
    if args.json {
        serde_json::to_writer_pretty(&mut output, &scores)
            .context("failed to serialize score json output")?;
        writeln!(output)?;
    } else {
        write_text_scores(&mut output, &scores)?;
    }
    output.flush()?;
    Ok(())
}

fn score_pair(reference: &str, candidate: &str, max_n: usize) -> PairScores {
    let reference_tokens = tokenize(reference).len();
    let candidate_tokens = tokenize(candidate).len();
    let max_order = max_n.min(reference_tokens.max(candidate_tokens).max(1));
    let ngram_scores = (1..=max_order)
        .map(|n| NgramScore {
            n,
            score: rouge_n(reference, candidate, n),
        })
        .collect();

    PairScores {
        reference_tokens,
        candidate_tokens,
        rouge_n: ngram_scores,
        rouge_l: rouge_l(reference, candidate),
    }
}

fn write_text_scores(output: &mut impl Write, scores: &PairScores) -> Result<()> {
    writeln!(
        output,
        "Tokens: reference={} candidate={}",
        scores.reference_tokens, scores.candidate_tokens
    )?;
    for entry in &scores.rouge_n {
        writeln!(
            output,
            "ROUGE-{}\tprecision={:.3}\trecall={:.3}\tf1={:.3}",
            entry.n, entry.score.precision, entry.score.recall, entry.score.f1
        )?;
    }
    writeln!(
        output,
        "ROUGE-L\tprecision={:.3}\trecall={:.3}\tf1={:.3}",
        scores.rouge_l.precision, scores.rouge_l.recall, scores.rouge_l.f1
    )?;
    Ok(())
}
