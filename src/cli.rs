use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tenancy-eval",
    version,
    about = "Local evaluation and calculator tooling for the tenancy assistant"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Evaluate(EvaluateArgs),
    Score(ScoreArgs),
    Rent(RentArgs),
    Moveout(MoveoutArgs),
    Repair(RepairArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[arg(long = "test")]
    pub test_path: PathBuf,

    #[arg(long = "pred")]
    pub pred_path: PathBuf,

    #[arg(long = "out", default_value = "eval_report.md")]
    pub report_path: PathBuf,

    #[arg(long = "per-item-csv", alias = "per_item_csv")]
    pub per_item_csv_path: Option<PathBuf>,

    #[arg(long = "summary-json")]
    pub summary_json_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[arg(long)]
    pub reference: String,

    #[arg(long)]
    pub candidate: String,

    #[arg(long, default_value_t = 2)]
    pub max_n: usize,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RentArgs {
    #[arg(long)]
    pub monthly_rent: f64,

    #[arg(long)]
    pub stay_months: u32,

    #[arg(long, default_value_t = 0.0)]
    pub deposit: f64,

    #[arg(long, default_value_t = false)]
    pub early_termination: bool,

    #[arg(long, default_value_t = 2)]
    pub notice_period_months: u32,
}

#[derive(Args, Debug, Clone)]
pub struct MoveoutArgs {
    #[arg(long)]
    pub notice_date: String,

    #[arg(long, default_value_t = 60)]
    pub notice_days: u32,
}

#[derive(Args, Debug, Clone)]
pub struct RepairArgs {
    #[arg(long)]
    pub repair_type: String,

    #[arg(long, default_value_t = 0.0)]
    pub cost: f64,
}
