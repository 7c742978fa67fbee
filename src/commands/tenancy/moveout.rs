use std::fmt;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use tracing::info;

use crate::cli::MoveoutArgs;

use super::print_result;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveoutDeadline {
    pub notice_date: NaiveDate,
    pub notice_days: u32,
    pub deadline: NaiveDate,
    pub days_remaining: i64,
}

pub fn run(args: MoveoutArgs) -> Result<()> {
    let deadline = moveout_deadline(&args.notice_date, args.notice_days)?;
    info!(deadline = %deadline.deadline, "move-out deadline computed");
    print_result(&deadline)
}

pub fn moveout_deadline(notice_date: &str, notice_days: u32) -> Result<MoveoutDeadline> {
    let parsed = NaiveDate::parse_from_str(notice_date.trim(), DATE_FORMAT).with_context(|| {
        format!("invalid notice date {notice_date:?}; expected YYYY-MM-DD such as 2025-03-01")
    })?;
    let deadline = parsed
        .checked_add_days(Days::new(u64::from(notice_days)))
        .with_context(|| format!("notice period of {notice_days} days overflows {parsed}"))?;

    Ok(MoveoutDeadline {
        notice_date: parsed,
        notice_days,
        deadline,
        days_remaining: (deadline - parsed).num_days(),
    })
}

impl fmt::Display for MoveoutDeadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Move-out deadline:")?;
        writeln!(f, "- Notice served: {}", self.notice_date.format(DATE_FORMAT))?;
        writeln!(f, "- Notice period: {} days", self.notice_days)?;
        writeln!(f, "- Move out by: {}", self.deadline.format(DATE_FORMAT))?;
        writeln!(f, "- Days remaining: {}", self.days_remaining)?;
        writeln!(
            f,
            "Complete the handover inspection and return the keys before the deadline."
        )
    }
}
