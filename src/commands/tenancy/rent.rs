use std::fmt;

use anyhow::Result;
use tracing::info;

use crate::cli::RentArgs;

use super::{ensure_money, print_result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarlyTermination {
    pub notice_period_months: u32,
    pub penalty: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentSettlement {
    pub monthly_rent: f64,
    pub stay_months: u32,
    pub total_rent: f64,
    pub deposit: f64,
    pub early_termination: Option<EarlyTermination>,
    pub refundable_deposit: f64,
}

pub fn run(args: RentArgs) -> Result<()> {
    let settlement = settle_rent(
        args.monthly_rent,
        args.stay_months,
        args.deposit,
        args.early_termination.then_some(args.notice_period_months),
    )?;
    info!(
        total_rent = settlement.total_rent,
        refundable_deposit = settlement.refundable_deposit,
        "rent settled"
    );
    print_result(&settlement)
}

pub fn settle_rent(
    monthly_rent: f64,
    stay_months: u32,
    deposit: f64,
    early_termination_notice_months: Option<u32>,
) -> Result<RentSettlement> {
    ensure_money("monthly rent", monthly_rent)?;
    ensure_money("deposit", deposit)?;

    let total_rent = monthly_rent * f64::from(stay_months);
    let early_termination =
        early_termination_notice_months.map(|notice_period_months| EarlyTermination {
            notice_period_months,
            penalty: monthly_rent * f64::from(notice_period_months),
        });
    let refundable_deposit = match early_termination {
        Some(termination) => (deposit - termination.penalty).max(0.0),
        None => deposit,
    };

    Ok(RentSettlement {
        monthly_rent,
        stay_months,
        total_rent,
        deposit,
        early_termination,
        refundable_deposit,
    })
}

impl fmt::Display for RentSettlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rent calculation:")?;
        writeln!(f, "- Monthly rent: S${:.2}", self.monthly_rent)?;
        writeln!(f, "- Months stayed: {}", self.stay_months)?;
        writeln!(f, "- Total rent payable: S${:.2}", self.total_rent)?;
        match self.early_termination {
            Some(termination) => {
                writeln!(
                    f,
                    "- Early termination penalty ({} months notice): S${:.2}",
                    termination.notice_period_months, termination.penalty
                )?;
                writeln!(f, "- Deposit paid: S${:.2}", self.deposit)?;
                writeln!(f, "- Refundable deposit: S${:.2}", self.refundable_deposit)?;
                writeln!(
                    f,
                    "Note: the penalty follows common tenancy clauses; your contract takes precedence."
                )
            }
            None => {
                writeln!(f, "- Deposit paid: S${:.2}", self.deposit)?;
                writeln!(
                    f,
                    "- Refundable deposit (no damage): S${:.2}",
                    self.refundable_deposit
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_stay_refunds_whole_deposit() {
        let settlement = settle_rent(2500.0, 12, 2500.0, None).expect("valid inputs");
        assert_eq!(settlement.total_rent, 30000.0);
        assert_eq!(settlement.refundable_deposit, 2500.0);
        assert!(settlement.early_termination.is_none());
    }

    #[test]
    fn early_termination_deducts_penalty_from_deposit() {
        let settlement = settle_rent(1800.0, 7, 5000.0, Some(2)).expect("valid inputs");
        assert_eq!(settlement.total_rent, 12600.0);
        let termination = settlement.early_termination.expect("penalty applied");
        assert_eq!(termination.penalty, 3600.0);
        assert_eq!(settlement.refundable_deposit, 1400.0);
    }

    #[test]
    fn refundable_deposit_never_goes_negative() {
        let settlement = settle_rent(3000.0, 4, 2000.0, Some(2)).expect("valid inputs");
        assert_eq!(settlement.refundable_deposit, 0.0);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let error = settle_rent(-1.0, 3, 0.0, None).expect_err("negative rent");
        assert!(error.to_string().contains("monthly rent"));
        assert!(settle_rent(100.0, 3, f64::NAN, None).is_err());
    }

    #[test]
    fn display_lists_penalty_only_for_early_termination() {
        let early = settle_rent(1000.0, 5, 3000.0, Some(2)).expect("valid inputs");
        let text = early.to_string();
        assert!(text.contains("- Total rent payable: S$5000.00"));
        assert!(text.contains("(2 months notice): S$2000.00"));
        assert!(text.contains("- Refundable deposit: S$1000.00"));

        let regular = settle_rent(1000.0, 5, 3000.0, None).expect("valid inputs");
        let text = regular.to_string();
        assert!(!text.contains("penalty"));
        assert!(text.contains("- Refundable deposit (no damage): S$3000.00"));
    }
}
