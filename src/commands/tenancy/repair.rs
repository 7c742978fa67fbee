use std::fmt;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::info;

use crate::cli::RepairArgs;

use super::{ensure_money, print_result};

pub const MINOR_REPAIR_CAP: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Responsibility {
    TenantConsumable,
    AirConditioner,
    MinorRepair { cost: f64 },
    SharedRepair { cost: f64, tenant_share: f64, landlord_share: f64 },
    LandlordStructural,
    Undetermined,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepairAssessment {
    pub repair_type: String,
    pub responsibility: Responsibility,
}

pub struct RepairClassifier {
    consumable: Regex,
    air_conditioner: Regex,
    structural: Regex,
}

impl RepairClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            consumable: Regex::new(r"\b(?:light\s*)?(?:bulbs?|tubes?)\b")
                .context("failed to compile consumable repair regex")?,
            air_conditioner: Regex::new(r"\b(?:air[\s-]*con(?:ditioners?|ditioning)?s?|a/c)\b")
                .context("failed to compile air-conditioner repair regex")?,
            structural: Regex::new(
                r"\b(?:walls?|roofs?|ceilings?|pipes?|plumbing|wiring|electrical|structur(?:e|al))\b",
            )
            .context("failed to compile structural repair regex")?,
        })
    }

    pub fn assess(&self, repair_type: &str, cost: f64) -> Result<RepairAssessment> {
        ensure_money("repair cost", cost)?;

        let repair_type = repair_type.trim().to_lowercase();
        let responsibility = if self.consumable.is_match(&repair_type) {
            Responsibility::TenantConsumable
        } else if self.air_conditioner.is_match(&repair_type) {
            Responsibility::AirConditioner
        } else if cost > 0.0 {
            if cost <= MINOR_REPAIR_CAP {
                Responsibility::MinorRepair { cost }
            } else {
                Responsibility::SharedRepair {
                    cost,
                    tenant_share: MINOR_REPAIR_CAP,
                    landlord_share: cost - MINOR_REPAIR_CAP,
                }
            }
        } else if self.structural.is_match(&repair_type) {
            Responsibility::LandlordStructural
        } else {
            Responsibility::Undetermined
        };

        Ok(RepairAssessment {
            repair_type,
            responsibility,
        })
    }
}

pub fn run(args: RepairArgs) -> Result<()> {
    let classifier = RepairClassifier::new()?;
    let assessment = classifier.assess(&args.repair_type, args.cost)?;
    info!(
        repair_type = %assessment.repair_type,
        responsibility = ?assessment.responsibility,
        "repair assessed"
    );
    print_result(&assessment)
}

impl fmt::Display for RepairAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repair = &self.repair_type;
        match self.responsibility {
            Responsibility::TenantConsumable => {
                writeln!(f, "{repair}: tenant replaces at own cost")
            }
            Responsibility::AirConditioner => {
                writeln!(f, "{repair} repair responsibility:")?;
                writeln!(f, "- Scheduled servicing (every 3 months): landlord")?;
                writeln!(f, "- Normal wear and breakdown: landlord")?;
                writeln!(f, "- Damage from misuse: tenant")?;
                writeln!(f, "Check the contract for the exact terms.")
            }
            Responsibility::MinorRepair { cost } => {
                writeln!(
                    f,
                    "{repair} (S${cost:.2}): tenant pays in full under the minor repair clause"
                )
            }
            Responsibility::SharedRepair {
                cost,
                tenant_share,
                landlord_share,
            } => {
                writeln!(f, "{repair} (S${cost:.2}):")?;
                writeln!(f, "- Tenant pays: S${tenant_share:.2}")?;
                writeln!(f, "- Landlord pays: S${landlord_share:.2}")?;
                writeln!(
                    f,
                    "The landlord usually covers the amount above S${MINOR_REPAIR_CAP:.0}."
                )
            }
            Responsibility::LandlordStructural => {
                writeln!(f, "{repair}: landlord pays (building structure or shared fixture)")
            }
            Responsibility::Undetermined => writeln!(
                f,
                "{repair}: responsibility is not defined here; check the tenancy contract or provide more detail"
            ),
        }
    }
}
