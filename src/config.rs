use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{QuoteError, Result};

/// lending policy: every constant the rate and approval models read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LendingPolicy {
    pub term_limits: TermLimits,
    pub rate_schedule: RateSchedule,
    pub credit_bands: CreditBands,
    pub down_payment: DownPaymentRules,
    pub approval: ApprovalThresholds,
}

/// allowed loan terms in years, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermLimits {
    pub min_years: u32,
    pub max_years: u32,
}

/// base rate plus the additive tiers applied on top of it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    pub base_rate: Rate,
    pub good_rate_add: Rate,
    pub normal_rate_add: Rate,
    pub bad_rate_add: Rate,
    pub very_bad_rate_add: Rate,
}

/// lower bounds of each credit band, strictly ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditBands {
    pub bad: u32,
    pub fair: u32,
    pub good: u32,
    pub great: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DownPaymentRules {
    /// below this share of the home cost the rate picks up a surcharge
    pub preferred_percent_down: Rate,
    /// below this share of the home cost the loan is rejected
    pub min_percent_down: Rate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApprovalThresholds {
    /// any APR strictly above this is rejected
    pub loan_rejected_rate: Rate,
    /// debt-to-income ratios at or above this are rejected
    pub max_debt_to_income: Rate,
}

impl LendingPolicy {
    /// house policy for a conventional fixed-rate mortgage
    pub fn standard() -> Self {
        Self {
            term_limits: TermLimits {
                min_years: 10,
                max_years: 30,
            },
            rate_schedule: RateSchedule {
                base_rate: Rate::from_decimal(dec!(0.025)),
                good_rate_add: Rate::from_decimal(dec!(0.005)),
                normal_rate_add: Rate::from_decimal(dec!(0.01)),
                bad_rate_add: Rate::from_decimal(dec!(0.05)),
                very_bad_rate_add: Rate::from_decimal(dec!(0.10)),
            },
            credit_bands: CreditBands {
                bad: 550,
                fair: 650,
                good: 700,
                great: 750,
            },
            down_payment: DownPaymentRules {
                preferred_percent_down: Rate::from_decimal(dec!(0.20)),
                min_percent_down: Rate::from_decimal(dec!(0.10)),
            },
            approval: ApprovalThresholds {
                loan_rejected_rate: Rate::from_decimal(dec!(0.10)),
                max_debt_to_income: Rate::from_decimal(dec!(0.40)),
            },
        }
    }

    /// load a policy from json and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: LendingPolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// check internal consistency of the policy
    pub fn validate(&self) -> Result<()> {
        let terms = &self.term_limits;
        if terms.min_years == 0 {
            return Err(invalid("minimum term must be at least one year"));
        }
        if terms.min_years > terms.max_years {
            return Err(invalid(format!(
                "minimum term {} exceeds maximum term {}",
                terms.min_years, terms.max_years
            )));
        }

        let bands = &self.credit_bands;
        if !(bands.bad < bands.fair && bands.fair < bands.good && bands.good < bands.great) {
            return Err(invalid(format!(
                "credit bands must ascend strictly: {} < {} < {} < {}",
                bands.bad, bands.fair, bands.good, bands.great
            )));
        }

        let schedule = &self.rate_schedule;
        let rates = [
            ("base_rate", schedule.base_rate),
            ("good_rate_add", schedule.good_rate_add),
            ("normal_rate_add", schedule.normal_rate_add),
            ("bad_rate_add", schedule.bad_rate_add),
            ("very_bad_rate_add", schedule.very_bad_rate_add),
            ("loan_rejected_rate", self.approval.loan_rejected_rate),
            ("max_debt_to_income", self.approval.max_debt_to_income),
        ];
        for (name, rate) in rates {
            if rate.is_negative() {
                return Err(invalid(format!("{} cannot be negative: {}", name, rate)));
            }
        }

        let fractions = [
            ("preferred_percent_down", self.down_payment.preferred_percent_down),
            ("min_percent_down", self.down_payment.min_percent_down),
        ];
        for (name, fraction) in fractions {
            if fraction.is_negative() || fraction > Rate::ONE {
                return Err(invalid(format!("{} must be within 0..=1: {}", name, fraction)));
            }
        }

        Ok(())
    }

    /// true when the term falls inside the allowed range
    pub fn allows_term(&self, years: u32) -> bool {
        (self.term_limits.min_years..=self.term_limits.max_years).contains(&years)
    }
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

fn invalid(message: impl Into<String>) -> QuoteError {
    QuoteError::InvalidConfiguration {
        message: message.into(),
    }
}
