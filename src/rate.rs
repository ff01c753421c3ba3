use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LendingPolicy;
use crate::decimal::Rate;
use crate::types::{AdjustmentKind, CreditBand, LoanTerms};

/// one additive component of an APR
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateAdjustment {
    pub kind: AdjustmentKind,
    pub amount: Rate,
}

/// APR with the adjustments that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateBreakdown {
    pub base_rate: Rate,
    pub adjustments: Vec<RateAdjustment>,
    pub credit_band: CreditBand,
}

impl RateBreakdown {
    /// base plus every adjustment
    pub fn apr(&self) -> Rate {
        self.adjustments
            .iter()
            .fold(self.base_rate, |acc, adj| acc + adj.amount)
    }

    /// total added for one kind of rule, zero when the rule did not fire
    pub fn adjustment(&self, kind: AdjustmentKind) -> Rate {
        self.adjustments
            .iter()
            .filter(|adj| adj.kind == kind)
            .fold(Rate::ZERO, |acc, adj| acc + adj.amount)
    }
}

/// derives an APR from loan terms and credit score
pub struct RateModel<'a> {
    policy: &'a LendingPolicy,
}

impl<'a> RateModel<'a> {
    pub fn new(policy: &'a LendingPolicy) -> Self {
        Self { policy }
    }

    /// APR for the given terms and score
    pub fn compute_rate(&self, terms: &LoanTerms, credit_score: u32) -> Rate {
        self.breakdown(terms, credit_score).apr()
    }

    /// itemized APR derivation
    pub fn breakdown(&self, terms: &LoanTerms, credit_score: u32) -> RateBreakdown {
        let schedule = &self.policy.rate_schedule;
        let mut adjustments = Vec::with_capacity(3);

        // shorter terms price better
        let term_add = if terms.term_years < self.policy.term_limits.max_years {
            schedule.good_rate_add
        } else {
            schedule.normal_rate_add
        };
        adjustments.push(RateAdjustment {
            kind: AdjustmentKind::Term,
            amount: term_add,
        });

        let preferred_down = terms
            .home_cost
            .share(self.policy.down_payment.preferred_percent_down);
        if terms.down_payment < preferred_down {
            adjustments.push(RateAdjustment {
                kind: AdjustmentKind::DownPayment,
                amount: schedule.good_rate_add,
            });
        }

        let credit_band = CreditBand::classify(credit_score, &self.policy.credit_bands);
        let credit_add = match credit_band {
            CreditBand::VeryBad => Some(schedule.very_bad_rate_add),
            CreditBand::Bad => Some(schedule.bad_rate_add),
            CreditBand::Fair => Some(schedule.normal_rate_add),
            CreditBand::Good => Some(schedule.good_rate_add),
            CreditBand::Great => None,
        };
        if let Some(amount) = credit_add {
            adjustments.push(RateAdjustment {
                kind: AdjustmentKind::Credit,
                amount,
            });
        }

        let breakdown = RateBreakdown {
            base_rate: schedule.base_rate,
            adjustments,
            credit_band,
        };

        debug!(
            term_years = terms.term_years,
            credit_score,
            credit_band = ?breakdown.credit_band,
            apr = %breakdown.apr(),
            "derived rate"
        );

        breakdown
    }
}
