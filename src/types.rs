use serde::{Deserialize, Serialize};

use crate::config::CreditBands;
use crate::decimal::Money;

/// structural loan inputs, before any applicant data is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub home_cost: Money,
    pub down_payment: Money,
    pub term_years: u32,
}

impl LoanTerms {
    pub fn principal(&self) -> Money {
        self.home_cost - self.down_payment
    }

    /// number of monthly installments
    pub fn term_months(&self) -> u32 {
        self.term_years * 12
    }
}

/// credit band an applicant's score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CreditBand {
    /// below the bad-credit threshold
    VeryBad,
    Bad,
    Fair,
    Good,
    /// at or above the great-credit threshold, no surcharge
    Great,
}

impl CreditBand {
    /// classify a score against ascending band thresholds
    pub fn classify(score: u32, bands: &CreditBands) -> Self {
        if score < bands.bad {
            CreditBand::VeryBad
        } else if score < bands.fair {
            CreditBand::Bad
        } else if score < bands.good {
            CreditBand::Fair
        } else if score < bands.great {
            CreditBand::Good
        } else {
            CreditBand::Great
        }
    }
}

/// which rule a rate adjustment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjustmentKind {
    Term,
    DownPayment,
    Credit,
}
