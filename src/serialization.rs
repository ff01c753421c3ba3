/// serialization support for quotes
use serde::{Deserialize, Serialize};

use crate::applicant::Applicant;
use crate::approval::Decision;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::quote::LoanQuote;
use crate::rate::RateBreakdown;

/// serializable snapshot of a quote at the moment it was taken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteView {
    pub inputs: InputView,
    pub pricing: PricingView,
    pub decision: Decision,
    pub approved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputView {
    pub home_cost: Money,
    pub down_payment: Money,
    pub term_years: u32,
    pub income: Money,
    pub monthly_debt_payments: Money,
    pub credit_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingView {
    pub principal: Money,
    pub rate: Rate,
    pub rate_breakdown: RateBreakdown,
    pub monthly_payment: Money,
    pub debt_to_income_ratio: Option<Rate>,
}

impl QuoteView {
    pub fn from_quote<A: Applicant>(quote: &LoanQuote<A>) -> Self {
        let applicant = quote.applicant();
        let rate_breakdown = quote.rate_breakdown();
        let decision = quote.decision();

        QuoteView {
            inputs: InputView {
                home_cost: quote.home_cost(),
                down_payment: quote.down_payment(),
                term_years: quote.years(),
                income: applicant.income(),
                monthly_debt_payments: applicant.monthly_debt_payments(),
                credit_score: applicant.credit_score(),
            },
            pricing: PricingView {
                principal: quote.principal(),
                rate: rate_breakdown.apr(),
                rate_breakdown,
                monthly_payment: quote.payment().round_dp(2),
                debt_to_income_ratio: quote.debt_to_income_ratio().map(|r| Rate::from_decimal(r.as_decimal().round_dp(4))),
            },
            approved: decision.is_approved(),
            decision,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
