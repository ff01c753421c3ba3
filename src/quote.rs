use std::sync::Arc;

use crate::applicant::{validate_applicant, Applicant, Customer};
use crate::approval::{debt_to_income_ratio, ApprovalPolicy, Decision};
use crate::config::LendingPolicy;
use crate::decimal::{Money, Rate};
use crate::errors::{QuoteError, Result};
use crate::payments::{compute_monthly_payment, AmortizationSchedule};
use crate::rate::{RateBreakdown, RateModel};
use crate::serialization::QuoteView;
use crate::types::LoanTerms;

/// a mortgage quote for one applicant
///
/// Inputs are fixed at construction. Rate, payment and decision are derived
/// on every call from the stored terms and the applicant's current values.
#[derive(Debug, Clone)]
pub struct LoanQuote<A: Applicant = Customer> {
    terms: LoanTerms,
    applicant: A,
    policy: Arc<LendingPolicy>,
}

impl<A: Applicant> LoanQuote<A> {
    /// create a quote under the standard lending policy
    pub fn new(home_cost: Money, down_payment: Money, term_years: u32, applicant: A) -> Result<Self> {
        Self::with_policy(
            home_cost,
            down_payment,
            term_years,
            applicant,
            Arc::new(LendingPolicy::standard()),
        )
    }

    /// create a quote under a caller-supplied policy
    pub fn with_policy(
        home_cost: Money,
        down_payment: Money,
        term_years: u32,
        applicant: A,
        policy: Arc<LendingPolicy>,
    ) -> Result<Self> {
        policy.validate()?;

        if home_cost.is_negative() {
            return Err(QuoteError::InvalidInput {
                field: "home_cost",
                message: format!("cannot be negative, got {}", home_cost),
            });
        }

        if down_payment.is_negative() {
            return Err(QuoteError::InvalidInput {
                field: "down_payment",
                message: format!("cannot be negative, got {}", down_payment),
            });
        }

        if down_payment > home_cost {
            return Err(QuoteError::DownPaymentExceedsCost {
                down_payment,
                home_cost,
            });
        }

        if !policy.allows_term(term_years) {
            return Err(QuoteError::TermOutOfRange {
                years: term_years,
                min: policy.term_limits.min_years,
                max: policy.term_limits.max_years,
            });
        }

        validate_applicant(&applicant)?;

        Ok(Self {
            terms: LoanTerms {
                home_cost,
                down_payment,
                term_years,
            },
            applicant,
            policy,
        })
    }

    pub fn home_cost(&self) -> Money {
        self.terms.home_cost
    }

    pub fn down_payment(&self) -> Money {
        self.terms.down_payment
    }

    pub fn years(&self) -> u32 {
        self.terms.term_years
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    pub fn applicant(&self) -> &A {
        &self.applicant
    }

    pub fn policy(&self) -> &LendingPolicy {
        &self.policy
    }

    pub fn principal(&self) -> Money {
        self.terms.principal()
    }

    /// annual percentage rate
    pub fn rate(&self) -> Rate {
        self.rate_breakdown().apr()
    }

    pub fn rate_breakdown(&self) -> RateBreakdown {
        RateModel::new(&self.policy).breakdown(&self.terms, self.applicant.credit_score())
    }

    /// fixed monthly payment
    pub fn payment(&self) -> Money {
        compute_monthly_payment(&self.terms, self.rate())
    }

    /// `None` when the applicant currently reports no income
    pub fn debt_to_income_ratio(&self) -> Option<Rate> {
        debt_to_income_ratio(
            self.applicant.monthly_debt_payments(),
            self.payment(),
            self.applicant.income(),
        )
    }

    pub fn decision(&self) -> Decision {
        ApprovalPolicy::new(&self.policy).evaluate(&self.terms, &self.applicant)
    }

    pub fn is_loan_approved(&self) -> bool {
        ApprovalPolicy::new(&self.policy).is_approved(&self.terms, &self.applicant)
    }

    /// month-by-month repayment schedule at the quoted rate
    pub fn schedule(&self) -> AmortizationSchedule {
        AmortizationSchedule::generate(self.principal(), self.rate(), self.terms.term_months())
    }

    pub fn view(&self) -> QuoteView {
        QuoteView::from_quote(self)
    }

    /// pretty json snapshot of the quote
    pub fn json(&self) -> String {
        self.view().to_json().unwrap_or_else(|_| "{}".to_string())
    }
}
