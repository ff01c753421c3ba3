use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::applicant::Applicant;
use crate::config::LendingPolicy;
use crate::decimal::{Money, Rate};
use crate::payments::compute_monthly_payment;
use crate::rate::RateModel;
use crate::types::LoanTerms;

/// outcome of running a quote through the approval tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    Approved,
    Rejected(RejectionReason),
}

impl Decision {
    pub fn is_approved(&self) -> bool {
        matches!(self, Decision::Approved)
    }

    pub fn rejection(&self) -> Option<&RejectionReason> {
        match self {
            Decision::Approved => None,
            Decision::Rejected(reason) => Some(reason),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Decision::Approved => "loan approved".to_string(),
            Decision::Rejected(reason) => reason.summary(),
        }
    }
}

/// the first approval test a quote failed, with observed and limit values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RejectionReason {
    RateTooHigh {
        rate: Rate,
        limit: Rate,
    },
    InsufficientDownPayment {
        down_payment: Money,
        required: Money,
    },
    DebtToIncomeTooHigh {
        ratio: Rate,
        limit: Rate,
    },
    /// applicant income is zero or negative, so no ratio exists
    NoIncome,
    /// debt plus payment is too large to express as a ratio
    ObligationsOutOfRange,
}

impl RejectionReason {
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::RateTooHigh { rate, limit } => {
                format!("rejected: rate {} above limit {}", rate, limit)
            }
            RejectionReason::InsufficientDownPayment {
                down_payment,
                required,
            } => format!(
                "rejected: down payment {} below required {}",
                down_payment, required
            ),
            RejectionReason::DebtToIncomeTooHigh { ratio, limit } => format!(
                "rejected: debt-to-income {:.4} at or above limit {}",
                ratio.as_decimal(),
                limit
            ),
            RejectionReason::NoIncome => "rejected: applicant has no income".to_string(),
            RejectionReason::ObligationsOutOfRange => {
                "rejected: monthly obligations out of range".to_string()
            }
        }
    }
}

/// (existing monthly debt + new payment) / monthly income
///
/// `None` when income is not positive or the obligations overflow `Decimal`.
pub fn debt_to_income_ratio(monthly_debt: Money, monthly_payment: Money, annual_income: Money) -> Option<Rate> {
    if !annual_income.is_positive() {
        return None;
    }
    monthly_debt
        .as_decimal()
        .checked_add(monthly_payment.as_decimal())
        .and_then(|monthly| monthly.checked_mul(Decimal::from(12)))
        .and_then(|obligations| Money::from_decimal(obligations).ratio_to(annual_income))
}

/// runs the rate, down-payment and debt-to-income tests in that order
pub struct ApprovalPolicy<'a> {
    policy: &'a LendingPolicy,
}

impl<'a> ApprovalPolicy<'a> {
    pub fn new(policy: &'a LendingPolicy) -> Self {
        Self { policy }
    }

    /// evaluate a loan; the first failing test decides the rejection
    pub fn evaluate<A: Applicant + ?Sized>(&self, terms: &LoanTerms, applicant: &A) -> Decision {
        let decision = self.decide(terms, applicant);

        match &decision {
            Decision::Approved => info!(
                home_cost = %terms.home_cost,
                term_years = terms.term_years,
                "loan approved"
            ),
            Decision::Rejected(reason) => info!(
                home_cost = %terms.home_cost,
                term_years = terms.term_years,
                reason = %reason.summary(),
                "loan rejected"
            ),
        }

        decision
    }

    pub fn is_approved<A: Applicant + ?Sized>(&self, terms: &LoanTerms, applicant: &A) -> bool {
        self.decide(terms, applicant).is_approved()
    }

    fn decide<A: Applicant + ?Sized>(&self, terms: &LoanTerms, applicant: &A) -> Decision {
        let thresholds = &self.policy.approval;

        let rate = RateModel::new(self.policy).compute_rate(terms, applicant.credit_score());
        if rate > thresholds.loan_rejected_rate {
            return Decision::Rejected(RejectionReason::RateTooHigh {
                rate,
                limit: thresholds.loan_rejected_rate,
            });
        }

        let required = terms.home_cost.share(self.policy.down_payment.min_percent_down);
        if terms.down_payment < required {
            return Decision::Rejected(RejectionReason::InsufficientDownPayment {
                down_payment: terms.down_payment,
                required,
            });
        }

        let payment = compute_monthly_payment(terms, rate);
        let Some(ratio) = debt_to_income_ratio(
            applicant.monthly_debt_payments(),
            payment,
            applicant.income(),
        ) else {
            let reason = if applicant.income().is_positive() {
                RejectionReason::ObligationsOutOfRange
            } else {
                RejectionReason::NoIncome
            };
            return Decision::Rejected(reason);
        };

        debug!(
            rate = %rate,
            payment = %payment,
            debt_to_income = %ratio.as_decimal(),
            "affordability check"
        );

        if ratio >= thresholds.max_debt_to_income {
            return Decision::Rejected(RejectionReason::DebtToIncomeTooHigh {
                ratio,
                limit: thresholds.max_debt_to_income,
            });
        }

        Decision::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicant::Customer;
    use rust_decimal_macros::dec;

    fn terms(home_cost: i64, down_payment: i64, term_years: u32) -> LoanTerms {
        LoanTerms {
            home_cost: Money::from_major(home_cost),
            down_payment: Money::from_major(down_payment),
            term_years,
        }
    }

    fn customer(income: i64, debt: i64, score: u32) -> Customer {
        Customer::new("Sam", Money::from_major(income), Money::from_major(debt), score)
    }

    #[test]
    fn test_reference_loan_approved() {
        let policy = LendingPolicy::standard();
        let decision = ApprovalPolicy::new(&policy)
            .evaluate(&terms(200_000, 40_000, 30), &customer(120_000, 500, 750));

        assert_eq!(decision, Decision::Approved);
        assert_eq!(decision.summary(), "loan approved");
    }

    #[test]
    fn test_very_bad_credit_rejected_on_rate() {
        let policy = LendingPolicy::standard();
        let decision = ApprovalPolicy::new(&policy)
            .evaluate(&terms(200_000, 40_000, 30), &customer(120_000, 500, 500));

        match decision {
            Decision::Rejected(RejectionReason::RateTooHigh { rate, limit }) => {
                assert!(rate > limit);
                assert_eq!(rate, Rate::from_decimal(dec!(0.135)));
            }
            other => panic!("expected rate rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_small_down_payment_rejected_regardless_of_credit() {
        let policy = LendingPolicy::standard();
        let approval = ApprovalPolicy::new(&policy);

        for score in [650, 700, 750, 850] {
            let decision = approval.evaluate(&terms(200_000, 10_000, 30), &customer(500_000, 0, score));
            assert!(matches!(
                decision.rejection(),
                Some(RejectionReason::InsufficientDownPayment { .. })
            ));
        }
    }

    #[test]
    fn test_rate_test_runs_before_down_payment_test() {
        let policy = LendingPolicy::standard();
        let decision = ApprovalPolicy::new(&policy)
            .evaluate(&terms(200_000, 0, 30), &customer(120_000, 0, 400));

        assert!(matches!(
            decision.rejection(),
            Some(RejectionReason::RateTooHigh { .. })
        ));
    }

    #[test]
    fn test_high_debt_rejected() {
        let policy = LendingPolicy::standard();
        let decision = ApprovalPolicy::new(&policy)
            .evaluate(&terms(200_000, 40_000, 30), &customer(60_000, 1_500, 760));

        match decision {
            Decision::Rejected(RejectionReason::DebtToIncomeTooHigh { ratio, limit }) => {
                assert!(ratio >= limit);
            }
            other => panic!("expected debt-to-income rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_debt_to_income_at_limit_rejects() {
        let mut policy = LendingPolicy::standard();
        policy.rate_schedule = crate::config::RateSchedule {
            base_rate: Rate::ZERO,
            good_rate_add: Rate::ZERO,
            normal_rate_add: Rate::ZERO,
            bad_rate_add: Rate::ZERO,
            very_bad_rate_add: Rate::ZERO,
        };
        // zero rate: 120000 over 120 months is 1000/month, plus 3000 debt on 10000/month income
        let t = terms(150_000, 30_000, 10);

        let at_limit = ApprovalPolicy::new(&policy).evaluate(&t, &customer(120_000, 3_000, 800));
        assert!(matches!(
            at_limit.rejection(),
            Some(RejectionReason::DebtToIncomeTooHigh { .. })
        ));

        let under = ApprovalPolicy::new(&policy).evaluate(&t, &customer(120_000, 2_999, 800));
        assert!(under.is_approved());
    }

    #[test]
    fn test_debt_to_income_ratio() {
        let ratio = debt_to_income_ratio(
            Money::from_major(500),
            Money::from_major(1_500),
            Money::from_major(120_000),
        )
        .unwrap();
        assert_eq!(ratio, Rate::from_decimal(dec!(0.2)));

        assert!(debt_to_income_ratio(Money::ZERO, Money::ZERO, Money::ZERO).is_none());
    }

    #[test]
    fn test_no_income_rejected() {
        let policy = LendingPolicy::standard();
        let decision = ApprovalPolicy::new(&policy)
            .evaluate(&terms(200_000, 40_000, 30), &customer(0, 0, 800));
        assert_eq!(decision, Decision::Rejected(RejectionReason::NoIncome));
    }

    #[test]
    fn test_oversized_debt_rejected_without_overflow() {
        let debt = Money::from_str_exact("7000000000000000000000000000").unwrap();
        let payment = Money::from_major(1_000);
        assert!(debt_to_income_ratio(debt, payment, Money::from_major(120_000)).is_none());

        let policy = LendingPolicy::standard();
        let applicant = Customer::new("Sam", Money::from_major(120_000), debt, 760);
        let approval = ApprovalPolicy::new(&policy);
        let t = terms(200_000, 40_000, 30);

        assert!(!approval.is_approved(&t, &applicant));
        assert_eq!(
            approval.evaluate(&t, &applicant),
            Decision::Rejected(RejectionReason::ObligationsOutOfRange)
        );
    }

    #[test]
    fn test_more_down_never_fails_down_payment_test() {
        let policy = LendingPolicy::standard();
        let approval = ApprovalPolicy::new(&policy);
        let applicant = customer(150_000, 200, 720);

        let mut seen_pass = false;
        for down in (0..=200_000).step_by(5_000) {
            let decision = approval.evaluate(&terms(200_000, down, 30), &applicant);
            let failed_down = matches!(
                decision.rejection(),
                Some(RejectionReason::InsufficientDownPayment { .. })
            );
            if seen_pass {
                assert!(!failed_down, "down payment {} failed after passing", down);
            }
            if !failed_down {
                seen_pass = true;
            }
        }
        assert!(seen_pass);
    }
}
