use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{QuoteError, Result};

/// applicant data a quote reads on every query
///
/// Values are read each time a derived figure is computed, so an
/// implementation backed by shared or interior-mutable state is observed
/// as it changes.
pub trait Applicant {
    /// annual gross income, expected to be positive
    fn income(&self) -> Money;

    /// existing monthly debt obligations, expected to be non-negative
    fn monthly_debt_payments(&self) -> Money;

    fn credit_score(&self) -> u32;
}

impl<T: Applicant + ?Sized> Applicant for &T {
    fn income(&self) -> Money {
        (**self).income()
    }

    fn monthly_debt_payments(&self) -> Money {
        (**self).monthly_debt_payments()
    }

    fn credit_score(&self) -> u32 {
        (**self).credit_score()
    }
}

impl<T: Applicant + ?Sized> Applicant for Box<T> {
    fn income(&self) -> Money {
        (**self).income()
    }

    fn monthly_debt_payments(&self) -> Money {
        (**self).monthly_debt_payments()
    }

    fn credit_score(&self) -> u32 {
        (**self).credit_score()
    }
}

impl<T: Applicant + ?Sized> Applicant for Rc<T> {
    fn income(&self) -> Money {
        (**self).income()
    }

    fn monthly_debt_payments(&self) -> Money {
        (**self).monthly_debt_payments()
    }

    fn credit_score(&self) -> u32 {
        (**self).credit_score()
    }
}

impl<T: Applicant + ?Sized> Applicant for Arc<T> {
    fn income(&self) -> Money {
        (**self).income()
    }

    fn monthly_debt_payments(&self) -> Money {
        (**self).monthly_debt_payments()
    }

    fn credit_score(&self) -> u32 {
        (**self).credit_score()
    }
}

/// plain applicant record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub income: Money,
    pub monthly_debt_payments: Money,
    pub credit_score: u32,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        income: Money,
        monthly_debt_payments: Money,
        credit_score: u32,
    ) -> Self {
        Self {
            name: name.into(),
            income,
            monthly_debt_payments,
            credit_score,
        }
    }
}

impl Applicant for Customer {
    fn income(&self) -> Money {
        self.income
    }

    fn monthly_debt_payments(&self) -> Money {
        self.monthly_debt_payments
    }

    fn credit_score(&self) -> u32 {
        self.credit_score
    }
}

/// check the collaborator contract: positive income, non-negative debt
pub(crate) fn validate_applicant<A: Applicant + ?Sized>(applicant: &A) -> Result<()> {
    let income = applicant.income();
    if !income.is_positive() {
        return Err(QuoteError::InvalidApplicant {
            message: format!("income must be positive, got {}", income),
        });
    }

    let debt = applicant.monthly_debt_payments();
    if debt.is_negative() {
        return Err(QuoteError::InvalidApplicant {
            message: format!("monthly debt payments cannot be negative, got {}", debt),
        });
    }

    Ok(())
}
