use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

use super::monthly_installment;

/// scheduled payment in amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub payment_number: u32,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
    pub cumulative_interest: Money,
    pub cumulative_principal: Money,
}

/// equal-installment amortization schedule
///
/// The installment is rounded up to whole cents, so the balance clears on or
/// before the final month; interest accrues at full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub interest_rate: Rate,
    pub term_months: u32,
    pub installment: Money,
    pub payments: Vec<ScheduledPayment>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AmortizationSchedule {
    /// generate payment schedule
    pub fn generate(principal: Money, interest_rate: Rate, term_months: u32) -> Self {
        let installment = monthly_installment(principal, interest_rate, term_months).round_up_dp(2);
        let payments = calculate_equal_installments(principal, interest_rate, term_months, installment);

        let total_interest = payments
            .iter()
            .map(|p| p.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_payment = payments
            .iter()
            .map(|p| p.payment_amount)
            .fold(Money::ZERO, |acc, x| acc + x);

        Self {
            principal,
            interest_rate,
            term_months,
            installment,
            payments,
            total_interest,
            total_payment,
        }
    }

    /// get payment for specific period, numbered from 1
    pub fn get_payment(&self, payment_number: u32) -> Option<&ScheduledPayment> {
        if payment_number == 0 {
            return None;
        }
        self.payments.get((payment_number - 1) as usize)
    }

    /// get remaining balance after payment
    pub fn balance_after_payment(&self, payment_number: u32) -> Money {
        self.get_payment(payment_number)
            .map(|p| p.ending_balance)
            .unwrap_or(self.principal)
    }
}

fn calculate_equal_installments(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
    installment: Money,
) -> Vec<ScheduledPayment> {
    let monthly_rate: Decimal = annual_rate.monthly_rate().as_decimal();

    let mut payments = Vec::with_capacity(term_months as usize);
    let mut balance = principal;
    let mut cumulative_interest = Money::ZERO;
    let mut cumulative_principal = Money::ZERO;

    for i in 1..=term_months {
        let interest_portion = Money::from_decimal(balance.as_decimal() * monthly_rate);

        // the final installment pays off whatever balance remains
        let (payment_amount, principal_portion) = if i == term_months {
            (balance + interest_portion, balance)
        } else {
            let principal_portion = (installment - interest_portion).min(balance);
            (principal_portion + interest_portion, principal_portion)
        };

        cumulative_interest += interest_portion;
        cumulative_principal += principal_portion;

        let ending_balance = balance - principal_portion;

        payments.push(ScheduledPayment {
            payment_number: i,
            beginning_balance: balance,
            payment_amount,
            principal_portion,
            interest_portion,
            ending_balance,
            cumulative_interest,
            cumulative_principal,
        });

        balance = ending_balance;
    }

    payments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_installments_schedule() {
        let principal = Money::from_major(100_000);
        let rate = Rate::from_percentage(12);

        let schedule = AmortizationSchedule::generate(principal, rate, 12);

        assert_eq!(schedule.payments.len(), 12);

        // first month interest is 1% of principal
        let first = &schedule.payments[0];
        assert_eq!(first.beginning_balance, principal);
        assert_eq!(first.interest_portion, Money::from_major(1_000));
        assert!(first.principal_portion > Money::ZERO);

        // last payment clears the balance
        let last = &schedule.payments[11];
        assert_eq!(last.ending_balance, Money::ZERO);
        assert_eq!(last.cumulative_principal, principal);

        // all but the last equal the installment, last within a dollar of it
        for payment in &schedule.payments[..11] {
            assert_eq!(payment.payment_amount, schedule.installment);
        }
        assert!(last.payment_amount <= schedule.installment);
        assert!(schedule.installment - last.payment_amount < Money::from_major(1));
    }

    #[test]
    fn test_totals_reconcile() {
        let principal = Money::from_major(160_000);
        let schedule = AmortizationSchedule::generate(principal, Rate::from_bps(350), 360);

        // 718.4735... rounds up to the next cent
        assert_eq!(schedule.installment, Money::from_str_exact("718.48").unwrap());
        assert_eq!(schedule.total_payment, schedule.total_interest + principal);

        // interest declines as principal is repaid
        for i in 1..schedule.payments.len() {
            assert!(schedule.payments[i].interest_portion <= schedule.payments[i - 1].interest_portion);
        }
    }

    #[test]
    fn test_high_rate_schedule_clears_balance() {
        let principal = Money::from_str_exact("160000.37").unwrap();

        for (rate, months) in [
            (Rate::from_bps(5_000), 360),
            (Rate::from_bps(9_999), 240),
            (Rate::from_bps(1_350), 360),
        ] {
            let schedule = AmortizationSchedule::generate(principal, rate, months);
            let last = schedule.payments.last().unwrap();

            assert_eq!(schedule.payments.len(), months as usize);
            assert_eq!(last.ending_balance, Money::ZERO);
            assert_eq!(last.cumulative_principal, principal);
            assert!(last.payment_amount - schedule.installment < Money::from_major(1));
            for payment in &schedule.payments {
                assert!(payment.payment_amount <= schedule.installment);
            }
        }
    }

    #[test]
    fn test_zero_rate_schedule() {
        let principal = Money::from_major(120_000);
        let schedule = AmortizationSchedule::generate(principal, Rate::ZERO, 120);

        assert_eq!(schedule.installment, Money::from_major(1_000));
        assert_eq!(schedule.total_interest, Money::ZERO);
        assert_eq!(schedule.total_payment, principal);
    }

    #[test]
    fn test_balance_lookup() {
        let principal = Money::from_major(12_000);
        let schedule = AmortizationSchedule::generate(principal, Rate::ZERO, 12);

        assert!(schedule.get_payment(0).is_none());
        assert!(schedule.get_payment(13).is_none());
        assert_eq!(schedule.balance_after_payment(0), principal);
        assert_eq!(schedule.balance_after_payment(6), Money::from_major(6_000));
        assert_eq!(schedule.balance_after_payment(12), Money::ZERO);
    }
}
