pub mod amortization;

use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::types::LoanTerms;

pub use amortization::{AmortizationSchedule, ScheduledPayment};

/// fixed monthly payment for the loan at the given APR
pub fn compute_monthly_payment(terms: &LoanTerms, apr: Rate) -> Money {
    monthly_installment(terms.principal(), apr, terms.term_months())
}

/// level installment that repays `principal` over `months` at `annual_rate`
///
/// payment = r * P / (1 - (1 + r)^-n), with r the monthly rate. A zero rate
/// makes the formula divide by zero, so it falls back to straight-line P / n.
pub fn monthly_installment(principal: Money, annual_rate: Rate, months: u32) -> Money {
    if months == 0 {
        return principal;
    }

    let r = annual_rate.monthly_rate().as_decimal();

    if r.is_zero() {
        return principal / Decimal::from(months);
    }

    // (1 + r)^n; past the decimal range (1 + r)^-n is indistinguishable from zero
    let mut compound = Some(Decimal::ONE);
    let base = Decimal::ONE + r;
    for _ in 0..months {
        compound = compound.and_then(|c| c.checked_mul(base));
    }
    let discount = match compound {
        Some(c) => Decimal::ONE - Decimal::ONE / c,
        None => Decimal::ONE,
    };

    // a rate too small to register in the compound factor repays like zero
    if discount.is_zero() {
        return principal / Decimal::from(months);
    }

    // past the decimal range the payment saturates instead of panicking
    r.checked_mul(principal.as_decimal())
        .and_then(|interest| interest.checked_div(discount))
        .map(Money::from_decimal)
        .unwrap_or_else(|| Money::from_decimal(Decimal::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_thirty_year_payment() {
        let terms = LoanTerms {
            home_cost: Money::from_major(200_000),
            down_payment: Money::from_major(40_000),
            term_years: 30,
        };
        let payment = compute_monthly_payment(&terms, Rate::from_decimal(dec!(0.035)));
        assert_eq!(payment.round_dp(2), Money::from_str_exact("718.47").unwrap());
    }

    #[test]
    fn test_one_year_payment() {
        let payment = monthly_installment(Money::from_major(100_000), Rate::from_percentage(12), 12);
        assert_eq!(payment.round_dp(2), Money::from_str_exact("8884.88").unwrap());
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let terms = LoanTerms {
            home_cost: Money::from_major(150_000),
            down_payment: Money::from_major(30_000),
            term_years: 10,
        };
        let payment = compute_monthly_payment(&terms, Rate::ZERO);
        assert_eq!(payment, Money::from_major(1_000));
    }

    #[test]
    fn test_extreme_rate_pays_interest_only() {
        // (1 + r)^n overflows, leaving payment = r * P
        let payment = monthly_installment(Money::from_major(100_000), Rate::from_percentage(1_200), 360);
        assert_eq!(payment, Money::from_major(100_000));
    }

    #[test]
    fn test_oversized_principal_saturates() {
        // 200% a month on 7e28 is past the decimal range
        let principal = Money::from_str_exact("70000000000000000000000000000").unwrap();
        let payment = monthly_installment(principal, Rate::from_percentage(2_400), 360);
        assert_eq!(payment, Money::from_decimal(Decimal::MAX));
    }

    #[test]
    fn test_zero_principal() {
        let payment = monthly_installment(Money::ZERO, Rate::from_percentage(5), 360);
        assert_eq!(payment, Money::ZERO);
    }

    #[test]
    fn test_higher_rate_costs_more() {
        let principal = Money::from_major(250_000);
        let low = monthly_installment(principal, Rate::from_bps(300), 360);
        let high = monthly_installment(principal, Rate::from_bps(600), 360);
        assert!(high > low);
        // any positive rate costs more than straight-line repayment
        assert!(low > principal / Decimal::from(360));
    }
}
