/// schedule - month-by-month amortization for an approved quote
use mortgage_quote_rs::{Customer, LoanQuote, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== amortization schedule example ===\n");

    let applicant = Customer::new("Riley", Money::from_major(150_000), Money::from_major(300), 735);
    let quote = LoanQuote::new(Money::from_major(300_000), Money::from_major(60_000), 15, applicant)?;

    let schedule = quote.schedule();
    println!("installment: ${} at {}", schedule.installment, schedule.interest_rate);

    // first year, then the final payment
    for payment in schedule.payments.iter().take(12) {
        println!(
            "#{:>3}  paid {:>10}  interest {:>9}  principal {:>9}  balance {:>11}",
            payment.payment_number,
            payment.payment_amount.to_string(),
            payment.interest_portion.round_dp(2).to_string(),
            payment.principal_portion.round_dp(2).to_string(),
            payment.ending_balance.round_dp(2).to_string()
        );
    }
    if let Some(last) = schedule.payments.last() {
        println!("...\n#{:>3}  paid {:>10}  balance {}", last.payment_number, last.payment_amount.round_dp(2).to_string(), last.ending_balance);
    }

    println!("\ntotal interest: ${}", schedule.total_interest.round_dp(2));
    println!("total paid: ${}", schedule.total_payment.round_dp(2));

    Ok(())
}
