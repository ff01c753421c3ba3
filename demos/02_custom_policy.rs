/// custom policy - load lending constants from json and quote against them
use std::sync::Arc;

use mortgage_quote_rs::{Customer, LendingPolicy, LoanQuote, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== custom policy example ===\n");

    // start from the house policy, loosen the dti limit, export and reload
    let mut policy = LendingPolicy::standard();
    policy.approval.max_debt_to_income = Rate::from_percentage(45);
    policy.term_limits.min_years = 5;

    let json = policy.to_json()?;
    println!("policy:\n{}\n", json);

    let policy = Arc::new(LendingPolicy::from_json(&json)?);

    let applicant = Customer::new("Casey", Money::from_major(200_000), Money::from_str_exact("1000.50")?, 710);
    let quote = LoanQuote::with_policy(
        Money::from_major(250_000),
        Money::from_major(50_000),
        5,
        applicant,
        Arc::clone(&policy),
    );

    match quote {
        Ok(quote) => {
            println!("rate: {}", quote.rate());
            println!("payment: ${}", quote.payment().round_dp(2));
            if let Some(dti) = quote.debt_to_income_ratio() {
                println!("debt-to-income: {}", dti.as_decimal().round_dp(4));
            }
            println!("{}", quote.decision().summary());
        }
        Err(err) => println!("quote refused: {err}"),
    }

    // a term outside the policy range fails at construction
    let applicant = Customer::new("Casey", Money::from_major(200_000), Money::from_major(1_000), 710);
    if let Err(err) = LoanQuote::with_policy(Money::from_major(250_000), Money::from_major(50_000), 40, applicant, policy) {
        println!("\nexpected failure: {err}");
    }

    Ok(())
}
