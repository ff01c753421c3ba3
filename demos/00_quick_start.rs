/// quick start - price and decide a single mortgage quote
use mortgage_quote_rs::{Customer, LoanQuote, Money};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows the rate derivation and affordability check
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let applicant = Customer::new(
        "Jordan",
        Money::from_major(120_000),
        Money::from_major(500),
        750,
    );

    // $200,000 home, 20% down, 30 years
    let quote = LoanQuote::new(
        Money::from_major(200_000),
        Money::from_major(40_000),
        30,
        applicant,
    )?;

    println!("principal: ${}", quote.principal());
    println!("rate: {}", quote.rate());
    println!("monthly payment: ${}", quote.payment().round_dp(2));
    println!("decision: {}", quote.decision().summary());

    println!("\n{}", quote.json());

    Ok(())
}
