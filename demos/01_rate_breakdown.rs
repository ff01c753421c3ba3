/// rate breakdown - how term, down payment and credit score move the APR
use mortgage_quote_rs::{Customer, LoanQuote, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== rate breakdown example ===\n");

    let scenarios = [
        ("great credit, 20% down, 30y", 40_000, 30, 780),
        ("great credit, 20% down, 15y", 40_000, 15, 780),
        ("good credit, 15% down, 30y", 30_000, 30, 720),
        ("fair credit, 10% down, 20y", 20_000, 20, 660),
        ("bad credit, 25% down, 30y", 50_000, 30, 600),
        ("very bad credit, 20% down, 30y", 40_000, 30, 500),
    ];

    for (label, down, years, score) in scenarios {
        let applicant = Customer::new(label, Money::from_major(110_000), Money::from_major(400), score);
        let quote = LoanQuote::new(Money::from_major(200_000), Money::from_major(down), years, applicant)?;
        let breakdown = quote.rate_breakdown();

        println!("{label}");
        println!("  base: {}", breakdown.base_rate);
        for adjustment in &breakdown.adjustments {
            println!("  + {:?}: {}", adjustment.kind, adjustment.amount);
        }
        println!("  band: {:?}, apr: {}", breakdown.credit_band, breakdown.apr());
        println!("  {}\n", quote.decision().summary());
    }

    Ok(())
}
