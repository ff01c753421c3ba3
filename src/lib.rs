pub mod applicant;
pub mod approval;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod payments;
pub mod quote;
pub mod rate;
pub mod serialization;
pub mod types;

// re-export key types
pub use applicant::{Applicant, Customer};
pub use approval::{ApprovalPolicy, Decision, RejectionReason};
pub use config::{
    ApprovalThresholds, CreditBands, DownPaymentRules, LendingPolicy, RateSchedule, TermLimits,
};
pub use decimal::{Money, Rate};
pub use errors::{QuoteError, Result};
pub use payments::{compute_monthly_payment, AmortizationSchedule, ScheduledPayment};
pub use quote::LoanQuote;
pub use rate::{RateAdjustment, RateBreakdown, RateModel};
pub use serialization::QuoteView;
pub use types::{AdjustmentKind, CreditBand, LoanTerms};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
