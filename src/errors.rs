use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("invalid input for {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    #[error("down payment {down_payment} exceeds home cost {home_cost}")]
    DownPaymentExceedsCost {
        down_payment: Money,
        home_cost: Money,
    },

    #[error("loan term of {years} years outside allowed range {min}..={max}")]
    TermOutOfRange {
        years: u32,
        min: u32,
        max: u32,
    },

    #[error("invalid applicant: {message}")]
    InvalidApplicant {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QuoteError {
    /// true for errors caused by the caller's loan inputs rather than policy or encoding
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            QuoteError::InvalidInput { .. }
                | QuoteError::DownPaymentExceedsCost { .. }
                | QuoteError::TermOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
