use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("missing required parameter: {name}")]
    MissingParameter {
        name: &'static str,
    },

    #[error("invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("invalid amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("malformed record at line {line}: {message}")]
    Parse {
        line: u64,
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimulationError {
    /// true for errors raised before any computation (absent values, bad ranges)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SimulationError::MissingParameter { .. }
                | SimulationError::InvalidDateRange { .. }
                | SimulationError::InvalidAmount { .. }
        )
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(e: serde_json::Error) -> Self {
        SimulationError::InvalidConfiguration {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
