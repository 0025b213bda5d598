use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::decimal::Money;

/// transaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Groceries,
    Gas,
    #[default]
    Other,
    /// informational only, the amount is still posted to the balance
    Payment,
}

impl Category {
    /// case and whitespace insensitive, anything unrecognised is Other
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "groceries" => Category::Groceries,
            "gas" => Category::Gas,
            "payment" => Category::Payment,
            _ => Category::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Gas => "Gas",
            Category::Other => "Other",
            Category::Payment => "Payment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::parse(s))
    }
}

/// payment produced by a strategy for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInstruction {
    pub amount: Money,
    pub date: NaiveDate,
}

impl PaymentInstruction {
    pub fn new(amount: Money, date: NaiveDate) -> Self {
        Self { amount, date }
    }

    /// strictly after the due date counts as late
    pub fn is_late(&self, due_date: NaiveDate) -> bool {
        self.date > due_date
    }
}
