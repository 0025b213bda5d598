use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{Result, SimulationError};
use crate::types::Category;

/// an immutable dated purchase or payment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    date: NaiveDate,
    category: Category,
    amount: Money,
}

impl Transaction {
    /// amount is normalised to cents HALF_UP; negative amounts are rejected
    pub fn new(date: NaiveDate, category: Category, amount: Money) -> Result<Self> {
        if amount.is_negative() {
            return Err(SimulationError::InvalidAmount { amount });
        }
        Ok(Self {
            date,
            category,
            amount: amount.round_currency(),
        })
    }

    pub fn builder() -> TransactionBuilder {
        TransactionBuilder::default()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

/// builder for records whose fields may be missing
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    date: Option<NaiveDate>,
    category: Option<Category>,
    amount: Option<Money>,
}

impl TransactionBuilder {
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn build(self) -> Result<Transaction> {
        let date = self.date.ok_or(SimulationError::MissingParameter { name: "date" })?;
        let category = self
            .category
            .ok_or(SimulationError::MissingParameter { name: "category" })?;
        let amount = self
            .amount
            .ok_or(SimulationError::MissingParameter { name: "amount" })?;
        Transaction::new(date, category, amount)
    }
}

/// stable sort by date, equal dates keep insertion order
pub fn sort_chronologically(transactions: &mut [Transaction]) {
    transactions.sort_by_key(|t| t.date);
}
