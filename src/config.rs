use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{Result, SimulationError};
use crate::fees::FeeSchedule;
use crate::interest::InterestMethod;
use crate::payments::PaymentStrategy;
use crate::rewards::RewardPolicy;
use crate::simulator::AccountSimulator;
use crate::transaction::Transaction;

/// simulation configuration
///
/// Every field is optional on the wire so that a partially filled document
/// still parses; required values are checked when the simulator is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub starting_balance: Option<Money>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub payment_strategy: Option<PaymentStrategy>,
    pub interest_method: Option<InterestMethod>,
    pub reward_policy: Option<RewardPolicy>,
    pub fee_schedule: Option<FeeSchedule>,
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// January 1 through December 31 of `year` on the standard card terms
    pub fn calendar_year(year: i32, strategy: PaymentStrategy) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1);
        let end = NaiveDate::from_ymd_opt(year, 12, 31);
        let (start, end) = start.zip(end).ok_or(SimulationError::InvalidConfiguration {
            message: format!("year {} is out of range", year),
        })?;

        Ok(Self {
            starting_balance: Some(Money::ZERO),
            start_date: Some(start),
            end_date: Some(end),
            payment_strategy: Some(strategy),
            interest_method: Some(InterestMethod::default()),
            reward_policy: Some(RewardPolicy::standard()),
            fee_schedule: Some(FeeSchedule::standard()),
        })
    }

    /// validated simulator over `transactions`
    pub fn simulator(&self, transactions: Vec<Transaction>) -> Result<AccountSimulator> {
        let mut builder = AccountSimulator::builder().transactions(transactions);

        if let Some(balance) = self.starting_balance {
            builder = builder.starting_balance(balance);
        }
        if let Some(date) = self.start_date {
            builder = builder.start_date(date);
        }
        if let Some(date) = self.end_date {
            builder = builder.end_date(date);
        }
        if let Some(strategy) = self.payment_strategy {
            builder = builder.payment_strategy(strategy);
        }
        if let Some(method) = self.interest_method {
            builder = builder.interest_method(method);
        }
        if let Some(policy) = self.reward_policy {
            builder = builder.reward_policy(policy);
        }
        if let Some(schedule) = self.fee_schedule {
            builder = builder.fee_schedule(schedule);
        }

        builder.build()
    }
}
