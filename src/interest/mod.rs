pub mod average_daily;
pub mod daily_balance;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cycle::BillingCycle;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::fees::FeeSchedule;

pub use average_daily::AverageDailyBalance;
pub use daily_balance::SynchronyDailyBalance;

/// interest calculation result for one cycle
#[derive(Debug, Clone, PartialEq)]
pub struct InterestCalculation {
    /// rounded to cents
    pub interest_amount: Money,
    pub daily_rate: Rate,
    pub days: u32,
    pub balance_base: Money,
    /// per-day accruals at working precision, empty for constant-balance models
    pub daily_accruals: Vec<Money>,
    pub method: InterestMethod,
}

/// interest accrual models a simulation can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterestMethod {
    /// day-by-day compounding with the minimum charge folded in
    SynchronyDailyBalance,
    /// balance held constant across the cycle
    #[default]
    AverageDailyBalance,
}

impl InterestMethod {
    pub fn compute_interest(
        &self,
        balance: Money,
        apr: Rate,
        cycle_start: NaiveDate,
        cycle_end: NaiveDate,
    ) -> Result<InterestCalculation> {
        let cycle = BillingCycle::new(cycle_start, cycle_end)?;
        Ok(self.compute_for_cycle(balance, apr, &cycle))
    }

    pub fn compute_for_cycle(&self, balance: Money, apr: Rate, cycle: &BillingCycle) -> InterestCalculation {
        match self {
            InterestMethod::SynchronyDailyBalance => SynchronyDailyBalance::default().compute(balance, apr, cycle),
            InterestMethod::AverageDailyBalance => AverageDailyBalance.compute(balance, apr, cycle),
        }
    }

    /// purchase APR and minimum charge taken from `fees`
    pub fn compute_with_schedule(
        &self,
        balance: Money,
        fees: &FeeSchedule,
        cycle: &BillingCycle,
    ) -> InterestCalculation {
        match self {
            InterestMethod::SynchronyDailyBalance => {
                SynchronyDailyBalance::new(fees.min_interest_charge).compute(balance, fees.apr_purchases, cycle)
            }
            InterestMethod::AverageDailyBalance => AverageDailyBalance.compute(balance, fees.apr_purchases, cycle),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InterestMethod::SynchronyDailyBalance => "Synchrony daily balance",
            InterestMethod::AverageDailyBalance => "Average daily balance",
        }
    }
}
