use crate::cycle::BillingCycle;
use crate::decimal::{Money, Rate};
use crate::fees::MIN_INTEREST_CHARGE;
use crate::interest::{InterestCalculation, InterestMethod};

/// daily-balance interest where each day's accrual joins the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynchronyDailyBalance {
    pub minimum_charge: Money,
}

impl SynchronyDailyBalance {
    pub fn new(minimum_charge: Money) -> Self {
        Self { minimum_charge }
    }

    pub fn compute(&self, balance: Money, apr: Rate, cycle: &BillingCycle) -> InterestCalculation {
        let daily_rate = apr.daily_rate();
        let days = cycle.days();

        let mut running = balance;
        let mut total = Money::ZERO;
        let mut daily_accruals = Vec::with_capacity(days as usize);

        for _ in 0..days {
            let accrual = if running.is_positive() {
                running.times_rate(daily_rate)
            } else {
                Money::ZERO
            };
            total += accrual;
            running += accrual;
            daily_accruals.push(accrual);
        }

        if total.is_positive() && total < self.minimum_charge {
            total = self.minimum_charge;
        }

        InterestCalculation {
            interest_amount: total.round_currency(),
            daily_rate,
            days,
            balance_base: balance,
            daily_accruals,
            method: InterestMethod::SynchronyDailyBalance,
        }
    }
}

impl Default for SynchronyDailyBalance {
    fn default() -> Self {
        Self::new(MIN_INTEREST_CHARGE)
    }
}
