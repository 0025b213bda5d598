use rust_decimal::Decimal;

use crate::cycle::BillingCycle;
use crate::decimal::{Money, Rate};
use crate::interest::{InterestCalculation, InterestMethod};

/// simplified monthly model: balance * (apr / 365) * days in cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AverageDailyBalance;

impl AverageDailyBalance {
    pub fn compute(&self, balance: Money, apr: Rate, cycle: &BillingCycle) -> InterestCalculation {
        let daily_rate = apr.daily_rate();
        let days = cycle.days();

        let interest = Money::from_decimal(
            balance.as_decimal() * daily_rate.as_decimal() * Decimal::from(days),
        );

        InterestCalculation {
            interest_amount: interest.round_currency(),
            daily_rate,
            days,
            balance_base: balance,
            daily_accruals: Vec::new(),
            method: InterestMethod::AverageDailyBalance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn cycle(y: i32, m: u32) -> BillingCycle {
        BillingCycle::containing(NaiveDate::from_ymd_opt(y, m, 1).unwrap())
    }

    #[test]
    fn test_constant_balance_interest() {
        let apr = Rate::from_decimal(dec!(0.3499));
        let result = AverageDailyBalance.compute(Money::from_major(1_000), apr, &cycle(2024, 1));

        assert_eq!(result.days, 31);
        assert_eq!(result.interest_amount, Money::from_decimal(dec!(29.72)));
    }

    #[test]
    fn test_days_follow_month_length() {
        let apr = Rate::from_decimal(dec!(0.3499));
        let feb = AverageDailyBalance.compute(Money::from_major(1_000), apr, &cycle(2023, 2));
        let leap_feb = AverageDailyBalance.compute(Money::from_major(1_000), apr, &cycle(2024, 2));

        assert_eq!(feb.days, 28);
        assert_eq!(leap_feb.days, 29);
        assert!(leap_feb.interest_amount > feb.interest_amount);
    }

    #[test]
    fn test_no_minimum_applied_here() {
        let apr = Rate::from_decimal(dec!(0.3499));
        let result = AverageDailyBalance.compute(Money::from_major(10), apr, &cycle(2024, 1));
        assert_eq!(result.interest_amount, Money::from_decimal(dec!(0.30)));
    }

    #[test]
    fn test_scenario_balance() {
        // $100 purchase plus the $1.99 paper fee
        let apr = Rate::from_decimal(dec!(0.3499));
        let result = AverageDailyBalance.compute(Money::from_decimal(dec!(101.99)), apr, &cycle(2024, 1));
        assert_eq!(result.interest_amount, Money::from_decimal(dec!(3.03)));
    }
}
