use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;

/// outcome of one simulation run
///
/// The five series are parallel: index `k` of each describes cycle `k`.
/// Balances are recorded before the cycle's payment is applied and fees are
/// cumulative from the start of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    beginning_balance: Money,
    ending_balance: Money,
    total_payments: Money,
    total_interest: Money,
    total_fees: Money,
    total_rewards: Money,
    dates: Vec<NaiveDate>,
    balances: Vec<Money>,
    interest_series: Vec<Money>,
    fee_series: Vec<Money>,
    payment_series: Vec<Money>,
}

/// one row of the series, for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub cycle: usize,
    pub date: NaiveDate,
    pub balance: Money,
    pub interest: Money,
    pub cumulative_fees: Money,
    pub payment: Money,
}

impl Summary {
    pub(crate) fn new(beginning_balance: Money) -> Self {
        Self {
            beginning_balance,
            ending_balance: beginning_balance,
            total_payments: Money::ZERO,
            total_interest: Money::ZERO,
            total_fees: Money::ZERO,
            total_rewards: Money::ZERO,
            dates: Vec::new(),
            balances: Vec::new(),
            interest_series: Vec::new(),
            fee_series: Vec::new(),
            payment_series: Vec::new(),
        }
    }

    /// statement side of a cycle, recorded before the payment
    pub(crate) fn record_statement(
        &mut self,
        cycle_end: NaiveDate,
        balance: Money,
        interest: Money,
        cumulative_fees: Money,
    ) {
        self.dates.push(cycle_end);
        self.balances.push(balance);
        self.interest_series.push(interest);
        self.fee_series.push(cumulative_fees);
    }

    pub(crate) fn record_payment(&mut self, payment: Money) {
        self.payment_series.push(payment);
    }

    /// settle ending balance and totals to cents
    pub(crate) fn close(
        mut self,
        ending_balance: Money,
        total_payments: Money,
        total_interest: Money,
        total_fees: Money,
        total_rewards: Money,
    ) -> Self {
        self.ending_balance = ending_balance.round_currency();
        self.total_payments = total_payments.round_currency();
        self.total_interest = total_interest.round_currency();
        self.total_fees = total_fees.round_currency();
        self.total_rewards = total_rewards.round_currency();
        self
    }

    pub fn beginning_balance(&self) -> Money {
        self.beginning_balance
    }

    pub fn ending_balance(&self) -> Money {
        self.ending_balance
    }

    pub fn total_payments(&self) -> Money {
        self.total_payments
    }

    pub fn total_interest(&self) -> Money {
        self.total_interest
    }

    pub fn total_fees(&self) -> Money {
        self.total_fees
    }

    pub fn total_rewards(&self) -> Money {
        self.total_rewards
    }

    /// cycle end dates
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// pre-payment balances
    pub fn balances(&self) -> &[Money] {
        &self.balances
    }

    pub fn interest_series(&self) -> &[Money] {
        &self.interest_series
    }

    /// cumulative fees at each statement
    pub fn fee_series(&self) -> &[Money] {
        &self.fee_series
    }

    pub fn payment_series(&self) -> &[Money] {
        &self.payment_series
    }

    pub fn cycle_count(&self) -> usize {
        self.dates.len()
    }

    pub fn points(&self) -> impl Iterator<Item = SeriesPoint> + '_ {
        self.dates
            .iter()
            .zip(&self.balances)
            .zip(&self.interest_series)
            .zip(&self.fee_series)
            .zip(&self.payment_series)
            .enumerate()
            .map(
                |(cycle, ((((date, balance), interest), fees), payment))| SeriesPoint {
                    cycle,
                    date: *date,
                    balance: *balance,
                    interest: *interest,
                    cumulative_fees: *fees,
                    payment: *payment,
                },
            )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn two_cycles() -> Summary {
        let mut summary = Summary::new(Money::ZERO);
        summary.record_statement(
            date(2024, 1, 31),
            Money::from_decimal(dec!(105.02)),
            Money::from_decimal(dec!(3.03)),
            Money::from_decimal(dec!(1.99)),
        );
        summary.record_payment(Money::from_decimal(dec!(105.02)));
        summary.record_statement(date(2024, 2, 29), Money::ZERO, Money::ZERO, Money::from_decimal(dec!(1.99)));
        summary.record_payment(Money::ZERO);
        summary
    }

    #[test]
    fn test_points_align_series() {
        let summary = two_cycles();
        let points: Vec<_> = summary.points().collect();

        assert_eq!(summary.cycle_count(), 2);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].cycle, 0);
        assert_eq!(points[0].interest, Money::from_decimal(dec!(3.03)));
        assert_eq!(points[1].date, date(2024, 2, 29));
        assert_eq!(points[1].cumulative_fees, Money::from_decimal(dec!(1.99)));
    }

    #[test]
    fn test_close_rounds_totals() {
        let summary = Summary::new(Money::ZERO).close(
            Money::from_decimal(dec!(12.345)),
            Money::from_decimal(dec!(43.2096)),
            Money::ZERO,
            Money::ZERO,
            Money::from_decimal(dec!(0.3003)),
        );

        assert_eq!(summary.ending_balance().to_string(), "12.35");
        assert_eq!(summary.total_payments().to_string(), "43.21");
        assert_eq!(summary.total_rewards().to_string(), "0.30");
    }

    #[test]
    fn test_json_output() {
        let json = two_cycles().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["dates"][0], "2024-01-31");
        assert_eq!(value["payment_series"].as_array().unwrap().len(), 2);
    }
}
