use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// purchase APR, 34.99%
pub const APR_PURCHASES: Rate = Rate::from_decimal_const(dec!(0.3499));
/// penalty APR, 39.99%
pub const APR_PENALTY: Rate = Rate::from_decimal_const(dec!(0.3999));
/// floor for any positive cycle interest
pub const MIN_INTEREST_CHARGE: Money = Money::from_decimal_const(dec!(2.00));
pub const PAPER_STATEMENT_FEE: Money = Money::from_decimal_const(dec!(1.99));
/// balance that must be exceeded before a paper statement is mailed
pub const PAPER_STATEMENT_THRESHOLD: Money = Money::from_decimal_const(dec!(2.50));
pub const PROMOTIONAL_FEE_RATE: Rate = Rate::from_decimal_const(dec!(0.02));
pub const LATE_FEE_LOW: Money = Money::from_decimal_const(dec!(30.00));
pub const LATE_FEE_HIGH: Money = Money::from_decimal_const(dec!(41.00));
/// payments dated after cycle end + this many days are late
pub const PAYMENT_DUE_DAYS: u32 = 23;

/// fee and rate schedule consulted by the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub apr_purchases: Rate,
    pub apr_penalty: Rate,
    pub min_interest_charge: Money,
    pub paper_statement_fee: Money,
    pub paper_statement_threshold: Money,
    pub promotional_fee_rate: Rate,
    pub late_fee_low: Money,
    pub late_fee_high: Money,
    pub payment_due_days: u32,
}

impl FeeSchedule {
    /// the published card terms
    pub fn standard() -> Self {
        Self {
            apr_purchases: APR_PURCHASES,
            apr_penalty: APR_PENALTY,
            min_interest_charge: MIN_INTEREST_CHARGE,
            paper_statement_fee: PAPER_STATEMENT_FEE,
            paper_statement_threshold: PAPER_STATEMENT_THRESHOLD,
            promotional_fee_rate: PROMOTIONAL_FEE_RATE,
            late_fee_low: LATE_FEE_LOW,
            late_fee_high: LATE_FEE_HIGH,
            payment_due_days: PAYMENT_DUE_DAYS,
        }
    }

    /// paper fee applies only strictly above the threshold
    pub fn paper_fee_applies(&self, balance: Money) -> bool {
        balance > self.paper_statement_threshold
    }

    /// positive interest below the minimum charge is raised to it
    pub fn apply_minimum_interest(&self, interest: Money) -> Money {
        if interest.is_positive() && interest < self.min_interest_charge {
            self.min_interest_charge
        } else {
            interest
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// HALF_UP to cents, absent stays absent
pub fn round_currency(value: Option<Money>) -> Option<Money> {
    value.map(|v| v.round_currency())
}
