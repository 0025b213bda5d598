use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// running balance and totals for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountState {
    pub balance: Money,
    pub total_payments: Money,
    pub total_interest: Money,
    pub total_fees: Money,
    pub total_rewards: Money,
}

impl AccountState {
    /// opening balance is settled to cents
    pub fn new(starting_balance: Money) -> Self {
        Self {
            balance: starting_balance.round_currency(),
            total_payments: Money::ZERO,
            total_interest: Money::ZERO,
            total_fees: Money::ZERO,
            total_rewards: Money::ZERO,
        }
    }

    pub fn post_purchase(&mut self, amount: Money, reward: Money) {
        self.balance += amount;
        self.total_rewards += reward;
    }

    pub fn charge_fee(&mut self, fee: Money) {
        self.balance += fee;
        self.total_fees += fee;
    }

    pub fn charge_interest(&mut self, interest: Money) {
        self.balance += interest;
        self.total_interest += interest;
    }

    /// the part of `instructed` that the current balance can absorb
    pub fn clamp_payment(&self, instructed: Money) -> Money {
        instructed.min(self.balance).max(Money::ZERO)
    }

    /// clamp to what is owed, never below zero; returns the amount applied
    pub fn apply_payment(&mut self, instructed: Money) -> Money {
        let applied = self.clamp_payment(instructed);
        self.balance -= applied;
        self.total_payments += applied;
        applied
    }
}
