use serde::{Deserialize, Serialize};

use crate::cycle::BillingCycle;
use crate::decimal::Money;
use crate::payments::{
    minimum_payment, FIRST_DAY_OF_GRACE, LAST_DAY_OF_GRACE, LATE_PAYMENT_DAYS,
    LIGHT_REVOLVER_PERIOD,
};
use crate::types::PaymentInstruction;

/// cycle position carried between calls to `next_payment`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrategyState {
    pub cycle_index: u32,
}

impl StrategyState {
    pub fn at(cycle_index: u32) -> Self {
        Self { cycle_index }
    }

    fn advanced(self) -> Self {
        Self {
            cycle_index: self.cycle_index.wrapping_add(1),
        }
    }
}

/// cardholder payment behaviours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaymentStrategy {
    /// full balance on the first day of grace
    EarlyTransactor,
    /// full balance on the last day of grace
    WallStreetTransactor,
    /// five minimum payments then one payoff, repeating
    LightRevolver {
        #[serde(default)]
        start_index: u32,
    },
    /// minimum payments, late every `late_every_nth_cycle` cycles (0 = never)
    HeavyRevolver {
        #[serde(default)]
        start_index: u32,
        #[serde(default)]
        late_every_nth_cycle: u32,
    },
}

impl PaymentStrategy {
    /// fresh state for a new simulation run
    pub fn initial_state(&self) -> StrategyState {
        match self {
            PaymentStrategy::EarlyTransactor | PaymentStrategy::WallStreetTransactor => {
                StrategyState::default()
            }
            PaymentStrategy::LightRevolver { start_index } => {
                StrategyState::at(start_index % LIGHT_REVOLVER_PERIOD)
            }
            PaymentStrategy::HeavyRevolver { start_index, .. } => StrategyState::at(*start_index),
        }
    }

    /// payment for the cycle just closed plus the state for the next call
    pub fn next_payment(
        &self,
        statement_balance: Money,
        cycle: &BillingCycle,
        state: StrategyState,
    ) -> (PaymentInstruction, StrategyState) {
        match self {
            PaymentStrategy::EarlyTransactor => (
                PaymentInstruction::new(statement_balance, cycle.days_after_close(FIRST_DAY_OF_GRACE)),
                state,
            ),
            PaymentStrategy::WallStreetTransactor => (
                PaymentInstruction::new(statement_balance, cycle.days_after_close(LAST_DAY_OF_GRACE)),
                state,
            ),
            PaymentStrategy::LightRevolver { .. } => {
                let position = state.cycle_index % LIGHT_REVOLVER_PERIOD;
                let amount = if position == LIGHT_REVOLVER_PERIOD - 1 {
                    statement_balance
                } else {
                    minimum_payment(statement_balance)
                };
                let next = StrategyState::at((position + 1) % LIGHT_REVOLVER_PERIOD);
                (
                    PaymentInstruction::new(amount, cycle.days_after_close(LAST_DAY_OF_GRACE)),
                    next,
                )
            }
            PaymentStrategy::HeavyRevolver {
                late_every_nth_cycle,
                ..
            } => {
                let modulus = *late_every_nth_cycle;
                let late = modulus > 0 && state.cycle_index % modulus == modulus - 1;
                let offset = if late { LATE_PAYMENT_DAYS } else { LAST_DAY_OF_GRACE };
                (
                    PaymentInstruction::new(
                        minimum_payment(statement_balance),
                        cycle.days_after_close(offset),
                    ),
                    state.advanced(),
                )
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaymentStrategy::EarlyTransactor => "Early transactor",
            PaymentStrategy::WallStreetTransactor => "Wall Street transactor",
            PaymentStrategy::LightRevolver { .. } => "Light revolver",
            PaymentStrategy::HeavyRevolver { .. } => "Heavy revolver",
        }
    }
}
