use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::Category;

/// cash-back rates by purchase category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardPolicy {
    pub groceries_rate: Rate,
    pub gas_rate: Rate,
    pub other_rate: Rate,
}

impl RewardPolicy {
    pub fn new(groceries_rate: Rate, gas_rate: Rate, other_rate: Rate) -> Self {
        Self {
            groceries_rate,
            gas_rate,
            other_rate,
        }
    }

    /// groceries 3%, gas 2%, everything else 1%
    pub fn standard() -> Self {
        Self::new(
            Rate::from_decimal(dec!(0.03)),
            Rate::from_decimal(dec!(0.02)),
            Rate::from_decimal(dec!(0.01)),
        )
    }

    /// rate for a free-form category label; absent or unknown labels earn the other rate
    pub fn rate_for(&self, category: Option<&str>) -> Rate {
        let label = match category {
            Some(label) => label.trim().to_ascii_lowercase(),
            None => return self.other_rate,
        };
        match label.as_str() {
            "groceries" => self.groceries_rate,
            "gas" => self.gas_rate,
            _ => self.other_rate,
        }
    }

    /// unrounded reward, cents are settled when totals are aggregated
    pub fn reward_for(&self, category: Option<&str>, amount: Money) -> Money {
        amount.times_rate(self.rate_for(category))
    }

    pub fn reward_for_category(&self, category: Category, amount: Money) -> Money {
        self.reward_for(Some(category.as_str()), amount)
    }
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
