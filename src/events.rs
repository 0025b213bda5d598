use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::interest::InterestMethod;
use crate::types::Category;

/// everything the simulator records while walking the cycles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // cycle lifecycle
    CycleOpened {
        cycle: u32,
        start: NaiveDate,
        end: NaiveDate,
        opening_balance: Money,
    },
    CycleClosed {
        cycle: u32,
        end: NaiveDate,
        statement_balance: Money,
        closing_balance: Money,
    },

    // purchase events
    PurchasePosted {
        cycle: u32,
        date: NaiveDate,
        category: Category,
        amount: Money,
        new_balance: Money,
    },
    RewardEarned {
        cycle: u32,
        category: Category,
        reward: Money,
    },

    // charges
    PaperStatementFeeCharged {
        cycle: u32,
        fee: Money,
        balance_before: Money,
    },
    InterestCharged {
        cycle: u32,
        method: InterestMethod,
        computed: Money,
        charged: Money,
        minimum_applied: bool,
    },
    LateFeeCharged {
        cycle: u32,
        fee: Money,
        due_date: NaiveDate,
        payment_date: NaiveDate,
    },

    // payment events
    PaymentApplied {
        cycle: u32,
        date: NaiveDate,
        instructed: Money,
        applied: Money,
    },
}

impl Event {
    /// cycle number the event belongs to
    pub fn cycle(&self) -> u32 {
        match self {
            Event::CycleOpened { cycle, .. }
            | Event::CycleClosed { cycle, .. }
            | Event::PurchasePosted { cycle, .. }
            | Event::RewardEarned { cycle, .. }
            | Event::PaperStatementFeeCharged { cycle, .. }
            | Event::InterestCharged { cycle, .. }
            | Event::LateFeeCharged { cycle, .. }
            | Event::PaymentApplied { cycle, .. } => *cycle,
        }
    }
}

/// event store for collecting events during a run
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn for_cycle(&self, cycle: u32) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.cycle() == cycle)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_filters_by_cycle() {
        let mut store = EventStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        store.emit(Event::PaperStatementFeeCharged {
            cycle: 0,
            fee: Money::from_major(2),
            balance_before: Money::from_major(100),
        });
        store.emit(Event::PaymentApplied {
            cycle: 1,
            date,
            instructed: Money::from_major(30),
            applied: Money::from_major(30),
        });

        assert_eq!(store.len(), 2);
        assert_eq!(store.for_cycle(1).count(), 1);

        let taken = store.take_events();
        assert_eq!(taken.len(), 2);
        assert!(store.is_empty());
    }
}
