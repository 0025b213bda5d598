pub mod config;
pub mod cycle;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod fees;
pub mod interest;
pub mod loader;
pub mod payments;
pub mod rewards;
pub mod simulator;
pub mod state;
pub mod summary;
pub mod transaction;
pub mod types;

// re-export key types
pub use config::SimulationConfig;
pub use cycle::{cycles_between, BillingCycle};
pub use decimal::{Money, Rate};
pub use errors::{Result, SimulationError};
pub use events::{Event, EventStore};
pub use fees::FeeSchedule;
pub use interest::{AverageDailyBalance, InterestCalculation, InterestMethod, SynchronyDailyBalance};
pub use payments::{minimum_payment, PaymentStrategy, StrategyState};
pub use rewards::RewardPolicy;
pub use simulator::{AccountSimulator, AccountSimulatorBuilder};
pub use state::AccountState;
pub use summary::{SeriesPoint, Summary};
pub use transaction::{Transaction, TransactionBuilder};
pub use types::{Category, PaymentInstruction};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
