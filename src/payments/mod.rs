pub mod minimum;
pub mod strategy;

pub use minimum::{minimum_payment, MINIMUM_PAYMENT_FLOOR, MINIMUM_PAYMENT_RATE};
pub use strategy::{PaymentStrategy, StrategyState};

/// first day of the grace period
pub const FIRST_DAY_OF_GRACE: u32 = 1;
/// last day of the grace period
pub const LAST_DAY_OF_GRACE: u32 = 22;
/// offset used when a revolver pays late
pub const LATE_PAYMENT_DAYS: u32 = 30;
/// cycles in one light-revolver rotation, the last one pays in full
pub const LIGHT_REVOLVER_PERIOD: u32 = 6;
