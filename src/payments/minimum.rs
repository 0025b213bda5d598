use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate};

/// smallest minimum payment ever requested
pub const MINIMUM_PAYMENT_FLOOR: Money = Money::from_decimal_const(dec!(30.00));
/// share of the statement balance requested as a minimum payment
pub const MINIMUM_PAYMENT_RATE: Rate = Rate::from_decimal_const(dec!(0.035));

/// greater of $30.00 and 3.5% of the statement balance, unrounded
pub fn minimum_payment(statement_balance: Money) -> Money {
    statement_balance
        .times_rate(MINIMUM_PAYMENT_RATE)
        .max(MINIMUM_PAYMENT_FLOOR)
}
