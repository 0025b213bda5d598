/// quick start - one purchase, paid off the day after the statement closes
use chrono::NaiveDate;
use credit_card_sim_rs::{
    AccountSimulator, Category, InterestMethod, Money, PaymentStrategy, RewardPolicy, Transaction,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let purchase = Transaction::new(
        NaiveDate::from_ymd_opt(2024, 1, 15).ok_or("bad date")?,
        Category::Groceries,
        Money::from_major(100),
    )?;

    let simulator = AccountSimulator::builder()
        .reward_policy(RewardPolicy::standard())
        .interest_method(InterestMethod::AverageDailyBalance)
        .payment_strategy(PaymentStrategy::EarlyTransactor)
        .date_range(
            NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?,
            NaiveDate::from_ymd_opt(2024, 1, 31).ok_or("bad date")?,
        )
        .transaction(purchase)
        .build()?;

    let summary = simulator.run()?;
    println!("{}", summary.to_json()?);

    Ok(())
}
