use credit_card_sim_rs::chrono::{Duration, NaiveDate};
use credit_card_sim_rs::{
    loader, AccountSimulator, Category, Event, InterestMethod, Money, PaymentStrategy,
    RewardPolicy, SimulationConfig, SimulationError, Transaction,
};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn simulator(strategy: PaymentStrategy) -> credit_card_sim_rs::AccountSimulatorBuilder {
    AccountSimulator::builder()
        .reward_policy(RewardPolicy::standard())
        .interest_method(InterestMethod::AverageDailyBalance)
        .payment_strategy(strategy)
}

#[test]
fn single_grocery_purchase_paid_in_full() {
    let purchase = Transaction::new(date(2024, 1, 15), Category::Groceries, Money::from_major(100)).unwrap();
    let summary = simulator(PaymentStrategy::EarlyTransactor)
        .date_range(date(2024, 1, 1), date(2024, 1, 31))
        .transaction(purchase)
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(summary.total_rewards().to_string(), "3.00");
    assert_eq!(summary.total_fees().to_string(), "1.99");
    assert_eq!(summary.total_payments(), summary.balances()[0]);
    assert_eq!(summary.total_payments(), Money::from_decimal(dec!(105.02)));
    assert_eq!(summary.ending_balance().to_string(), "0.00");
}

#[test]
fn heavy_revolver_pays_late_every_sixth_cycle() {
    let (summary, events) = simulator(PaymentStrategy::HeavyRevolver {
        start_index: 0,
        late_every_nth_cycle: 6,
    })
    .starting_balance(Money::from_major(1_000))
    .date_range(date(2024, 1, 1), date(2024, 6, 30))
    .build()
    .unwrap()
    .run_with_events()
    .unwrap();

    assert_eq!(summary.cycle_count(), 6);

    let payment_dates: Vec<NaiveDate> = events
        .iter()
        .filter_map(|e| match e {
            Event::PaymentApplied { date, .. } => Some(*date),
            _ => None,
        })
        .collect();

    for (cycle, (paid_on, cycle_end)) in payment_dates.iter().zip(summary.dates()).enumerate() {
        let offset = if cycle == 5 { 30 } else { 22 };
        assert_eq!(*paid_on, *cycle_end + Duration::days(offset), "cycle {}", cycle);
    }
}

#[test]
fn light_revolver_pays_minimum_then_full() {
    let strategy = PaymentStrategy::LightRevolver { start_index: 0 };
    let mut state = strategy.initial_state();
    let cycle = credit_card_sim_rs::BillingCycle::containing(date(2024, 1, 1));

    for cycle_index in 0..6 {
        let (payment, next) = strategy.next_payment(Money::from_major(1_000), &cycle, state);
        if cycle_index < 5 {
            assert_eq!(payment.amount, Money::from_decimal(dec!(35.00)));
        } else {
            assert_eq!(payment.amount, Money::from_major(1_000));
        }
        state = next;
    }
}

#[test]
fn empty_history_produces_empty_summary() {
    let summary = simulator(PaymentStrategy::EarlyTransactor)
        .date_range(date(2024, 1, 1), date(2024, 12, 31))
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(summary.beginning_balance().to_string(), "0.00");
    assert_eq!(summary.ending_balance().to_string(), "0.00");
    assert!(summary.dates().is_empty());
    assert!(summary.balances().is_empty());
    assert!(summary.payment_series().is_empty());
    assert!(summary.total_payments().is_zero());
    assert!(summary.total_interest().is_zero());
    assert!(summary.total_fees().is_zero());
    assert!(summary.total_rewards().is_zero());
}

#[test]
fn identical_inputs_give_identical_summaries() {
    let data = "\
2024-01-15,Groceries,600
2024-01-15,Gas,100
2024-01-20,Other,300
2024-03-02,Groceries,$85.40
2024-07-19,Gas,55.10
";
    let transactions = loader::load_from_str(data).unwrap();

    for strategy in [
        PaymentStrategy::EarlyTransactor,
        PaymentStrategy::WallStreetTransactor,
        PaymentStrategy::LightRevolver { start_index: 3 },
        PaymentStrategy::HeavyRevolver {
            start_index: 0,
            late_every_nth_cycle: 4,
        },
    ] {
        let config = SimulationConfig::calendar_year(2024, strategy).unwrap();
        let first = config.simulator(transactions.clone()).unwrap().run().unwrap();
        let second = config.simulator(transactions.clone()).unwrap().run().unwrap();

        assert_eq!(first, second, "{}", strategy.name());
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }
}

#[test]
fn series_stay_aligned() {
    let transactions = loader::load_from_str("2024-02-10,Gas,400\n2024-04-01,Other,90\n").unwrap();
    let summary = simulator(PaymentStrategy::HeavyRevolver {
        start_index: 0,
        late_every_nth_cycle: 2,
    })
    .transactions(transactions)
    .date_range(date(2024, 1, 20), date(2024, 9, 5))
    .build()
    .unwrap()
    .run()
    .unwrap();

    let n = summary.cycle_count();
    assert_eq!(n, 9);
    assert_eq!(summary.balances().len(), n);
    assert_eq!(summary.interest_series().len(), n);
    assert_eq!(summary.fee_series().len(), n);
    assert_eq!(summary.payment_series().len(), n);
    assert_eq!(summary.points().count(), n);

    // fees are cumulative
    assert!(summary.fee_series().windows(2).all(|w| w[0] <= w[1]));
    // positive interest is never below the minimum charge
    assert!(summary
        .interest_series()
        .iter()
        .all(|i| i.is_zero() || *i >= Money::from_decimal(dec!(2.00))));
}

#[test]
fn compounding_model_is_selectable() {
    let build = |method| {
        simulator(PaymentStrategy::HeavyRevolver {
            start_index: 0,
            late_every_nth_cycle: 0,
        })
        .interest_method(method)
        .starting_balance(Money::from_major(2_500))
        .date_range(date(2024, 1, 1), date(2024, 3, 31))
        .build()
        .unwrap()
    };

    let simple = build(InterestMethod::AverageDailyBalance).run().unwrap();
    let compound = build(InterestMethod::SynchronyDailyBalance).run().unwrap();

    assert!(compound.total_interest() > simple.total_interest());
}

#[test]
fn configuration_errors_surface_before_running() {
    let err = SimulationConfig::from_json(r#"{"payment_strategy": {"kind": "early_transactor"}}"#)
        .unwrap()
        .simulator(Vec::new())
        .unwrap_err();
    assert!(err.is_validation());

    let err = simulator(PaymentStrategy::EarlyTransactor)
        .date_range(date(2024, 5, 1), date(2024, 4, 30))
        .build()
        .unwrap_err();
    assert!(matches!(err, SimulationError::InvalidDateRange { .. }));
}
