/// strategy comparison - one year of purchases under each payment behaviour
use credit_card_sim_rs::{loader, PaymentStrategy, SimulationConfig};

const PURCHASES: &str = "\
# date,category,amount
2024-01-06,Groceries,$182.40
2024-01-19,Gas,54.10
2024-02-03,Other,\"$1,250.00\"
2024-02-21,Groceries,96.75
2024-03-14,Gas,61.30
2024-04-02,Other,340.00
2024-05-17,Groceries,210.55
2024-06-08,Gas,48.90
2024-07-22,Other,75.00
2024-08-30,Groceries,133.20
2024-09-11,Gas,57.45
2024-10-27,Other,420.00
2024-11-25,Groceries,288.10
2024-12-18,Other,615.99
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== payment strategy comparison, 2024 ===\n");

    let transactions = loader::load_from_str(PURCHASES)?;

    let strategies = [
        PaymentStrategy::EarlyTransactor,
        PaymentStrategy::WallStreetTransactor,
        PaymentStrategy::LightRevolver { start_index: 0 },
        PaymentStrategy::HeavyRevolver {
            start_index: 0,
            late_every_nth_cycle: 6,
        },
    ];

    for strategy in strategies {
        let config = SimulationConfig::calendar_year(2024, strategy)?;
        let summary = config.simulator(transactions.clone())?.run()?;

        println!("{}", strategy.name());
        println!("{}", "-".repeat(strategy.name().len()));
        println!("  payments: ${}", summary.total_payments());
        println!("  interest: ${}", summary.total_interest());
        println!("  fees:     ${}", summary.total_fees());
        println!("  rewards:  ${}", summary.total_rewards());
        println!("  ending balance: ${}", summary.ending_balance());

        for point in summary.points() {
            println!(
                "    {:>2} {}  balance {:>10}  interest {:>7}  fees {:>7}  paid {:>10}",
                point.cycle,
                point.date,
                point.balance.round_currency(),
                point.interest,
                point.cumulative_fees,
                point.payment.round_currency()
            );
        }
        println!();
    }

    Ok(())
}
