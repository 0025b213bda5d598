use chrono::NaiveDate;

use crate::cycle::{cycles_between, BillingCycle};
use crate::decimal::Money;
use crate::errors::{Result, SimulationError};
use crate::events::{Event, EventStore};
use crate::fees::FeeSchedule;
use crate::interest::InterestMethod;
use crate::payments::{PaymentStrategy, StrategyState};
use crate::rewards::RewardPolicy;
use crate::state::AccountState;
use crate::summary::Summary;
use crate::transaction::{sort_chronologically, Transaction};
use crate::types::PaymentInstruction;

/// walks calendar-month billing cycles over a transaction list
///
/// Each cycle posts its transactions, charges the paper statement fee,
/// charges interest, asks the payment strategy for a payment, charges the
/// late fee when that payment is dated past the due date and finally applies
/// the payment. A simulator is immutable; every call to [`run`] starts from
/// the strategy's initial state, so repeated runs give identical results.
///
/// [`run`]: AccountSimulator::run
#[derive(Debug, Clone)]
pub struct AccountSimulator {
    transactions: Vec<Transaction>,
    starting_balance: Money,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reward_policy: RewardPolicy,
    fee_schedule: FeeSchedule,
    interest_method: InterestMethod,
    payment_strategy: PaymentStrategy,
}

impl AccountSimulator {
    pub fn builder() -> AccountSimulatorBuilder {
        AccountSimulatorBuilder::new()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn payment_strategy(&self) -> PaymentStrategy {
        self.payment_strategy
    }

    pub fn interest_method(&self) -> InterestMethod {
        self.interest_method
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn run(&self) -> Result<Summary> {
        let mut events = EventStore::new();
        self.simulate(&mut events)
    }

    /// run and keep the per-cycle audit trail
    pub fn run_with_events(&self) -> Result<(Summary, Vec<Event>)> {
        let mut events = EventStore::new();
        let summary = self.simulate(&mut events)?;
        Ok((summary, events.take_events()))
    }

    fn simulate(&self, events: &mut EventStore) -> Result<Summary> {
        let cycles = cycles_between(self.start_date, self.end_date)?;

        let in_range: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.date() >= self.start_date && t.date() <= self.end_date)
            .collect();

        let mut account = AccountState::new(self.starting_balance);
        let mut summary = Summary::new(account.balance);

        log::info!(
            "simulation start: {} to {}, {} transactions, opening balance {}, {} / {}",
            self.start_date,
            self.end_date,
            in_range.len(),
            account.balance,
            self.payment_strategy.name(),
            self.interest_method.name()
        );

        // nothing to post and nothing owed: no statements are produced
        if in_range.is_empty() && account.balance.is_zero() {
            log::info!("simulation end: no activity in range");
            return Ok(self.close(summary, &account));
        }

        let mut strategy_state = self.payment_strategy.initial_state();
        let mut pending = in_range.into_iter().peekable();

        for (index, cycle) in cycles.enumerate() {
            let cycle_number = index as u32;
            events.emit(Event::CycleOpened {
                cycle: cycle_number,
                start: cycle.start,
                end: cycle.end,
                opening_balance: account.balance,
            });

            while let Some(transaction) = pending.next_if(|t| cycle.contains(t.date())) {
                self.post_transaction(&mut account, events, cycle_number, transaction);
            }

            if self.fee_schedule.paper_fee_applies(account.balance) {
                let fee = self.fee_schedule.paper_statement_fee;
                events.emit(Event::PaperStatementFeeCharged {
                    cycle: cycle_number,
                    fee,
                    balance_before: account.balance,
                });
                account.charge_fee(fee);
            }

            let interest = self.charge_interest(&mut account, events, cycle_number, &cycle);

            let (instruction, clamped, next_state) =
                self.determine_payment(&mut account, events, cycle_number, &cycle, strategy_state);
            strategy_state = next_state;

            let statement_balance = account.balance;
            summary.record_statement(cycle.end, statement_balance, interest, account.total_fees);

            let applied = account.apply_payment(clamped);
            summary.record_payment(applied);
            events.emit(Event::PaymentApplied {
                cycle: cycle_number,
                date: instruction.date,
                instructed: instruction.amount,
                applied,
            });
            events.emit(Event::CycleClosed {
                cycle: cycle_number,
                end: cycle.end,
                statement_balance,
                closing_balance: account.balance,
            });

            log::debug!(
                "cycle {} ({}): balance {}, interest {}, fees to date {}, payment {}",
                cycle_number,
                cycle.end,
                statement_balance,
                interest,
                account.total_fees,
                applied
            );
        }

        let summary = self.close(summary, &account);
        log::info!(
            "simulation end: {} cycles, ending balance {}, interest {}, fees {}, rewards {}",
            summary.cycle_count(),
            summary.ending_balance(),
            summary.total_interest(),
            summary.total_fees(),
            summary.total_rewards()
        );
        Ok(summary)
    }

    fn post_transaction(
        &self,
        account: &mut AccountState,
        events: &mut EventStore,
        cycle: u32,
        transaction: &Transaction,
    ) {
        let reward = self
            .reward_policy
            .reward_for_category(transaction.category(), transaction.amount());
        account.post_purchase(transaction.amount(), reward);

        log::trace!(
            "posted {} {} on {}, reward {}",
            transaction.category(),
            transaction.amount(),
            transaction.date(),
            reward
        );
        events.emit(Event::PurchasePosted {
            cycle,
            date: transaction.date(),
            category: transaction.category(),
            amount: transaction.amount(),
            new_balance: account.balance,
        });
        events.emit(Event::RewardEarned {
            cycle,
            category: transaction.category(),
            reward,
        });
    }

    /// returns the cents actually charged
    fn charge_interest(
        &self,
        account: &mut AccountState,
        events: &mut EventStore,
        cycle_number: u32,
        cycle: &BillingCycle,
    ) -> Money {
        let calculation = self
            .interest_method
            .compute_with_schedule(account.balance, &self.fee_schedule, cycle);
        let computed = calculation.interest_amount;
        let charged = self.fee_schedule.apply_minimum_interest(computed).round_currency();

        account.charge_interest(charged);
        events.emit(Event::InterestCharged {
            cycle: cycle_number,
            method: self.interest_method,
            computed,
            charged,
            minimum_applied: charged != computed,
        });
        charged
    }

    /// clamps the instruction to the balance and charges the late fee, which
    /// is judged on the instructed date alone
    fn determine_payment(
        &self,
        account: &mut AccountState,
        events: &mut EventStore,
        cycle_number: u32,
        cycle: &BillingCycle,
        state: StrategyState,
    ) -> (PaymentInstruction, Money, StrategyState) {
        let (instruction, next_state) = self.payment_strategy.next_payment(account.balance, cycle, state);
        let clamped = account.clamp_payment(instruction.amount);

        let due_date = cycle.days_after_close(self.fee_schedule.payment_due_days);
        if instruction.is_late(due_date) {
            let fee = self.fee_schedule.late_fee_high;
            log::warn!(
                "cycle {}: payment dated {} is after due date {}, late fee {}",
                cycle_number,
                instruction.date,
                due_date,
                fee
            );
            account.charge_fee(fee);
            events.emit(Event::LateFeeCharged {
                cycle: cycle_number,
                fee,
                due_date,
                payment_date: instruction.date,
            });
        }

        (instruction, clamped, next_state)
    }

    fn close(&self, summary: Summary, account: &AccountState) -> Summary {
        summary.close(
            account.balance,
            account.total_payments,
            account.total_interest,
            account.total_fees,
            account.total_rewards,
        )
    }
}

/// builder for [`AccountSimulator`]
///
/// Reward policy, payment strategy, interest method and both dates are
/// required. The starting balance defaults to zero and the fee schedule to
/// [`FeeSchedule::standard`].
#[derive(Debug, Clone, Default)]
pub struct AccountSimulatorBuilder {
    transactions: Vec<Transaction>,
    starting_balance: Option<Money>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    reward_policy: Option<RewardPolicy>,
    fee_schedule: Option<FeeSchedule>,
    interest_method: Option<InterestMethod>,
    payment_strategy: Option<PaymentStrategy>,
}

impl AccountSimulatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn transaction(mut self, transaction: Transaction) -> Self {
        self.transactions.push(transaction);
        self
    }

    pub fn starting_balance(mut self, balance: Money) -> Self {
        self.starting_balance = Some(balance);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date(start).end_date(end)
    }

    pub fn reward_policy(mut self, policy: RewardPolicy) -> Self {
        self.reward_policy = Some(policy);
        self
    }

    pub fn fee_schedule(mut self, schedule: FeeSchedule) -> Self {
        self.fee_schedule = Some(schedule);
        self
    }

    pub fn interest_method(mut self, method: InterestMethod) -> Self {
        self.interest_method = Some(method);
        self
    }

    pub fn payment_strategy(mut self, strategy: PaymentStrategy) -> Self {
        self.payment_strategy = Some(strategy);
        self
    }

    pub fn build(self) -> Result<AccountSimulator> {
        let reward_policy = self
            .reward_policy
            .ok_or(SimulationError::MissingParameter { name: "reward_policy" })?;
        let payment_strategy = self
            .payment_strategy
            .ok_or(SimulationError::MissingParameter { name: "payment_strategy" })?;
        let interest_method = self
            .interest_method
            .ok_or(SimulationError::MissingParameter { name: "interest_method" })?;
        let start_date = self
            .start_date
            .ok_or(SimulationError::MissingParameter { name: "start_date" })?;
        let end_date = self
            .end_date
            .ok_or(SimulationError::MissingParameter { name: "end_date" })?;

        if end_date < start_date {
            return Err(SimulationError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        let mut transactions = self.transactions;
        sort_chronologically(&mut transactions);

        Ok(AccountSimulator {
            transactions,
            starting_balance: self.starting_balance.unwrap_or(Money::ZERO),
            start_date,
            end_date,
            reward_policy,
            fee_schedule: self.fee_schedule.unwrap_or_default(),
            interest_method,
            payment_strategy,
        })
    }
}
