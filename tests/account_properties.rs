use atm_sim::account::{Account, AccountError, DEFAULT_PIN};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Amounts in paise, up to ten million rupees.
fn cents(range: std::ops::RangeInclusive<i64>) -> impl Strategy<Value = Decimal> {
    range.prop_map(|value| Decimal::new(value, 2))
}

fn positive_amount() -> impl Strategy<Value = Decimal> {
    cents(1..=1_000_000_000)
}

fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    cents(-1_000_000_000..=0)
}

proptest! {
    #[test]
    fn prop_deposit_adds_amount(balance in cents(0..=1_000_000_000), amount in positive_amount()) {
        let mut acc = Account::with_default_pin(balance);
        acc.deposit(amount).unwrap();
        prop_assert_eq!(acc.balance(), balance + amount);
        prop_assert_eq!(acc.transaction_history().len(), 1);
    }

    #[test]
    fn prop_non_positive_deposit_is_rejected(balance in cents(0..=1_000_000_000), amount in non_positive_amount()) {
        let mut acc = Account::with_default_pin(balance);
        let is_invalid = matches!(acc.deposit(amount), Err(AccountError::InvalidAmount { .. }));
        prop_assert!(is_invalid);
        prop_assert_eq!(acc.balance(), balance);
        prop_assert!(acc.transaction_history().is_empty());
    }

    #[test]
    fn prop_withdraw_within_balance(balance in positive_amount(), fraction in 1u32..=100) {
        let amount = (balance * Decimal::from(fraction) / Decimal::new(100, 0)).round_dp(2);
        prop_assume!(amount > Decimal::ZERO);
        let mut acc = Account::with_default_pin(balance);
        acc.withdraw(amount).unwrap();
        prop_assert_eq!(acc.balance(), balance - amount);
        prop_assert!(acc.balance() >= Decimal::ZERO);
        prop_assert_eq!(acc.transaction_history().len(), 1);
    }

    #[test]
    fn prop_withdraw_above_balance(balance in cents(0..=1_000_000_000), extra in positive_amount()) {
        let mut acc = Account::with_default_pin(balance);
        let is_insufficient = matches!(
            acc.withdraw(balance + extra),
            Err(AccountError::InsufficientFunds { .. })
        );
        prop_assert!(is_insufficient);
        prop_assert_eq!(acc.balance(), balance);
        prop_assert!(acc.transaction_history().is_empty());
    }

    #[test]
    fn prop_non_positive_withdrawal_is_rejected(balance in cents(0..=1_000_000_000), amount in non_positive_amount()) {
        let mut acc = Account::with_default_pin(balance);
        let is_invalid = matches!(acc.withdraw(amount), Err(AccountError::InvalidAmount { .. }));
        prop_assert!(is_invalid);
        prop_assert_eq!(acc.balance(), balance);
        prop_assert!(acc.transaction_history().is_empty());
    }

    #[test]
    fn prop_check_pin_matches_only_stored(pin in "[0-9]{0,6}", candidate in "[0-9]{0,6}") {
        let acc = Account::new(Decimal::ZERO, pin.as_str());
        prop_assert_eq!(acc.check_pin(&candidate), pin == candidate);
    }

    #[test]
    fn prop_change_pin(old in "[0-9]{4}", new in "[0-9]{0,6}", wrong in "[0-9]{5}") {
        let mut acc = Account::new(Decimal::ZERO, old.as_str());

        // `wrong` is never a four digit PIN
        prop_assert!(acc.change_pin(wrong.as_str(), new.as_str()).is_err());
        prop_assert!(acc.check_pin(&old));
        prop_assert!(acc.transaction_history().is_empty());

        acc.change_pin(old.as_str(), new.as_str()).unwrap();
        prop_assert!(acc.check_pin(&new));
        prop_assert_eq!(acc.check_pin(&old), old == new);
        prop_assert_eq!(acc.transaction_history().len(), 1);
    }

    #[test]
    fn prop_history_is_read_only(amounts in prop::collection::vec(positive_amount(), 0..10)) {
        let mut acc = Account::with_default_pin(Decimal::ZERO);
        for amount in &amounts {
            acc.deposit(*amount).unwrap();
        }
        let first: Vec<String> = acc.transaction_history().iter().map(ToString::to_string).collect();
        let second: Vec<String> = acc.transaction_history().iter().map(ToString::to_string).collect();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), amounts.len());
        prop_assert!(acc.check_pin(DEFAULT_PIN));
    }
}

#[test]
fn scenario_deposit_then_log() {
    let mut acc = Account::with_default_pin(Decimal::new(500, 0));
    acc.deposit(Decimal::new(100, 0)).unwrap();
    assert_eq!(acc.balance(), Decimal::new(600, 0));
    let log: Vec<String> = acc
        .transaction_history()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(log, ["Deposited Rs. 100.00"]);
}

#[test]
fn scenario_rejected_amounts_leave_state() {
    let mut acc = Account::with_default_pin(Decimal::new(600, 0));
    acc.deposit(Decimal::new(-5, 0)).unwrap_err();
    acc.withdraw(Decimal::ZERO).unwrap_err();
    acc.withdraw(Decimal::new(700, 0)).unwrap_err();
    assert_eq!(acc.balance(), Decimal::new(600, 0));
    assert!(acc.transaction_history().is_empty());

    acc.withdraw(Decimal::new(600, 0)).unwrap();
    assert_eq!(acc.balance(), Decimal::ZERO);
}
