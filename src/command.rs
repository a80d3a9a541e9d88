use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::Pin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    BalanceInquiry,
    Deposit,
    Withdraw,
    ChangePin,
    TransactionHistory,
    Exit,
}

impl MenuChoice {
    /// Menu entries in the order they are displayed.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::BalanceInquiry,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::ChangePin,
        MenuChoice::TransactionHistory,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::BalanceInquiry => "1",
            MenuChoice::Deposit => "2",
            MenuChoice::Withdraw => "3",
            MenuChoice::ChangePin => "4",
            MenuChoice::TransactionHistory => "5",
            MenuChoice::Exit => "6",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::BalanceInquiry => "Balance Inquiry",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::ChangePin => "Change PIN",
            MenuChoice::TransactionHistory => "Transaction History",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = AccountCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.key() == input)
            .ok_or_else(|| AccountCommandError::UnknownChoice {
                input: input.to_owned(),
            })
    }
}

/// Operations that move money, used to tell rejected amounts apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountAction {
    Deposit,
    Withdraw,
}

impl fmt::Display for AmountAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountAction::Deposit => f.write_str("deposit"),
            AmountAction::Withdraw => f.write_str("withdrawal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountCommand {
    BalanceInquiry,
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
    ChangePin { old_pin: Pin, new_pin: Pin },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountCommandError {
    #[error("Invalid choice `{input}`")]
    UnknownChoice { input: String },
    #[error("Invalid amount: '{input}' is not a number.")]
    MalformedAmount { input: String },
}

/// Parses an amount typed by the user.
///
/// Accepts plain decimals (`100`, `-5`, `12.345`) as well as scientific
/// notation (`1e3`). Sign is not checked here, non-positive amounts are
/// rejected by [`crate::account::Account`].
pub fn parse_amount(input: &str) -> Result<Decimal, AccountCommandError> {
    let input = input.trim();
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .map_err(|_| AccountCommandError::MalformedAmount {
            input: input.to_owned(),
        })
}
