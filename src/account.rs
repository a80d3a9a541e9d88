use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::command::{AccountCommand, AmountAction};

/// PIN assigned to a freshly opened account unless the caller provides one.
pub const DEFAULT_PIN: &str = "1234";

/// Currency label used for every displayed amount.
pub const CURRENCY_LABEL: &str = "Rs.";

/// Account credential. Its `Debug` output never reveals the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Pin {
    fn default() -> Self {
        Self::new(DEFAULT_PIN)
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

impl From<&str> for Pin {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Pin {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Amount rendered with the currency label, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(pub Decimal);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CURRENCY_LABEL} {:.2}", self.0.round_dp(2))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountEvent {
    BalanceInquired { balance: Decimal },
    Deposited { amount: Decimal },
    Withdrawn { amount: Decimal },
    /// Records that the PIN changed, never the value.
    PinChanged,
}

/// Transaction log entry, as shown in the history.
impl fmt::Display for AccountEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountEvent::BalanceInquired { .. } => f.write_str("Balance Inquiry"),
            AccountEvent::Deposited { amount } => write!(f, "Deposited {}", Money(*amount)),
            AccountEvent::Withdrawn { amount } => write!(f, "Withdrew {}", Money(*amount)),
            AccountEvent::PinChanged => f.write_str("PIN Changed"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid {action} amount: {amount}")]
    InvalidAmount {
        action: AmountAction,
        amount: Decimal,
    },
    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Decimal,
        requested: Decimal,
    },
    #[error("Incorrect PIN")]
    PinMismatch,
    #[error("{action} of {amount} cannot be applied exactly to the balance")]
    UnrepresentableAmount {
        action: AmountAction,
        amount: Decimal,
    },
}

/// Single account with a balance, a PIN and an append-only transaction log.
///
/// Every change goes through an [`AccountEvent`]: [`Account::handle_command`]
/// validates a command against the current state and produces the event,
/// `apply` mutates the balance and appends the event to the log.
#[derive(Debug)]
pub struct Account {
    balance: Decimal,
    pin: Pin,
    transaction_log: Vec<AccountEvent>,
}

impl Default for Account {
    fn default() -> Self {
        Self::with_default_pin(Decimal::ZERO)
    }
}

impl Account {
    pub fn new(initial_balance: Decimal, pin: impl Into<Pin>) -> Self {
        Self {
            balance: initial_balance,
            pin: pin.into(),
            transaction_log: Vec::new(),
        }
    }

    /// Opens an account protected by [`DEFAULT_PIN`].
    pub fn with_default_pin(initial_balance: Decimal) -> Self {
        Self::new(initial_balance, Pin::default())
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Entries in the order they were recorded.
    pub fn transaction_history(&self) -> &[AccountEvent] {
        &self.transaction_log
    }

    pub fn check_pin(&self, candidate: &str) -> bool {
        let matches = self.pin.as_str() == candidate;
        if !matches {
            tracing::info!("PIN check failed");
        }
        matches
    }

    pub fn handle_command(&self, command: AccountCommand) -> Result<AccountEvent, AccountError> {
        match command {
            AccountCommand::BalanceInquiry => Ok(AccountEvent::BalanceInquired {
                balance: self.balance,
            }),
            AccountCommand::Deposit { amount } => {
                Self::ensure_positive(AmountAction::Deposit, amount)?;
                // sums beyond 28 significant digits are rounded silently
                match self.balance.checked_add(amount) {
                    Some(total) if total - self.balance == amount => {
                        Ok(AccountEvent::Deposited { amount })
                    }
                    _ => Err(AccountError::UnrepresentableAmount {
                        action: AmountAction::Deposit,
                        amount,
                    }),
                }
            }
            AccountCommand::Withdraw { amount } => {
                Self::ensure_positive(AmountAction::Withdraw, amount)?;
                if amount > self.balance {
                    return Err(AccountError::InsufficientFunds {
                        available: self.balance,
                        requested: amount,
                    });
                }
                match self.balance.checked_sub(amount) {
                    Some(remaining) if self.balance - remaining == amount => {
                        Ok(AccountEvent::Withdrawn { amount })
                    }
                    _ => Err(AccountError::UnrepresentableAmount {
                        action: AmountAction::Withdraw,
                        amount,
                    }),
                }
            }
            AccountCommand::ChangePin { old_pin, .. } => {
                if self.check_pin(old_pin.as_str()) {
                    Ok(AccountEvent::PinChanged)
                } else {
                    Err(AccountError::PinMismatch)
                }
            }
        }
    }

    /// Applies an already validated event, no further checks happen here.
    /// The PIN itself is replaced by [`Account::execute`].
    pub(crate) fn apply(&mut self, event: AccountEvent) {
        match &event {
            AccountEvent::BalanceInquired { .. } => {}
            AccountEvent::Deposited { amount } => {
                self.balance += *amount;
            }
            AccountEvent::Withdrawn { amount } => {
                self.balance -= *amount;
            }
            AccountEvent::PinChanged => {
                tracing::info!("PIN changed");
            }
        }
        tracing::debug!(entry = %event, balance = %self.balance, "event applied");
        self.transaction_log.push(event);
    }

    /// Validates and applies `command` in one step.
    pub fn execute(&mut self, command: AccountCommand) -> Result<AccountEvent, AccountError> {
        let new_pin = match &command {
            AccountCommand::ChangePin { new_pin, .. } => Some(new_pin.clone()),
            _ => None,
        };
        let event = self.handle_command(command).inspect_err(|err| {
            tracing::info!(%err, "operation rejected");
        })?;
        if let Some(new_pin) = new_pin {
            self.pin = new_pin;
        }
        self.apply(event.clone());
        Ok(event)
    }

    /// Returns the current balance and records the inquiry.
    pub fn balance_inquiry(&mut self) -> Decimal {
        let balance = self.balance;
        self.apply(AccountEvent::BalanceInquired { balance });
        balance
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        self.execute(AccountCommand::Deposit { amount })
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        self.execute(AccountCommand::Withdraw { amount })
    }

    pub fn change_pin(
        &mut self,
        old_pin: impl Into<Pin>,
        new_pin: impl Into<Pin>,
    ) -> Result<AccountEvent, AccountError> {
        self.execute(AccountCommand::ChangePin {
            old_pin: old_pin.into(),
            new_pin: new_pin.into(),
        })
    }

    fn ensure_positive(action: AmountAction, amount: Decimal) -> Result<(), AccountError> {
        if amount > Decimal::ZERO {
            Ok(())
        } else {
            Err(AccountError::InvalidAmount { action, amount })
        }
    }
}
