use std::io::Write;

use crate::{
    account::{AccountError, AccountEvent, Money},
    command::{AccountCommandError, MenuChoice},
    processor::OperationError,
};

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const PIN_PROMPT: &str = "Enter your PIN: ";
pub const DEPOSIT_PROMPT: &str = "Enter amount to deposit: ";
pub const WITHDRAW_PROMPT: &str = "Enter amount to withdraw: ";
pub const CURRENT_PIN_PROMPT: &str = "Enter your current PIN: ";
pub const NEW_PIN_PROMPT: &str = "Enter your new PIN: ";
pub const FAREWELL: &str = "Thank you for using the ATM. Goodbye!";

pub fn print_menu<W>(output: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    writeln!(output)?;
    writeln!(output, "=== ATM Menu ===")?;
    for choice in MenuChoice::ALL {
        writeln!(output, "{}. {}", choice.key(), choice.label())?;
    }
    Ok(())
}

/// Writes `prompt` without a trailing newline and flushes, so it shows up
/// before the user types.
pub fn print_prompt<W>(output: &mut W, prompt: &str) -> anyhow::Result<()>
where
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;
    Ok(())
}

pub fn print_event<W>(output: &mut W, event: &AccountEvent) -> anyhow::Result<()>
where
    W: Write,
{
    match event {
        AccountEvent::BalanceInquired { balance } => {
            writeln!(output, "Your current balance is: {}", Money(*balance))?
        }
        AccountEvent::Deposited { amount } => {
            writeln!(output, "{} deposited successfully.", Money(*amount))?
        }
        AccountEvent::Withdrawn { amount } => {
            writeln!(output, "{} withdrawn successfully.", Money(*amount))?
        }
        AccountEvent::PinChanged => writeln!(output, "PIN changed successfully.")?,
    }
    Ok(())
}

pub fn print_history<W>(output: &mut W, entries: &[AccountEvent]) -> anyhow::Result<()>
where
    W: Write,
{
    writeln!(output, "Transaction History:")?;
    for entry in entries {
        writeln!(output, "{entry}")?;
    }
    Ok(())
}

pub fn print_error<W>(output: &mut W, err: &OperationError) -> anyhow::Result<()>
where
    W: Write,
{
    match err {
        OperationError::CommandErr(AccountCommandError::UnknownChoice { .. }) => {
            writeln!(output, "Invalid choice. Please try again.")?
        }
        OperationError::CommandErr(err @ AccountCommandError::MalformedAmount { .. }) => {
            writeln!(output, "{err}")?
        }
        OperationError::AccountErr(AccountError::InvalidAmount { action, .. }) => {
            writeln!(output, "Invalid {action} amount.")?
        }
        OperationError::AccountErr(AccountError::InsufficientFunds { .. }) => {
            writeln!(output, "Insufficient funds.")?
        }
        OperationError::AccountErr(AccountError::PinMismatch) => {
            writeln!(output, "Incorrect PIN.")?
        }
        OperationError::AccountErr(AccountError::UnrepresentableAmount { .. }) => {
            writeln!(output, "Amount cannot be applied to the current balance.")?
        }
        OperationError::NotAuthenticated => writeln!(output, "Please enter your PIN first.")?,
    }
    Ok(())
}
