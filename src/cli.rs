use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use crate::{
    account::{Account, DEFAULT_PIN},
    command::parse_amount,
};

/// Simulate a single ATM session against an in-memory account
#[derive(Parser, Debug)]
#[command(name = "atm-sim")]
#[command(about = "Simulate a single ATM session against an in-memory account", long_about = None)]
pub struct CliArgs {
    /// Balance the account is opened with
    #[arg(
        long = "initial-balance",
        value_name = "AMOUNT",
        default_value = "500",
        value_parser = parse_initial_balance
    )]
    pub initial_balance: Decimal,

    /// PIN the account is protected with
    #[arg(long = "pin", value_name = "PIN", default_value = DEFAULT_PIN)]
    pub pin: String,
}

impl CliArgs {
    pub fn open_account(&self) -> Account {
        Account::new(self.initial_balance, self.pin.as_str())
    }
}

fn parse_initial_balance(input: &str) -> Result<Decimal, String> {
    let amount = parse_amount(input).map_err(|err| err.to_string())?;
    if amount < Decimal::ZERO {
        return Err(format!("initial balance must not be negative, got {amount}"));
    }
    Ok(amount)
}

/// Log filter used when `RUST_LOG` is not set. User mistakes are logged below
/// this level since the menu already reports them.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Parse command-line arguments, exiting with a usage message on error
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
