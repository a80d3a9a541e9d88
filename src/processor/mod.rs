use thiserror::Error;

use crate::{
    account::{AccountError, AccountEvent},
    command::{AccountCommand, AccountCommandError},
};

pub mod session_processor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error(transparent)]
    CommandErr(#[from] AccountCommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error("PIN verification is required before any operation")]
    NotAuthenticated,
}

pub trait AccountProcessor {
    /// Verifies `pin`. Once it succeeds the session stays authenticated.
    fn authenticate(&mut self, pin: &str) -> Result<(), OperationError>;

    fn is_authenticated(&self) -> bool;

    fn process(&mut self, command: AccountCommand) -> Result<AccountEvent, OperationError>;

    fn history(&self) -> Result<&[AccountEvent], OperationError>;
}
