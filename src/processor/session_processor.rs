use crate::{
    account::{Account, AccountError, AccountEvent},
    command::AccountCommand,
};

use super::{AccountProcessor, OperationError};

/// Gates a single in-memory [`Account`] behind one successful PIN check.
#[derive(Debug, Default)]
pub struct SessionProcessor {
    account: Account,
    authenticated: bool,
}

impl SessionProcessor {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            authenticated: false,
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn into_account(self) -> Account {
        self.account
    }

    fn ensure_authenticated(&self) -> Result<(), OperationError> {
        if self.authenticated {
            Ok(())
        } else {
            Err(OperationError::NotAuthenticated)
        }
    }
}

impl AccountProcessor for SessionProcessor {
    fn authenticate(&mut self, pin: &str) -> Result<(), OperationError> {
        if self.authenticated {
            return Ok(());
        }
        if !self.account.check_pin(pin) {
            return Err(AccountError::PinMismatch.into());
        }
        self.authenticated = true;
        tracing::info!("session authenticated");
        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn process(&mut self, command: AccountCommand) -> Result<AccountEvent, OperationError> {
        self.ensure_authenticated()?;
        Ok(self.account.execute(command)?)
    }

    fn history(&self) -> Result<&[AccountEvent], OperationError> {
        self.ensure_authenticated()?;
        Ok(self.account.transaction_history())
    }
}
