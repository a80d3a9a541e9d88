/// Single account state: balance, PIN and transaction log.
/// State is modified using events, which are created by handling commands
pub mod account;

/// Commands executed by [`account`], plus parsing of menu choices and amounts.
pub mod command;

/// Account processor interface, plus the session implementation that
/// gates the account behind a PIN check.
///
/// NOTE: there is only one implementation, the trait keeps the menu driver
/// independent of how the account is held.
pub mod processor;

/// Command-line configuration.
pub mod cli;

/// Menu driver used by the binary. It lives in the library so the
/// integration tests can run scripted sessions.
pub mod bin_utils;
