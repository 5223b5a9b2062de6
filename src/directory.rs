//! In-memory account store keyed by username.

use crate::account::Account;
use crate::amount::Amount;
use crate::config::AtmConfig;
use crate::error::{AtmError, Result};
use log::debug;
use std::collections::HashMap;

/// All accounts known to the machine for the lifetime of the process.
///
/// Usernames are unique and accounts are never removed.
#[derive(Debug, Clone)]
pub struct AccountDirectory {
    accounts: HashMap<String, Account>,
    new_account_balance: Amount,
}

impl AccountDirectory {
    /// Creates a directory seeded with the configured default account.
    pub fn with_config(config: &AtmConfig) -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(
            config.default_username.clone(),
            Account::new(config.opening_balance, config.default_pin.clone()),
        );

        AccountDirectory {
            accounts,
            new_account_balance: config.new_account_balance,
        }
    }

    /// Registers a new account with the default starting balance.
    ///
    /// An existing account is never overwritten.
    pub fn create(&mut self, username: &str, pin: &str) -> Result<()> {
        if username.is_empty() || pin.is_empty() {
            return Err(AtmError::InvalidInput("transaction pin or username"));
        }

        if self.accounts.contains_key(username) {
            return Err(AtmError::DuplicateAccount(username.to_string()));
        }

        self.accounts.insert(
            username.to_string(),
            Account::new(self.new_account_balance, pin),
        );
        debug!("Created account {}", username);
        Ok(())
    }

    /// Returns the account registered under `username`.
    pub fn lookup(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    /// Returns a mutable handle to the account registered under `username`.
    pub fn lookup_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.get_mut(username)
    }

    /// Registered usernames in ascending order.
    pub fn usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.accounts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns `true` if no accounts are registered.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for AccountDirectory {
    fn default() -> Self {
        Self::with_config(&AtmConfig::default())
    }
}
