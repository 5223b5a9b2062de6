//! Bank account model and operations.
//!
//! Maintains the invariant: `balance >= 0` at all times.

use crate::amount::Amount;
use crate::error::{AtmError, Result};

/// A single user's balance and transaction pin.
///
/// # Invariants
///
/// - `balance` never goes below zero; a withdrawal larger than the balance
///   is rejected and leaves the account untouched
/// - The pin is only ever compared by exact, case-sensitive equality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    balance: Amount,
    transaction_pin: String,
}

impl Account {
    /// Creates an account with the given opening balance and pin.
    pub fn new(balance: Amount, transaction_pin: impl Into<String>) -> Self {
        Account {
            balance,
            transaction_pin: transaction_pin.into(),
        }
    }

    /// Returns the current balance.
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Returns `true` if `pin` matches the stored transaction pin exactly.
    pub fn verify_pin(&self, pin: &str) -> bool {
        self.transaction_pin == pin
    }

    /// Credits the account and returns the new balance.
    ///
    /// Fails with `AmountTooLarge` when the new balance would overflow.
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AtmError::AmountTooLarge {
                balance: self.balance,
                requested: amount,
            })?;
        Ok(self.balance)
    }

    /// Debits the account and returns the remaining balance.
    ///
    /// Fails with `InsufficientFunds` when `amount` exceeds the balance.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount> {
        if amount > self.balance {
            return Err(AtmError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }

        self.balance -= amount;
        Ok(self.balance)
    }

    /// Replaces the transaction pin.
    pub fn set_pin(&mut self, new_pin: impl Into<String>) {
        self.transaction_pin = new_pin.into();
    }
}
