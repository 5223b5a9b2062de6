//! Account retrieval and pin verification.

use crate::account::Account;
use crate::directory::AccountDirectory;
use crate::error::AuthError;
use log::warn;

/// Retrieves the account registered under `username` and verifies `pin`.
///
/// Every command that touches an account goes through here. A handle is
/// only returned when the username exists and the pin matches exactly.
pub fn authenticate<'a>(
    directory: &'a mut AccountDirectory,
    username: &str,
    pin: &str,
) -> Result<&'a mut Account, AuthError> {
    if username.is_empty() || pin.is_empty() {
        return Err(AuthError::EmptyCredential);
    }

    let account = directory
        .lookup_mut(username)
        .ok_or_else(|| AuthError::UnknownUser(username.to_string()))?;

    if !account.verify_pin(pin) {
        warn!("Rejected pin for account {}", username);
        return Err(AuthError::PinMismatch);
    }

    Ok(account)
}
