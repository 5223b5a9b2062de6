//! Fixed settings of the machine.

use crate::amount::Amount;

/// Machine-wide constants: the seeded default account and opening balances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtmConfig {
    /// Display name used in the welcome and farewell messages.
    pub name: String,

    /// Username of the account seeded at start-up.
    pub default_username: String,

    /// Transaction pin of the seeded account.
    pub default_pin: String,

    /// Balance of the seeded account.
    pub opening_balance: Amount,

    /// Balance every newly created account starts with.
    pub new_account_balance: Amount,
}

impl Default for AtmConfig {
    fn default() -> Self {
        AtmConfig {
            name: "CLI ATM Machine".to_string(),
            default_username: "philemon".to_string(),
            default_pin: "1234".to_string(),
            opening_balance: Amount::from(5_006_267),
            new_account_balance: Amount::from(2_000),
        }
    }
}
