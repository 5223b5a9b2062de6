//! Error types for the ATM.

use crate::amount::Amount;
use thiserror::Error;

/// Result type alias for ATM operations
pub type Result<T> = std::result::Result<T, AtmError>;

/// Reasons an account could not be retrieved and verified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Username or transaction pin was empty
    #[error("transaction pin or username cannot be empty")]
    EmptyCredential,

    /// No account is registered under the username
    #[error("user with username {0} does not exist. Please proceed to create an account")]
    UnknownUser(String),

    /// The supplied pin does not match the stored one
    #[error("unauthorized: provided transaction pin does not match account's transaction pin")]
    PinMismatch,
}

/// Errors that can occur while executing a command.
///
/// Every variant except `Io` is recoverable: the dispatcher reports it and
/// prompts for the next command.
#[derive(Error, Debug)]
pub enum AtmError {
    /// A required field was empty
    #[error("{0} cannot be empty")]
    InvalidInput(&'static str),

    /// An account with the username already exists
    #[error("account with username {0} already exists")]
    DuplicateAccount(String),

    /// Account retrieval or pin verification failed
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Amount token is not a number
    #[error("invalid amount entered: {0:?} is not a number")]
    ParseError(String),

    /// Amount is zero or negative
    #[error("amount must be greater than zero, got {0}")]
    InvalidAmount(Amount),

    /// Withdrawal exceeds the current balance
    #[error("sorry, your account balance is insufficient for this withdrawal. You have {balance} and want to withdraw {requested}")]
    InsufficientFunds { balance: Amount, requested: Amount },

    /// Deposit would push the balance past the largest representable amount
    #[error("sorry, this deposit cannot be accepted. Adding {requested} to your balance of {balance} exceeds the maximum amount an account can hold")]
    AmountTooLarge { balance: Amount, requested: Amount },

    /// New pin is the same as the current one
    #[error("cannot use your current pin as the new pin")]
    SamePin,

    /// Failed to write to the output streams
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Arguments that could not be bound to a command's parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// Positional argument count differs from the command's arity
    #[error("expected {expected} argument(s), got {got}")]
    WrongCount { expected: usize, got: usize },

    /// Flag arguments rejected by the command-line parser
    #[error("{0}")]
    Flags(String),
}
