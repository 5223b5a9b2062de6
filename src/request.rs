//! Typed requests built from bound arguments, and the receipts handlers
//! produce on success.

use crate::amount::Amount;
use crate::command::{self, CommandKind};
use crate::error::{AtmError, Result};
use std::fmt;

/// A validated command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Start {
        pin: String,
    },
    CreateAccount {
        username: String,
        pin: String,
    },
    Deposit {
        amount: Amount,
        username: String,
        pin: String,
    },
    Withdraw {
        amount: Amount,
        username: String,
        pin: String,
    },
    Balance {
        username: String,
        pin: String,
    },
    ChangePin {
        username: String,
        old_pin: String,
        new_pin: String,
    },
    Logout,
    Help,
}

impl Request {
    /// Builds a request from arguments already bound to `kind`'s parameters.
    ///
    /// Amounts are parsed here, so a malformed or non-positive amount is
    /// rejected before any account is touched.
    pub fn parse(kind: CommandKind, args: Vec<String>) -> Result<Request> {
        let mut args = args.into_iter();
        let mut next = || args.next().unwrap_or_default();

        let request = match kind {
            CommandKind::Start => Request::Start { pin: next() },
            CommandKind::CreateAccount => Request::CreateAccount {
                username: next(),
                pin: next(),
            },
            CommandKind::Deposit => Request::Deposit {
                amount: Amount::parse_positive(&next())?,
                username: next(),
                pin: next(),
            },
            CommandKind::Withdraw => Request::Withdraw {
                amount: Amount::parse_positive(&next())?,
                username: next(),
                pin: next(),
            },
            CommandKind::Balance => Request::Balance {
                username: next(),
                pin: next(),
            },
            CommandKind::ChangePin => {
                let username = next();
                let old_pin = next();
                let new_pin = next();
                if new_pin.is_empty() {
                    return Err(AtmError::InvalidInput("new transaction pin"));
                }
                Request::ChangePin {
                    username,
                    old_pin,
                    new_pin,
                }
            }
            CommandKind::Logout => Request::Logout,
            CommandKind::Help => Request::Help,
        };
        Ok(request)
    }
}

/// Outcome of a successful request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receipt {
    Welcome {
        machine: String,
        username: String,
        balance: Amount,
    },
    AccountCreated {
        username: String,
    },
    Deposited {
        username: String,
        balance: Amount,
    },
    Withdrew {
        username: String,
        amount: Amount,
        balance: Amount,
    },
    Balance {
        username: String,
        balance: Amount,
    },
    PinChanged {
        username: String,
    },
    Help,
    Logout {
        machine: String,
    },
}

impl Receipt {
    /// Returns `true` if the receipt ends the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Receipt::Logout { .. })
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receipt::Welcome {
                machine,
                username,
                balance,
            } => {
                writeln!(f, "---------------------------------------")?;
                writeln!(f, "{}, Welcome to the {}.", username.to_uppercase(), machine)?;
                writeln!(f, "Your current balance is {}.", balance)?;
                command::write_help(f)
            }
            Receipt::AccountCreated { username } => write!(
                f,
                "Account with username {} has been created successfully.",
                username
            ),
            Receipt::Deposited { username, balance } => write!(
                f,
                "{}, the deposit to your account was successful.\nYour new balance is {}.",
                username.to_uppercase(),
                balance
            ),
            Receipt::Withdrew {
                username,
                amount,
                balance,
            } => write!(
                f,
                "{}, Your withdrawal of {} has been concluded successfully.\nYour remaining balance is: {}",
                username.to_uppercase(),
                amount,
                balance
            ),
            Receipt::Balance { username, balance } => write!(
                f,
                "{}, Your account balance is {}.",
                username.to_uppercase(),
                balance
            ),
            Receipt::PinChanged { username } => write!(
                f,
                "{}, Your transaction pin has been changed successfully.",
                username.to_uppercase()
            ),
            Receipt::Help => command::write_help(f),
            Receipt::Logout { machine } => write!(f, "Exiting {} ....", machine),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_parse_deposit() {
        let request = Request::parse(CommandKind::Deposit, args("2000 philemon 1234")).unwrap();
        assert_eq!(
            request,
            Request::Deposit {
                amount: Amount::from(2000),
                username: "philemon".to_string(),
                pin: "1234".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_amounts() {
        assert!(matches!(
            Request::parse(CommandKind::Withdraw, args("abc philemon 1234")),
            Err(AtmError::ParseError(_))
        ));
        assert!(matches!(
            Request::parse(CommandKind::Deposit, args("-50 philemon 1234")),
            Err(AtmError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_change_pin_rejects_empty_new_pin() {
        let bound = vec!["philemon".to_string(), "1234".to_string(), String::new()];
        assert!(matches!(
            Request::parse(CommandKind::ChangePin, bound),
            Err(AtmError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_receipt_messages() {
        let receipt = Receipt::Withdrew {
            username: "philemon".to_string(),
            amount: Amount::from(500),
            balance: Amount::from(1500),
        };
        let text = receipt.to_string();
        assert!(text.starts_with("PHILEMON, Your withdrawal of 500.00 NGN"));
        assert!(text.ends_with("1500.00 NGN"));
        assert!(!receipt.is_terminal());
        assert!(Receipt::Logout {
            machine: "CLI ATM Machine".to_string()
        }
        .is_terminal());
    }
}
