//! The machine: account directory, configuration and the current session.

use crate::auth::authenticate;
use crate::config::AtmConfig;
use crate::directory::AccountDirectory;
use crate::error::{AtmError, Result};
use crate::request::{Receipt, Request};
use log::{debug, info};

/// Application state threaded through the dispatcher.
///
/// Requests are executed one at a time; each runs to completion before the
/// next one starts.
#[derive(Debug, Clone)]
pub struct Atm {
    config: AtmConfig,
    directory: AccountDirectory,
    /// Username logged in through `start`, if any.
    session: Option<String>,
}

impl Atm {
    /// Creates a machine seeded from `config`.
    pub fn new(config: AtmConfig) -> Self {
        let directory = AccountDirectory::with_config(&config);
        Atm {
            config,
            directory,
            session: None,
        }
    }

    /// The configuration the machine was seeded from.
    pub fn config(&self) -> &AtmConfig {
        &self.config
    }

    /// Read access to every registered account.
    pub fn directory(&self) -> &AccountDirectory {
        &self.directory
    }

    /// The username logged in through `start`.
    pub fn current_user(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Executes a single request against the directory.
    pub fn execute(&mut self, request: Request) -> Result<Receipt> {
        match request {
            Request::Start { pin } => {
                let username = self.config.default_username.clone();
                let balance = authenticate(&mut self.directory, &username, &pin)?.balance();
                info!("Session started for {}", username);
                self.session = Some(username.clone());
                Ok(Receipt::Welcome {
                    machine: self.config.name.clone(),
                    username,
                    balance,
                })
            }
            Request::CreateAccount { username, pin } => {
                self.directory.create(&username, &pin)?;
                Ok(Receipt::AccountCreated { username })
            }
            Request::Deposit {
                amount,
                username,
                pin,
            } => {
                let balance =
                    authenticate(&mut self.directory, &username, &pin)?.deposit(amount)?;
                debug!("Deposited {} to {}, balance {}", amount, username, balance);
                Ok(Receipt::Deposited { username, balance })
            }
            Request::Withdraw {
                amount,
                username,
                pin,
            } => {
                let balance = authenticate(&mut self.directory, &username, &pin)?.withdraw(amount)?;
                debug!("Withdrew {} from {}, balance {}", amount, username, balance);
                Ok(Receipt::Withdrew {
                    username,
                    amount,
                    balance,
                })
            }
            Request::Balance { username, pin } => {
                let balance = authenticate(&mut self.directory, &username, &pin)?.balance();
                Ok(Receipt::Balance { username, balance })
            }
            Request::ChangePin {
                username,
                old_pin,
                new_pin,
            } => {
                let account = authenticate(&mut self.directory, &username, &old_pin)?;
                if account.verify_pin(&new_pin) {
                    return Err(AtmError::SamePin);
                }
                account.set_pin(new_pin);
                debug!("Changed pin for {}", username);
                Ok(Receipt::PinChanged { username })
            }
            Request::Logout => {
                if let Some(user) = self.session.take() {
                    info!("Session ended for {}", user);
                }
                Ok(Receipt::Logout {
                    machine: self.config.name.clone(),
                })
            }
            Request::Help => Ok(Receipt::Help),
        }
    }
}

impl Default for Atm {
    fn default() -> Self {
        Self::new(AtmConfig::default())
    }
}
