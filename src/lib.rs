//! # CLI ATM
//!
//! An interactive command-line ATM that simulates basic bank account
//! operations against an in-memory account directory: account creation,
//! pin change, balance inquiry, deposit and withdrawal.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: amounts use 2 decimal places via `rust_decimal`
//! - **Single authorization chokepoint**: every account operation goes through
//!   [`authenticate`]
//! - **Recoverable errors**: handler failures are reported and the loop re-prompts
//! - **Explicit state**: no globals; the [`Atm`] value is threaded through the
//!   [`Session`] state machine
//!
//! ## Example
//!
//! ```
//! use cli_atm::{Atm, Exit, Session, Startup};
//! use std::io::Cursor;
//!
//! let input = Cursor::new("deposit 2000 philemon 1234\nlogout\n");
//! let startup = Startup { pin: Some("1234".to_string()), command: Vec::new() };
//! let mut session = Session::new(Atm::default(), input, Vec::<u8>::new(), Vec::<u8>::new());
//! assert_eq!(session.run(startup).unwrap(), Exit::Logout);
//! ```

pub mod account;
pub mod amount;
pub mod atm;
pub mod auth;
pub mod command;
pub mod config;
pub mod directory;
pub mod error;
pub mod request;
pub mod session;

pub use account::Account;
pub use amount::Amount;
pub use atm::Atm;
pub use auth::authenticate;
pub use command::{CommandKind, REGISTRY};
pub use config::AtmConfig;
pub use directory::AccountDirectory;
pub use error::{ArgumentError, AtmError, AuthError, Result};
pub use request::{Receipt, Request};
pub use session::{Exit, Session, Startup};
