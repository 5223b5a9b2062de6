//! Command registry: the fixed, ordered set of commands the machine accepts.
//!
//! A command is identified by its registry index, its name, or one of its
//! aliases. Arguments are bound either positionally, in parameter order, or
//! as `--name=value` / `--name value` flags in any order. Flag lines are
//! parsed with `clap`, one subcommand per command that takes arguments.

use crate::error::ArgumentError;
use clap::{Parser, Subcommand};
use std::fmt::{self, Write as _};
use std::iter;

/// Every command kind, in registry (index) order.
pub const REGISTRY: [CommandKind; 8] = [
    CommandKind::Start,
    CommandKind::CreateAccount,
    CommandKind::Deposit,
    CommandKind::Withdraw,
    CommandKind::Balance,
    CommandKind::ChangePin,
    CommandKind::Logout,
    CommandKind::Help,
];

/// A command the dispatcher can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Log in to the default account.
    Start,
    /// Open a new account.
    CreateAccount,
    /// Credit an account.
    Deposit,
    /// Debit an account.
    Withdraw,
    /// Report an account's balance.
    Balance,
    /// Replace an account's transaction pin.
    ChangePin,
    /// Shut the machine down.
    Logout,
    /// List the available commands.
    Help,
}

impl CommandKind {
    /// Position of the command in the registry.
    pub fn index(self) -> usize {
        match self {
            CommandKind::Start => 0,
            CommandKind::CreateAccount => 1,
            CommandKind::Deposit => 2,
            CommandKind::Withdraw => 3,
            CommandKind::Balance => 4,
            CommandKind::ChangePin => 5,
            CommandKind::Logout => 6,
            CommandKind::Help => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Start => "start",
            CommandKind::CreateAccount => "createaccount",
            CommandKind::Deposit => "deposit",
            CommandKind::Withdraw => "withdraw",
            CommandKind::Balance => "balance",
            CommandKind::ChangePin => "changepin",
            CommandKind::Logout => "logout",
            CommandKind::Help => "help",
        }
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            CommandKind::Start => &["s", "login"],
            CommandKind::CreateAccount => &["ca"],
            CommandKind::Deposit => &["d"],
            CommandKind::Withdraw => &["w"],
            CommandKind::Balance => &["b"],
            CommandKind::ChangePin => &["cp"],
            CommandKind::Logout => &["exit", "cancel"],
            CommandKind::Help => &["h"],
        }
    }

    /// Parameter names, in positional order.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            CommandKind::Start => &["pin"],
            CommandKind::CreateAccount | CommandKind::Balance => &["username", "pin"],
            CommandKind::Deposit | CommandKind::Withdraw => &["amount", "username", "pin"],
            CommandKind::ChangePin => &["username", "pin", "newpin"],
            CommandKind::Logout | CommandKind::Help => &[],
        }
    }

    /// Number of arguments the command requires.
    pub fn arity(self) -> usize {
        self.params().len()
    }

    /// One-line description shown in the help listing.
    pub fn description(self) -> &'static str {
        match self {
            CommandKind::Start => "To log in to the default account with its pin.",
            CommandKind::CreateAccount => {
                "To create a bank account. If the account already exists, nothing is changed."
            }
            CommandKind::Deposit => "To deposit an amount into an account.",
            CommandKind::Withdraw => "To withdraw an amount from an account.",
            CommandKind::Balance => "To check an account's balance.",
            CommandKind::ChangePin => "To change an account's transaction pin.",
            CommandKind::Logout => "To shut down the program.",
            CommandKind::Help => "To print this help message.",
        }
    }

    fn example(self) -> &'static [&'static str] {
        match self {
            CommandKind::Start => &["1234"],
            CommandKind::CreateAccount => &["alice", "0000"],
            CommandKind::Deposit | CommandKind::Withdraw => &["2000", "philemon", "1234"],
            CommandKind::Balance => &["philemon", "1234"],
            CommandKind::ChangePin => &["philemon", "1234", "4567"],
            CommandKind::Logout | CommandKind::Help => &[],
        }
    }

    /// Parameter synopsis, e.g. `deposit <amount> <username> <pin>`.
    pub fn synopsis(self) -> String {
        let mut out = self.name().to_string();
        for param in self.params() {
            let _ = write!(out, " <{}>", param);
        }
        out
    }

    /// Usage text shown when arguments do not match the command.
    pub fn usage(self) -> String {
        let mut out = format!("Usage: {}", self.synopsis());
        if self.arity() == 0 {
            return out;
        }

        let positional = self.example().join(" ");
        let flags = self
            .params()
            .iter()
            .zip(self.example())
            .map(|(param, value)| format!("--{}={}", param, value))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(
            out,
            "\nEnter the {} e.g {}  or  {} {}",
            self.params().join(", "),
            positional,
            self.name(),
            flags
        );
        out
    }

    /// Resolves a command token: a registry index, a name or an alias.
    ///
    /// Names and aliases are matched case-insensitively.
    pub fn resolve(token: &str) -> Option<CommandKind> {
        if let Ok(index) = token.parse::<usize>() {
            return REGISTRY.get(index).copied();
        }

        let token = token.to_ascii_lowercase();
        REGISTRY
            .iter()
            .copied()
            .find(|kind| kind.name() == token || kind.aliases().contains(&token.as_str()))
    }

    /// Binds raw argument tokens to the command's parameters.
    ///
    /// Returns the values in parameter order. Tokens starting with `--` are
    /// parsed as flags by `FlagLine`; otherwise the token count must match
    /// the command's arity.
    pub fn bind(self, tokens: &[String]) -> Result<Vec<String>, ArgumentError> {
        if self.arity() > 0 && tokens.iter().any(|t| t.starts_with("--")) {
            return FlagLine::bind(self, tokens);
        }

        if tokens.len() != self.arity() {
            return Err(ArgumentError::WrongCount {
                expected: self.arity(),
                got: tokens.len(),
            });
        }
        Ok(tokens.to_vec())
    }
}

/// A REPL line in flag style, e.g. `deposit --amount=2000 --username=philemon --pin=1234`.
#[derive(Parser, Debug)]
#[command(name = "cli-atm", disable_help_subcommand = true)]
struct FlagLine {
    #[command(subcommand)]
    command: FlagCommand,
}

#[derive(Subcommand, Debug)]
enum FlagCommand {
    Start {
        #[arg(long)]
        pin: String,
    },
    #[command(name = "createaccount")]
    CreateAccount {
        #[arg(long)]
        username: String,
        #[arg(long)]
        pin: String,
    },
    Deposit {
        #[arg(long)]
        amount: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        pin: String,
    },
    Withdraw {
        #[arg(long)]
        amount: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        pin: String,
    },
    Balance {
        #[arg(long)]
        username: String,
        #[arg(long)]
        pin: String,
    },
    #[command(name = "changepin")]
    ChangePin {
        #[arg(long)]
        username: String,
        #[arg(long)]
        pin: String,
        #[arg(long)]
        newpin: String,
    },
}

impl FlagLine {
    fn bind(kind: CommandKind, tokens: &[String]) -> Result<Vec<String>, ArgumentError> {
        let argv = iter::once("cli-atm")
            .chain(iter::once(kind.name()))
            .chain(tokens.iter().map(String::as_str));
        let line = FlagLine::try_parse_from(argv)
            .map_err(|e| ArgumentError::Flags(e.to_string().trim_end().to_string()))?;

        Ok(match line.command {
            FlagCommand::Start { pin } => vec![pin],
            FlagCommand::CreateAccount { username, pin }
            | FlagCommand::Balance { username, pin } => vec![username, pin],
            FlagCommand::Deposit {
                amount,
                username,
                pin,
            }
            | FlagCommand::Withdraw {
                amount,
                username,
                pin,
            } => vec![amount, username, pin],
            FlagCommand::ChangePin {
                username,
                pin,
                newpin,
            } => vec![username, pin, newpin],
        })
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Writes the help listing for every registered command.
pub fn write_help(f: &mut impl fmt::Write) -> fmt::Result {
    writeln!(f, "---------------------------------------")?;
    writeln!(f, "Available Operations")?;
    writeln!(f, "---------------------------------------")?;
    writeln!(f, "Command - Usage")?;
    for kind in REGISTRY {
        writeln!(
            f,
            "   {}    - {} ({}): {}",
            kind.index(),
            kind.synopsis(),
            kind.aliases().join(", "),
            kind.description()
        )?;
    }
    write!(
        f,
        "Arguments can also be given as flags, e.g deposit --amount=2000 --username=philemon --pin=1234"
    )
}
