//! The read-eval-prompt loop.
//!
//! A session is an explicit state machine:
//!
//! ```text
//! AwaitingLogin -> AwaitingCommand -> ValidatingArity -> Executing -> AwaitingCommand
//!                                                                  \-> Terminated
//! ```
//!
//! Every error raised by a handler is reported on the error stream and the
//! loop goes back to `AwaitingCommand`. Only `logout` or the end of the input
//! stream terminate the session. While arguments are being re-entered, a
//! line naming `logout` or `help` runs that command instead.

use crate::atm::Atm;
use crate::command::CommandKind;
use crate::error::Result;
use crate::request::Request;
use log::{debug, warn};
use std::io::{BufRead, Write};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user ran `logout`.
    Logout,
    /// The input stream closed or could not be read.
    EndOfInput,
}

/// Arguments supplied before the interactive loop starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Startup {
    /// Pin of the default account; skips the login prompt when it matches.
    pub pin: Option<String>,
    /// A first command line, run right after login.
    pub command: Vec<String>,
}

#[derive(Debug)]
enum State {
    AwaitingLogin,
    AwaitingCommand,
    ValidatingArity(CommandKind),
    Executing(CommandKind, Vec<String>),
    Terminated(Exit),
}

/// One run of the dispatcher over an input stream.
pub struct Session<R, W, E> {
    atm: Atm,
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Creates a session over the given input and output streams.
    pub fn new(atm: Atm, input: R, out: W, err: E) -> Self {
        Session {
            atm,
            input,
            out,
            err,
        }
    }

    /// The machine driven by this session.
    pub fn atm(&self) -> &Atm {
        &self.atm
    }

    /// Consumes the session, returning the machine and both output streams.
    pub fn into_parts(self) -> (Atm, W, E) {
        (self.atm, self.out, self.err)
    }

    /// Runs the loop until logout or end of input.
    ///
    /// Only failures to write output are returned as errors.
    pub fn run(&mut self, startup: Startup) -> Result<Exit> {
        let mut pending = Some(startup.command).filter(|tokens| !tokens.is_empty());

        let mut state = match startup.pin {
            Some(pin) => self.login(pin)?,
            None => State::AwaitingLogin,
        };

        loop {
            debug!("Dispatcher state: {:?}", state);
            state = match state {
                State::AwaitingLogin => {
                    writeln!(
                        self.out,
                        "Enter the pin for the {} account, e.g {}",
                        self.atm.config().default_username,
                        self.atm.config().default_pin
                    )?;
                    match self.read_tokens() {
                        Some(tokens) => self.login(tokens.join(" "))?,
                        None => State::Terminated(Exit::EndOfInput),
                    }
                }
                State::AwaitingCommand => match pending.take() {
                    Some(tokens) => self.resolve(tokens)?,
                    None => {
                        self.prompt()?;
                        match self.read_tokens() {
                            Some(tokens) => self.resolve(tokens)?,
                            None => State::Terminated(Exit::EndOfInput),
                        }
                    }
                },
                State::ValidatingArity(kind) => {
                    writeln!(self.out, "{}", kind.usage())?;
                    match self.read_tokens() {
                        Some(tokens) if leaves_argument_entry(&tokens) => self.resolve(tokens)?,
                        Some(tokens) => match kind.bind(&tokens) {
                            Ok(args) => State::Executing(kind, args),
                            Err(e) => {
                                writeln!(self.err, "{}", e)?;
                                State::ValidatingArity(kind)
                            }
                        },
                        None => State::Terminated(Exit::EndOfInput),
                    }
                }
                State::Executing(kind, args) => self.execute(kind, args)?,
                State::Terminated(exit) => {
                    if exit == Exit::EndOfInput {
                        // Implicit logout
                        let receipt = self.atm.execute(Request::Logout)?;
                        writeln!(self.out, "{}", receipt)?;
                    }
                    self.out.flush()?;
                    self.err.flush()?;
                    return Ok(exit);
                }
            };
        }
    }

    /// Attempts to log in to the default account with `pin`.
    fn login(&mut self, pin: String) -> Result<State> {
        match self.atm.execute(Request::Start { pin }) {
            Ok(receipt) => {
                writeln!(self.out, "{}", receipt)?;
                Ok(State::AwaitingCommand)
            }
            Err(e) => {
                writeln!(self.err, "{}", e)?;
                Ok(State::AwaitingLogin)
            }
        }
    }

    fn prompt(&mut self) -> Result<()> {
        writeln!(self.out, "---------------------------------------")?;
        writeln!(
            self.out,
            "Do you wish to perform other transactions? For help enter: {} ({})",
            CommandKind::Help,
            CommandKind::Help.index()
        )?;
        writeln!(
            self.out,
            "If you don't wish to continue, exit the app with: {} ({})",
            CommandKind::Logout,
            CommandKind::Logout.index()
        )?;
        Ok(())
    }

    /// Resolves the first token to a command and binds the rest as arguments.
    fn resolve(&mut self, tokens: Vec<String>) -> Result<State> {
        let Some((head, rest)) = tokens.split_first() else {
            return Ok(State::AwaitingCommand);
        };

        let Some(kind) = CommandKind::resolve(head) else {
            writeln!(
                self.err,
                "unknown command {:?}. Enter a valid command, or {} ({}) to list them",
                head,
                CommandKind::Help,
                CommandKind::Help.index()
            )?;
            return Ok(State::AwaitingCommand);
        };

        if rest.is_empty() && kind.arity() > 0 {
            return Ok(State::ValidatingArity(kind));
        }

        match kind.bind(rest) {
            Ok(args) => Ok(State::Executing(kind, args)),
            Err(e) => {
                writeln!(self.err, "{}", e)?;
                if kind.arity() == 0 {
                    writeln!(self.out, "{}", kind.usage())?;
                    Ok(State::AwaitingCommand)
                } else {
                    Ok(State::ValidatingArity(kind))
                }
            }
        }
    }

    fn execute(&mut self, kind: CommandKind, args: Vec<String>) -> Result<State> {
        let outcome = Request::parse(kind, args).and_then(|request| self.atm.execute(request));

        match outcome {
            Ok(receipt) if receipt.is_terminal() => {
                writeln!(self.out, "{}", receipt)?;
                Ok(State::Terminated(Exit::Logout))
            }
            Ok(receipt) => {
                writeln!(self.out, "{}", receipt)?;
                Ok(State::AwaitingCommand)
            }
            Err(e) => {
                debug!("{} failed: {}", kind, e);
                writeln!(self.err, "{}", e)?;
                Ok(State::AwaitingCommand)
            }
        }
    }

    /// Reads the next non-blank line and splits it on whitespace.
    ///
    /// Returns `None` at end of input or when the stream cannot be read.
    fn read_tokens(&mut self) -> Option<Vec<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let tokens: Vec<String> =
                        line.split_whitespace().map(str::to_string).collect();
                    if !tokens.is_empty() {
                        return Some(tokens);
                    }
                }
                Err(e) => {
                    warn!("error reading standard input: {}", e);
                    return None;
                }
            }
        }
    }
}

/// Whether an argument line is really `logout` or `help` typed by name.
///
/// Registry indices are not matched here, since a lone number is a valid
/// argument value.
fn leaves_argument_entry(tokens: &[String]) -> bool {
    match tokens {
        [only] if only.parse::<usize>().is_err() => {
            CommandKind::resolve(only).is_some_and(|kind| kind.arity() == 0)
        }
        _ => false,
    }
}
