//! CLI ATM Machine
//!
//! An interactive ATM that reads commands from standard input.
//!
//! # Usage
//!
//! ```bash
//! cargo run                      # prompts for the default account's pin
//! cargo run -- --pin 1234        # logs in straight away
//! cargo run -- --pin 1234 deposit --amount=2000 --username=philemon --pin=1234
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use clap::Parser;
use cli_atm::{Atm, AtmConfig, Session, Startup};
use log::debug;
use std::io;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "cli-atm", version, about = "A CLI ATM Machine with basic bank/ATM features.", long_about = None)]
struct Cli {
    /// Transaction pin of the default account; skips the login prompt.
    #[arg(long)]
    pin: Option<String>,

    /// First command to run after login, e.g. `deposit --amount=2000 --username=philemon --pin=1234`.
    #[arg(trailing_var_arg = true, value_name = "COMMAND")]
    command: Vec<String>,
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> cli_atm::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let mut session = Session::new(
        Atm::new(AtmConfig::default()),
        stdin.lock(),
        stdout.lock(),
        stderr.lock(),
    );
    let exit = session.run(Startup {
        pin: cli.pin,
        command: cli.command,
    })?;
    debug!(
        "Session ended: {:?}, accounts: {:?}",
        exit,
        session.atm().directory().usernames()
    );

    Ok(())
}
