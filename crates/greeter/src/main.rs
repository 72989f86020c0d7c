//! Greeter - prints the greeting sequence and exits

use anyhow::{Context, Result};
use clap::Parser;
use greeter::cli::Cli;
use greeter::{errors, logging};
use greeter_common::{Greeter, GreeterConfig};
use std::io::{self, Write};
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match run(&cli) {
        Ok(()) => errors::EXIT_SUCCESS,
        Err(e) => {
            eprintln!("greeter: {:#}", e);
            errors::exit_code_for(&e)
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<()> {
    debug!("greeter v{} starting", env!("GREETER_VERSION"));

    let config = GreeterConfig::load(cli.config.as_deref()).context("loading config")?;
    let greeter = Greeter::new(config);

    if cli.json {
        let transcript = greeter.run(&mut io::sink())?;
        let json = transcript.to_json()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    greeter.run(&mut out)?;
    Ok(())
}
