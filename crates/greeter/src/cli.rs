//! CLI - Command-line argument parsing
//!
//! With no arguments greeter prints the stock sequence.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(about = "Prints a greeting, a count, a sine, the hostname and a person", long_about = None)]
#[command(version = env!("GREETER_VERSION"))]
#[command(long_version = concat!(env!("GREETER_VERSION"), " (built ", env!("GREETER_BUILD_DATE"), ")"))]
pub struct Cli {
    /// Config file (overrides $GREETER_CONFIG and the XDG default)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the transcript as JSON instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
