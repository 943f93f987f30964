mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::{error::ErrorKind, ArgAction, Parser};

use commands::Commands;

#[derive(Parser)]
#[command(
    name = "treesum",
    about = "Content fingerprints for files and folder trees",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log progress to stderr (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(commands::EXIT_USAGE),
            }
        }
    };

    logging::init(cli.verbose);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("treesum: {e:#}");
            process::exit(commands::exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    commands::run(cli)
}
