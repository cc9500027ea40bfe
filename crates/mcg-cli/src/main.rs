//! Console frontend for the Morrowind character concept roller.

mod logging;

use std::io;
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing::info;

use mcg_core::{CharacterRoller, MenuExit, RollerConfig, run_menu};

#[derive(Parser)]
#[command(
    name = "mcg",
    about = "Roll a random character concept for Morrowind",
    version
)]
struct Cli {
    /// RNG seed for reproducible rolls (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Log roll details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = RollerConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mut roller = CharacterRoller::new(&config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match run_menu(&mut roller, stdin.lock(), &mut stdout) {
        Ok(MenuExit::Quit) => info!("quit"),
        Ok(MenuExit::EndOfInput) => info!("stdin closed"),
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            process::exit(1);
        }
    }
}
