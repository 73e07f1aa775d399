#![forbid(unsafe_code)]

//! clar-compare — known vs. computed anionic Clar number summary.

use clap::Parser;

mod cli_app;

fn main() {
    let args = cli_app::Cli::parse();
    if let Err(e) = cli_app::run(&args) {
        eprintln!("clar-compare: {e}");
        std::process::exit(e.exit_code());
    }
}
