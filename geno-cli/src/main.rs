mod all;
mod common;
mod correlate;
mod mean;
mod overlap;

use anyhow::Result;
use clap::{Command, arg};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "geno";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Overlap, correlation and covered-mean calculations on segment (.s) and function (.f) files.")
        .subcommand_required(true)
        .arg(arg!(--json "Print results as a JSON object").global(true))
        .subcommand(overlap::cli::create_overlap_cli())
        .subcommand(correlate::cli::create_correlate_cli())
        .subcommand(mean::cli::create_mean_cli())
        .subcommand(all::cli::create_all_cli())
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // SEG x SEG
        //
        Some((overlap::cli::OVERLAP_CMD, matches)) => {
            overlap::handlers::run_overlap(matches)?;
        }

        //
        // FUN x FUN
        //
        Some((correlate::cli::CORRELATE_CMD, matches)) => {
            correlate::handlers::run_correlate(matches)?;
        }

        //
        // SEG x FUN
        //
        Some((mean::cli::MEAN_CMD, matches)) => {
            mean::handlers::run_mean(matches)?;
        }

        //
        // ALL THREE
        //
        Some((all::cli::ALL_CMD, matches)) => {
            all::handlers::run_all(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
