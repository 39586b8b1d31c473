use clap::{Command, arg};

pub const CORRELATE_CMD: &str = "correlate";

pub fn create_correlate_cli() -> Command {
    Command::new(CORRELATE_CMD)
        .about("Pearson correlation between two function files of equal length")
        .arg_required_else_help(true)
        .arg(arg!(-x <FUN_X> "First function file (one value per line)").required(true))
        .arg(arg!(-y <FUN_Y> "Second function file (one value per line)").required(true))
}
