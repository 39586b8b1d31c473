use clap::{Command, arg};

pub const OVERLAP_CMD: &str = "overlap";

pub fn create_overlap_cli() -> Command {
    Command::new(OVERLAP_CMD)
        .about("Total overlap length between two segment files")
        .arg_required_else_help(true)
        .arg(arg!(-a <SEG_A> "First segment file (start end per line)").required(true))
        .arg(arg!(-b <SEG_B> "Second segment file (start end per line)").required(true))
        .arg(arg!(--strict "Reject segment files that are unsorted or self-overlapping"))
}
