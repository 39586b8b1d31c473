use clap::{Command, arg};

pub const MEAN_CMD: &str = "mean";

pub fn create_mean_cli() -> Command {
    Command::new(MEAN_CMD)
        .about("Mean of a function file over the positions covered by a segment file")
        .arg_required_else_help(true)
        .arg(arg!(-s <SEGS> "Segment file (start end per line)").required(true))
        .arg(arg!(-f <FUN> "Function file (one value per line, line index is the position)").required(true))
        .arg(arg!(--strict "Reject a segment file that is unsorted or self-overlapping"))
}
