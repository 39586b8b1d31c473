use clap::{Arg, Command, arg};

pub const ALL_CMD: &str = "all";

pub fn create_all_cli() -> Command {
    Command::new(ALL_CMD)
        .about("Run overlap, correlation and covered mean on two segment and two function files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("seg-a")
                .long("seg-a")
                .required(true)
                .help("First segment file; also the segments for the covered mean"),
        )
        .arg(
            Arg::new("seg-b")
                .long("seg-b")
                .required(true)
                .help("Second segment file"),
        )
        .arg(
            Arg::new("fun-a")
                .long("fun-a")
                .required(true)
                .help("First function file"),
        )
        .arg(
            Arg::new("fun-b")
                .long("fun-b")
                .required(true)
                .help("Second function file; also the values for the covered mean"),
        )
        .arg(arg!(--strict "Reject segment files that are unsorted or self-overlapping"))
}
