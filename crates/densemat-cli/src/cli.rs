use clap::{Arg, ArgAction, Command, ValueHint};
use std::path::PathBuf;

use crate::config::Operation;

pub fn build_cli() -> Command {
    Command::new("densemat")
        .version(clap::crate_version!())
        .about("Dense matrix arithmetic demonstration")
        .arg(
            Arg::new("config")
                .help("Path to an optional JSON demo configuration file")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("op")
                .long("op")
                .help(
                    "Operation to apply to A and B: add, subtract (sub), multiply (mul) \
                     or transpose (t). May be repeated. \
                     Overrides the operations listed in the configuration file.",
                )
                .value_parser(|s: &str| s.parse::<Operation>())
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Number of decimals to print for every element")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("print_config")
                .long("print-config")
                .help("Print the default configuration as JSON and exit")
                .action(ArgAction::SetTrue),
        )
}
