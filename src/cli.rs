use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

use crate::filters::MAX_POLES;
use crate::models::OutputMode;

const EXAMPLES: &str = "\
Takes its input stream via redirection, so pass it some data like this:
    brownian-noise 0.7 3 print < /dev/urandom
    brownian-noise 0.95 3 < /dev/urandom | aplay -f cd
or let it make its own white noise:
    brownian-noise --noise 0.95 3 | aplay -f cd";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub response: f32,
    pub poles: usize,
    pub mode: OutputMode,
    pub noise: bool,
    pub input: Option<PathBuf>,
    pub samples: Option<u64>,
    pub verbose: bool,
}

pub fn build_cli() -> Command {
    Command::new("brownian-noise")
        .about("A command line number stream (audio) filter.")
        .allow_negative_numbers(true)
        .arg(
            Arg::new("response")
                .value_name("RESPONSE")
                .required(true)
                .value_parser(value_parser!(f32))
                .help("Filter 'memory' between 0 and 1; higher values give a lower cutoff"),
        )
        .arg(
            Arg::new("poles")
                .value_name("N_POLES")
                .required(true)
                .value_parser(value_parser!(u64).range(1..=MAX_POLES as u64))
                .help("Number of poles (filter stages)"),
        )
        .arg(
            Arg::new("option")
                .value_name("OPTION")
                .num_args(1..)
                .allow_hyphen_values(true)
                .help("Any value prints the output to the terminal as a vertical stream"),
        )
        .arg(
            Arg::new("noise")
                .long("noise")
                .action(ArgAction::SetTrue)
                .conflicts_with("input")
                .help("Filter built-in white noise instead of standard input"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Read samples from FILE instead of standard input"),
        )
        .arg(
            Arg::new("samples")
                .short('n')
                .long("samples")
                .value_name("N")
                .value_parser(value_parser!(u64))
                .help("Stop after N samples"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging on standard error"),
        )
        .after_help(EXAMPLES)
}

pub fn parse_args<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(args)?;

    // Required arguments are guaranteed present by clap.
    let response = matches.get_one::<f32>("response").copied().unwrap_or_default();
    let poles = matches.get_one::<u64>("poles").copied().unwrap_or(1) as usize;
    let mode = if matches.contains_id("option") {
        OutputMode::Visualize
    } else {
        OutputMode::Raw
    };

    Ok(CliArgs {
        response,
        poles,
        mode,
        noise: matches.get_flag("noise"),
        input: matches.get_one::<PathBuf>("input").cloned(),
        samples: matches.get_one::<u64>("samples").copied(),
        verbose: matches.get_flag("verbose"),
    })
}
