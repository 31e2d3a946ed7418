use std::process;

use clap::error::ErrorKind;
use colored::Colorize;

pub mod cli;
pub mod command_handlers;
pub mod filters;
pub mod models;
pub mod stream;
pub mod utils;

fn main() {
    let args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Bad arguments are a usage problem, not a failure.
            eprintln!("{}", e.to_string().trim_end().yellow());
            print_usage();
            process::exit(0);
        }
    };

    let logger = utils::get_logger(args.verbose);

    if let Err(e) = command_handlers::filter(&args, &logger) {
        if let Some(filter_err) = e.downcast_ref::<utils::FilterError>() {
            eprintln!("{}", format!("Error: {}", filter_err).yellow());
            print_usage();
            process::exit(0);
        }
        utils::error_context(&logger, "stream aborted", &*e);
        eprintln!("{}", format!("Error: {:#}", e).red());
        process::exit(1);
    }
}

fn print_usage() {
    // Help goes to stderr; stdout may be piped into a player.
    eprintln!("{}", cli::build_cli().render_long_help());
}
