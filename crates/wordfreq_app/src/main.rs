//! `wordfreq`: count word frequencies in a text file and print the most and
//! least common words.
mod cli;
mod run;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use wordfreq_logging::wf_error;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    let logging = wordfreq_logging::initialize(args.log.into(), args.level());

    let stdout = io::stdout();
    match run::run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if args.errors_go_to_log(logging) {
                wf_error!("{err:#}");
            } else {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
