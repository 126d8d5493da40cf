use std::io;
use std::process::ExitCode;

use log::error;
use stat_calc::cli::run;
use stat_calc::config::Config;

fn main() -> ExitCode {
    pretty_env_logger::init();

    let config = Config::default();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match run(&config, stdin.lock(), stdout.lock()) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
