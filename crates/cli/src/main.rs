use std::process::ExitCode;

use clap::Parser;

use stockroom_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    stockroom_observability::init(cli.default_log_directive());

    match stockroom_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Every unrecovered failure is logged before the non-zero exit.
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
