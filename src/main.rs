use arraylab::app::{handle_fatal_error, init_logging, AppConfig};
use arraylab::cli::{execute_command, Cli};
use clap::Parser;
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::new(cli.verbose, cli.config.clone()) {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e.into(), cli.verbose),
    };

    init_logging(&config);
    debug!("Output style: {:?}", config.settings.output);

    if let Err(e) = execute_command(cli.command, &config) {
        handle_fatal_error(e, cli.verbose);
    }
}
