// cobra-scaffold - Cobra application generator
// Main CLI entry point

use clap::Parser;
use std::io;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cobra_scaffold::cli::{Cli, CliDispatcher};
use cobra_scaffold::utils::error::UserError;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.global.verbose {
        "cobra_scaffold=debug"
    } else {
        "cobra_scaffold=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(err) = CliDispatcher::execute(cli) {
        let user_error = UserError::from_scaffold_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
