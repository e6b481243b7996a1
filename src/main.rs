use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use domain::models::HookOutcome;
use services::runner::SystemRunner;

fn main() -> ExitCode {
    // Juju captures a hook's stderr into debug-log; stdout is reserved for
    // the hook report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match commands::handle_hook(&cli, &SystemRunner) {
        Ok(HookOutcome::Completed) => ExitCode::SUCCESS,
        // Non-zero exit puts the unit in error state and the controller
        // re-queues the hook, which is how a deferred event gets redelivered.
        Ok(HookOutcome::Deferred) => ExitCode::from(1),
        Err(err) => {
            tracing::error!("hook failed: {err:#}");
            ExitCode::from(2)
        }
    }
}
