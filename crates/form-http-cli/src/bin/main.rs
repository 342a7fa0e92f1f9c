//! form-http command line

use anyhow::Result;
use clap::Parser;
use form_http_cli::cli::Cli;
use form_http_cli::command::{
    execute_command, load_settings, log_directive, EXIT_COMMAND_ERROR, EXIT_FAILED,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(&cli)
        .and_then(|settings| init_logging(&settings.log_level).map(|()| settings))
        .unwrap_or_else(|e| exit_with_error(&e));

    tracing::debug!("form-http v{}", env!("CARGO_PKG_VERSION"));
    for warning in &settings.env_warnings {
        tracing::warn!("{}", warning);
    }

    let outcome = execute_command(cli, &settings)
        .await
        .unwrap_or_else(|e| exit_with_error(&e));

    println!("{}", serde_json::to_string_pretty(&outcome.value)?);

    if outcome.failed {
        std::process::exit(EXIT_FAILED);
    }

    Ok(())
}

fn exit_with_error(err: &anyhow::Error) -> ! {
    eprintln!("Error: {:#}", err);
    std::process::exit(EXIT_COMMAND_ERROR);
}

fn init_logging(default_level: &str) -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_directive(default_level)?)
        .from_env()?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .compact()
        .init();

    Ok(())
}
