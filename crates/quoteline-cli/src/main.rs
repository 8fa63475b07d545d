mod cli;
mod error;
mod output;

use clap::Parser;
use std::process::ExitCode;

use quoteline_core::QuoteClient;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let client = QuoteClient::with_config(cli.client_config())?;
    let symbols = cli.sorted_symbols();

    let batch = client.get_quotes(&symbols).await?;

    let stdout = std::io::stdout();
    output::render(&mut stdout.lock(), &batch, cli.format, cli.pretty)?;

    Ok(ExitCode::SUCCESS)
}
