use std::io;
use std::process::ExitCode;

use clap::Parser;
use tokio::runtime::Handle;

use scripture_reader::api::BibleClient;
use scripture_reader::cli::Cli;
use scripture_reader::commands;
use scripture_reader::config::Config;
use scripture_reader::logging::{default_log_path, init_tracing, LogTarget};
use scripture_reader::query::QueryClient;
use scripture_reader::selection::SelectionStore;
use scripture_reader::ui::{self, App};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let target = match (&cli.command, default_log_path()) {
        (None, Some(path)) => LogTarget::File(path),
        _ => LogTarget::Stderr,
    };
    init_tracing(target);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Exiting with error");
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let api = BibleClient::new(config.api.clone())?;
    let queries = QueryClient::from_config(api, &config.cache);

    match cli.command {
        Some(command) => {
            let mut stdout = io::stdout().lock();
            commands::execute(command, &queries, &config, &mut stdout).await
        }
        None => {
            tracing::info!(base_url = %config.api.base_url, "Starting reader");
            let app = App::new(SelectionStore::new(), &config.ui)?;
            let runtime = Handle::current();
            tokio::task::spawn_blocking(move || ui::run(app, queries, runtime)).await??;
            Ok(())
        }
    }
}

/// Config file, then `BIBLE_API_KEY`, then command-line flags.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(key) = cli.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
        config.api.api_key = Some(key.clone());
    }
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    config.validate()?;

    tracing::debug!(
        base_url = %config.api.base_url,
        credential = config.api.is_configured(),
        "Configuration loaded"
    );
    Ok(config)
}
