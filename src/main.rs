use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod report;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::{
    client::ExplorerClient,
    report::{StderrRenderer, fetch_report},
    state::{App, AppConfig},
};

/// txlens - view a transaction from a block explorer API
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Transaction id to open
    txid: Option<String>,

    /// Explorer API base URL (overrides the config file)
    #[arg(short = 'u', long)]
    api_url: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Print the transaction as plain text and exit
    #[arg(long, requires = "txid")]
    plain: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Persist --api-url and --timeout to the config file
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    /// Applies command line overrides on top of the loaded configuration.
    fn resolve_config(&self, mut config: AppConfig) -> AppConfig {
        if let Some(api_url) = &self.api_url {
            config.api_url.clone_from(api_url);
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        config
    }
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(&logging::resolve_target(
        cli.plain,
        cli.log_file.as_deref(),
    ))?;

    let config = cli.resolve_config(AppConfig::load());
    if cli.save_config {
        config.save()?;
    }

    let client = ExplorerClient::new(config.api_url.as_str(), config.http_config())?;
    tracing::info!("Using explorer at {}", client.base_url());

    if cli.plain {
        let txid = cli.txid.as_deref().unwrap_or_default();
        let mut renderer = StderrRenderer;
        return match fetch_report(&client, txid, &mut renderer).await {
            Some(report) => {
                print!("{report}");
                Ok(())
            }
            None => Err(eyre!("Failed to load transaction '{txid}'")),
        };
    }

    let mut terminal = tui::init()?;
    let mut app = App::new(client, config.api_url.clone());
    let result = app.run(&mut terminal, cli.txid.as_deref()).await;
    tui::restore()?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_plain_requires_txid() {
        assert!(Cli::try_parse_from(["txlens", "--plain"]).is_err());
        let cli = Cli::try_parse_from(["txlens", "--plain", "abc"]).unwrap();
        assert!(cli.plain);
        assert_eq!(cli.txid.as_deref(), Some("abc"));
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let cli = Cli::try_parse_from(["txlens", "-u", "http://localhost:9000", "-t", "4"]).unwrap();
        let config = cli.resolve_config(AppConfig::default());
        assert_eq!(config.api_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 4);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let cli = Cli::try_parse_from(["txlens"]).unwrap();
        assert_eq!(cli.resolve_config(AppConfig::default()), AppConfig::default());
    }
}
