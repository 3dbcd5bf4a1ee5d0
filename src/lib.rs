use anyhow::Result;
use tracing::debug;

use compte_api::types::BaseUrl;

pub mod cli;
pub mod commands;
pub mod services;
pub mod settings;
pub mod ux;

use cli::{Cli, Commands};
use services::{ClientFactory, ComptesService, DefaultClientFactory};
use settings::{FileSettingsStore, JsonFileSettingsStore, LogOutput, SettingsStore};

pub struct AppCtx {
    pub settings_store: Box<dyn SettingsStore>,
    pub client_factory: Box<dyn ClientFactory>,
    /// `--base-url` given on the command line
    pub base_url: Option<BaseUrl>,
}

impl AppCtx {
    /// Service bound to the backend chosen by the flag or the stored settings.
    pub fn service(&self) -> Result<ComptesService> {
        let settings = self.settings_store.load()?;
        let base_url = settings.resolve_base_url(self.base_url.as_ref())?;
        debug!("Using backend at {}", base_url);
        Ok(ComptesService::new(self.client_factory.new_client(base_url)))
    }
}

/// The screen owns the terminal, so it only gets the log file.
pub fn log_output(cli: &Cli) -> LogOutput {
    match cli.command {
        None | Some(Commands::Ui) => LogOutput::FileOnly,
        Some(_) => LogOutput::Console,
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let settings_store: Box<dyn SettingsStore> = match cli.settings {
        Some(path) => Box::new(JsonFileSettingsStore::new(path)),
        None => Box::new(FileSettingsStore::new()?),
    };
    let ctx = AppCtx {
        settings_store,
        client_factory: Box::new(DefaultClientFactory),
        base_url: cli.base_url,
    };

    commands::handle(cli.command, &ctx).await
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_log_output() {
        assert_eq!(log_output(&Cli::parse_from(["comptes"])), LogOutput::FileOnly);
        assert_eq!(log_output(&Cli::parse_from(["comptes", "ui"])), LogOutput::FileOnly);
        assert_eq!(log_output(&Cli::parse_from(["comptes", "list"])), LogOutput::Console);
    }
}
