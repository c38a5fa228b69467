use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{DEFAULT_EXPORT_FILE, export_roster_xlsx};
use crate::store::StoreClient;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let store = StoreClient::new(&cfg.server_url)?;
        let records = store.fetch_training()?;

        if records.is_empty() {
            warning("⚠️  The roster is empty; exporting a placeholder sheet.");
        }

        let target = file.as_deref().unwrap_or(DEFAULT_EXPORT_FILE);
        export_roster_xlsx(&records, Path::new(target), *force)?;
    }
    Ok(())
}
