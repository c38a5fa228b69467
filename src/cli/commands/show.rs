use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::{Roster, record_details};
use crate::errors::{AppError, AppResult};
use crate::store::StoreClient;
use crate::ui::messages::success;

/// Print the human-readable details block for one record, the CLI
/// rendition of the row-level copy operation. No persistence effect.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let store = StoreClient::new(&cfg.server_url)?;
        let roster = Roster::new(store.fetch_training()?);

        let record = roster.find(*id).ok_or(AppError::RecordNotFound(*id))?;

        println!("{}", record_details(record));
        success(format!("Details of {} ready to copy.", record.name));
    }
    Ok(())
}
