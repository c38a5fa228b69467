use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::errors::{AppError, AppResult};
use crate::models::training::TrainingRecord;
use crate::store::StoreClient;
use crate::ui::messages::{error, success};

/// Add a new training record. The store assigns the id; the returned
/// record is reported back to the user.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        titles,
        training_type,
        mode,
        planned,
        start,
        end,
        status,
    } = cmd
    {
        if !access::can_add(cfg.role()) {
            return Err(AppError::NotPermitted(
                "only admins and managers may add training records".to_string(),
            ));
        }

        let record = TrainingRecord {
            id: None,
            name: name.clone(),
            training_title: titles.clone(),
            training_type: training_type.clone(),
            mode: mode.clone(),
            planned_date: planned.clone(),
            start_date: start.clone(),
            end_date: end.clone(),
            status: status.clone(),
        };

        let store = StoreClient::new(&cfg.server_url)?;

        match store.create_training(&record) {
            Ok(created) => {
                let id = created.id.map(|i| i.to_string()).unwrap_or_default();
                success(format!("Training record created with id {}.", id));
            }
            Err(e) => {
                error("Failed to add employee. Please try again.");
                return Err(e);
            }
        }
    }
    Ok(())
}
