use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::core::roster::Roster;
use crate::errors::{AppError, AppResult};
use crate::models::identity::Role;
use crate::store::StoreClient;
use crate::ui::messages::{error, success};

/// Edit one training record by id: fetch the roster, apply the field
/// changes to a copy, PUT the full body, and report the store echo.
/// On failure the cached set is untouched and no retry is attempted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
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
        let store = StoreClient::new(&cfg.server_url)?;
        let mut roster = Roster::new(store.fetch_training()?);

        let record = roster.find(*id).ok_or(AppError::RecordNotFound(*id))?;

        // Viewers may only edit rows carrying their own display name.
        let role = cfg.role();
        if role == Role::Viewer {
            let user = store.resolve_identity(&cfg.user_email)?;
            if !access::can_edit(role, &record.name, &user.name) {
                return Err(AppError::NotPermitted(format!(
                    "viewers may only edit their own rows, not '{}'",
                    record.name
                )));
            }
        }

        let mut updated = record.clone();
        if let Some(v) = name {
            updated.name = v.clone();
        }
        if let Some(v) = titles {
            updated.training_title = v.clone();
        }
        if let Some(v) = training_type {
            updated.training_type = v.clone();
        }
        if let Some(v) = mode {
            updated.mode = v.clone();
        }
        if let Some(v) = planned {
            updated.planned_date = v.clone();
        }
        if let Some(v) = start {
            updated.start_date = v.clone();
        }
        if let Some(v) = end {
            updated.end_date = v.clone();
        }
        if let Some(v) = status {
            updated.status = v.clone();
        }

        match store.update_training(*id, &updated) {
            Ok(echo) => {
                roster.apply_update(echo);
                success(format!("Training record {} updated.", id));
            }
            Err(e) => {
                error("Failed to update employee. Please try again.");
                return Err(e);
            }
        }
    }
    Ok(())
}
