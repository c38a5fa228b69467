use crate::cli::commands::forecast::render_grid;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::core::calendar::MonthGrid;
use crate::errors::{AppError, AppResult};
use crate::models::preference::WfoPreference;
use crate::store::StoreClient;
use crate::ui::messages::{error, success};
use crate::utils::date;

/// Apply a weekday office-preference pattern to the whole month and
/// persist the snapshot (create-or-update). A full overwrite: prior
/// manual cell edits for the month are discarded.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Apply {
        month,
        days,
        dry_run,
    } = cmd
    {
        if !access::can_edit_forecast(cfg.role()) {
            return Err(AppError::NotPermitted(
                "only viewers edit their own forecast".to_string(),
            ));
        }

        let key = month.clone().unwrap_or_else(date::current_month_key);
        let prefs = WfoPreference::from_day_list(days)?;

        let mut grid = MonthGrid::for_month(&key)?;
        grid.apply_preferences(&prefs);

        // a dry run never talks to the store
        if *dry_run {
            render_grid(&cfg.user_email, &grid)?;
            println!("(dry run: nothing saved)");
            return Ok(());
        }

        let store = StoreClient::new(&cfg.server_url)?;
        let identity = store.resolve_identity(&cfg.user_email)?.identity_key();

        render_grid(&identity, &grid)?;
        save_month(&store, &identity, &grid)
    } else {
        Ok(())
    }
}

/// Persist one month snapshot: look up the existing record for the
/// identity+month pair, then update by its id or create a new one.
/// Each phase reports its own failure message; a failed call leaves
/// the in-memory state alone.
pub fn save_month(store: &StoreClient, identity: &str, grid: &MonthGrid) -> AppResult<()> {
    let record = grid.to_record(identity);

    let existing = match store.fetch_attendance(&record.name, &record.month) {
        Ok(existing) => existing,
        Err(e) => {
            error("Error fetching existing data");
            return Err(e);
        }
    };

    match existing {
        Some(prev) => {
            let id = prev
                .id
                .ok_or_else(|| AppError::Store("existing record without id".to_string()))?;
            match store.update_attendance(id, &record) {
                Ok(_) => {
                    success(format!("Attendance updated successfully for {}", identity));
                    Ok(())
                }
                Err(e) => {
                    error("Error updating preferences");
                    Err(e)
                }
            }
        }
        None => match store.create_attendance(&record) {
            Ok(_) => {
                success(format!("Attendance saved successfully for {}", identity));
                Ok(())
            }
            Err(e) => {
                error("Error saving preferences");
                Err(e)
            }
        },
    }
}
