use crate::cli::commands::apply::save_month;
use crate::cli::commands::forecast::render_grid;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::core::calendar::MonthGrid;
use crate::errors::{AppError, AppResult};
use crate::models::day_state::DayState;
use crate::store::StoreClient;
use crate::ui::messages::{error, warning};
use crate::utils::date;

/// Cycle (or set) a single day cell, recompute the counters and
/// persist the month snapshot.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark { month, day, state } = cmd {
        if !access::can_edit_forecast(cfg.role()) {
            return Err(AppError::NotPermitted(
                "only viewers edit their own forecast".to_string(),
            ));
        }

        let key = month.clone().unwrap_or_else(date::current_month_key);

        let store = StoreClient::new(&cfg.server_url)?;
        let identity = store.resolve_identity(&cfg.user_email)?.identity_key();

        let mut grid = match store.fetch_attendance(&identity, &key) {
            Ok(Some(record)) => MonthGrid::hydrate(&record)?,
            Ok(None) => MonthGrid::for_month(&key)?,
            Err(e) => {
                error("Error fetching preferences");
                return Err(e);
            }
        };

        match state {
            Some(code) => {
                let st = DayState::from_code(code)
                    .ok_or_else(|| AppError::InvalidDayState(code.clone()))?;
                grid.set_state(*day, st)?;
            }
            None => {
                if grid.cycle(*day)?.is_none() {
                    warning(format!(
                        "Day {} has no recorded state; use --state to set one.",
                        day
                    ));
                    return Ok(());
                }
            }
        }

        render_grid(&identity, &grid)?;
        save_month(&store, &identity, &grid)
    } else {
        Ok(())
    }
}
