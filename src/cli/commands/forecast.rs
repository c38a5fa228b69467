use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::core::calendar::MonthGrid;
use crate::errors::AppResult;
use crate::store::StoreClient;
use crate::ui::messages::{error, header, info};
use crate::utils::date;
use crate::utils::formatting::{describe_state, pad_left, pad_right};

/// Show the saved forecast calendar for one month: resolve the
/// identity, fetch the month snapshot, hydrate and render. Stored
/// counters are displayed verbatim, not recomputed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Forecast { month } = cmd {
        // Admins and managers get the original placeholder instead of
        // the editable calendar.
        if !access::can_edit_forecast(cfg.role()) {
            println!("No data available");
            return Ok(());
        }

        let key = month.clone().unwrap_or_else(date::current_month_key);
        let empty = MonthGrid::for_month(&key)?;

        let store = StoreClient::new(&cfg.server_url)?;
        let identity = store.resolve_identity(&cfg.user_email)?.identity_key();

        let grid = match store.fetch_attendance(&identity, &key) {
            Ok(Some(record)) => MonthGrid::hydrate(&record)?,
            Ok(None) => {
                info(format!("No saved forecast for {} yet.", key));
                empty
            }
            Err(e) => {
                error("Error fetching preferences");
                return Err(e);
            }
        };

        render_grid(&identity, &grid)?;
    }
    Ok(())
}

/// Render the month grid: one line per day with its weekday label and
/// state, then the three counters.
pub fn render_grid(identity: &str, grid: &MonthGrid) -> AppResult<()> {
    header(format!("Forecast {} for {}", grid.month_key(), identity));

    for day in 1..=grid.days_in_month() {
        let d = grid.date_of(day)?;
        let num = pad_left(&day.to_string(), 2);
        match grid.state(day)? {
            Some(state) => {
                let (label, color) = describe_state(state.code());
                println!(
                    "  {}  {}  {}{}\x1b[0m  {}",
                    num,
                    date::weekday_abbr(d),
                    color,
                    pad_right(state.code(), 2),
                    label
                );
            }
            None => {
                println!("  {}  {}  -", num, date::weekday_abbr(d));
            }
        }
    }

    println!();
    println!(
        "  TO (office): {}   TH (home): {}   TL (leave): {}",
        grid.to, grid.th, grid.tl
    );
    Ok(())
}
