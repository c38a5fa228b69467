use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::{Roster, paginate};
use crate::errors::AppResult;
use crate::store::StoreClient;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        page,
        page_size,
    } = cmd
    {
        let store = StoreClient::new(&cfg.server_url)?;
        let roster = Roster::new(store.fetch_training()?);

        let term = search.as_deref().unwrap_or("");
        let filtered = roster.search(term);
        let size = page_size.unwrap_or(cfg.default_page_size);
        let visible = paginate(&filtered, *page, size);

        if visible.is_empty() {
            println!("No training records to show.");
            return Ok(());
        }

        print_roster_page(visible);

        if size >= 0 {
            println!(
                "Showing {} of {} records (page {}, page size {})",
                visible.len(),
                filtered.len(),
                page,
                size
            );
        } else {
            println!("Showing all {} records", filtered.len());
        }
    }
    Ok(())
}

fn print_roster_page(rows: &[&crate::models::training::TrainingRecord]) {
    let headers = [
        "Id", "Name", "Training Title", "Type", "Mode", "Planned", "Start", "End", "Status",
    ];

    let body = rows
        .iter()
        .map(|r| {
            let mut cells = vec![r.id.map(|id| id.to_string()).unwrap_or_default()];
            cells.extend(r.display_fields().iter().map(|f| f.to_string()));
            cells
        })
        .collect();

    let table = Table::autosized(&headers, body);
    print!("{}", table.render());
}
