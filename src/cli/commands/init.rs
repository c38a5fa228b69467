use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the store URL and identity fields
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing wfotracker…");

    Config::init_all(cli.server.clone(), cli.test)?;

    let path = Config::config_file();
    println!("📄 Config file : {}", path.display());
    println!("🎉 wfotracker initialization completed!");
    println!("   Set user_email and user_role in the config file before first use.");

    Ok(())
}
