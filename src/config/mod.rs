use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::models::identity::Role;

/// Default remote store endpoint.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the remote record store.
    pub server_url: String,
    /// Email used to resolve the display identity via /users.
    pub user_email: String,
    /// Role as provided by the external auth lookup: admin, manager
    /// or viewer. Read-only from the client's point of view.
    pub user_role: String,
    /// Rows per page for the roster table; -1 shows all rows.
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

fn default_page_size() -> i64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            user_email: String::new(),
            user_role: "viewer".to_string(),
            default_page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("wfotracker")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".wfotracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wfotracker.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Parsed role; defaults to viewer when the field is unreadable so
    /// the most restricted surface wins.
    pub fn role(&self) -> Role {
        Role::parse(&self.user_role).unwrap_or(Role::Viewer)
    }

    /// Initialize the configuration directory and file.
    pub fn init_all(server_url: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config {
            server_url: server_url.unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).expect("❌ Failed to serialize configuration");
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Store URL:   {}", config.server_url);

        Ok(())
    }
}
