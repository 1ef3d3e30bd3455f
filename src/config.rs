//! Snapshot location configuration.
//!
//! The store keeps its data in a single JSON file; this module decides
//! where that file lives. The platform data directory is the default and
//! `ENTBOOK_DATA_FILE` overrides it.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join("entbook"))
        .unwrap_or_else(|| PathBuf::from("./entbook_data"))
        .join("appointments.json")
}

impl Config {
    /// Resolve the configuration from the environment.
    pub fn from_env() -> Self {
        let data_file = std::env::var_os("ENTBOOK_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_file);
        Config { data_file }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: default_data_file(),
        }
    }
}
