//! Runtime configuration
//!
//! The database location comes from, in order: the `--db` flag, the
//! `NOTECMD_DB` environment variable, then the platform config directory.

use log::LevelFilter;
use std::env;
use std::path::PathBuf;

use crate::db::Database;
use crate::error::StoreError;

// Environment variable names
pub const ENV_DB_PATH: &str = "NOTECMD_DB";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Resolve configuration from flags and the process environment.
    pub fn load(db_flag: Option<PathBuf>, verbose: u8) -> Result<Self, StoreError> {
        Self::resolve(db_flag, env::var(ENV_DB_PATH).ok(), verbose)
    }

    fn resolve(
        db_flag: Option<PathBuf>,
        db_env: Option<String>,
        verbose: u8,
    ) -> Result<Self, StoreError> {
        // Flag beats env var; empty env var counts as unset
        let db_path = match db_flag {
            Some(path) => path,
            None => match db_env.filter(|s| !s.trim().is_empty()) {
                Some(path) => PathBuf::from(path),
                None => Database::default_path()?,
            },
        };

        Ok(Self {
            db_path,
            log_level: level_for(verbose),
        })
    }

    /// Install the global logger. `RUST_LOG` overrides the `-v` level.
    pub fn init_logging(&self) {
        let _ = env_logger::Builder::new()
            .filter_level(self.log_level)
            .parse_default_env()
            .format_timestamp(None)
            .try_init();
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}
