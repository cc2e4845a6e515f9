//! Runtime configuration, read from the environment.
//!
//! A `.env` file in the working directory is loaded first if one exists.
//! Command-line flags in `main` take precedence over anything set here.

use std::env;
use std::path::PathBuf;

use crate::error::{BookError, BookResult};
use crate::model::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::validation;

pub const DB_PATH_VAR: &str = "ADDRBOOK_DB";
pub const WINDOW_VAR: &str = "ADDRBOOK_BIRTHDAY_WINDOW";
pub const LOG_VAR: &str = "ADDRBOOK_LOG";

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file holding the address book (default: `.data/addrbook.db`)
    pub db_path: PathBuf,

    /// Days ahead covered by the `birthdays` command (default: 7)
    pub birthday_window_days: i64,

    /// Log filter used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(".data").join("addrbook.db"),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            log_level: "warn".into(),
        }
    }
}

impl Config {
    pub fn from_env() -> BookResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> BookResult<Self> {
        let defaults = Self::default();

        let db_path = lookup(DB_PATH_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let birthday_window_days = match lookup(WINDOW_VAR) {
            Some(raw) => parse_window(&raw)?,
            None => defaults.birthday_window_days,
        };

        let log_level = lookup(LOG_VAR)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.log_level);

        Ok(Self {
            db_path,
            birthday_window_days,
            log_level,
        })
    }
}

fn parse_window(raw: &str) -> BookResult<i64> {
    let invalid = |reason: &str| BookError::Config {
        var: WINDOW_VAR.into(),
        reason: reason.into(),
    };
    let days: i64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid("must be a whole number of days"))?;
    validation::positive(days, "birthday window").map_err(|_| invalid("must be positive"))
}
