use chrono::Local;
use rusqlite::Connection;
use std::io::{self, Write};
use tracing::error;

use crate::db::record_repo;
use crate::error::{BookError, BookResult};
use crate::model::AddressBook;

pub struct CLIContext {
    pub conn: Connection,
    pub book: AddressBook,
    pub window_days: i64,
}

impl CLIContext {
    pub fn new(conn: Connection, book: AddressBook, window_days: i64) -> Self {
        Self { conn, book, window_days }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    pub fn today() -> chrono::NaiveDate {
        Local::now().date_naive()
    }

    /// Writes the in-memory book back to the database.
    pub fn save(&self) -> BookResult<()> {
        record_repo::save_book(&self.conn, &self.book)
    }

    pub fn save_or_report(&self) {
        if let Err(e) = self.save() {
            error!(error = %e, "failed to save address book");
            eprintln!("Error saving address book: {}", e);
        }
    }
}

/// User-facing text for an error raised by a command.
pub fn format_error(e: &BookError) -> String {
    format!("Input error: {}", e)
}
