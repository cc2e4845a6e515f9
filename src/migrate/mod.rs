use std::path::Path;

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::db::{record_repo, schema};
use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Record};

/// On-disk JSON shape of an address book.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub records: Vec<Record>,
}

impl From<&AddressBook> for Snapshot {
    fn from(book: &AddressBook) -> Self {
        Snapshot {
            records: book.values().cloned().collect(),
        }
    }
}

/// A snapshot naming the same contact twice is malformed and rejected whole.
impl TryFrom<Snapshot> for AddressBook {
    type Error = BookError;

    fn try_from(snapshot: Snapshot) -> BookResult<Self> {
        let mut book = AddressBook::new();
        for record in snapshot.records {
            if book.contains(record.name()) {
                warn!(name = record.name(), "duplicate contact in snapshot");
                return Err(BookError::AlreadyExists {
                    entity_type: "Contact".into(),
                    identifier: record.name().to_string(),
                });
            }
            book.add_record(record);
        }
        Ok(book)
    }
}

#[derive(Debug)]
pub struct ImportStats {
    pub records: usize,
    pub phones: usize,
    pub birthdays: usize,
}

impl ImportStats {
    fn of(book: &AddressBook) -> Self {
        ImportStats {
            records: book.len(),
            phones: book.values().map(|r| r.phones().len()).sum(),
            birthdays: book.values().filter(|r| r.birthday().is_some()).count(),
        }
    }
}

pub fn to_json(book: &AddressBook) -> BookResult<String> {
    Ok(serde_json::to_string_pretty(&Snapshot::from(book))?)
}

/// Stored values are validated again while parsing.
pub fn from_json(json: &str) -> BookResult<AddressBook> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    AddressBook::try_from(snapshot)
}

pub fn export_json(book: &AddressBook, path: &Path) -> BookResult<()> {
    std::fs::write(path, to_json(book)?)?;
    info!(path = %path.display(), records = book.len(), "address book exported");
    Ok(())
}

pub fn import_json(path: &Path) -> BookResult<AddressBook> {
    let json_str = std::fs::read_to_string(path)?;
    from_json(&json_str)
}

/// Imports a JSON snapshot into a fresh SQLite database.
pub fn import_into_db(json_path: &Path, db_path: &Path) -> BookResult<ImportStats> {
    if db_path.exists() {
        return Err(BookError::Other(format!(
            "Database file {} already exists",
            db_path.display()
        )));
    }

    let book = import_json(json_path)?;

    let conn = Connection::open(db_path)?;
    schema::initialize(&conn)?;
    record_repo::save_book(&conn, &book)?;

    let stats = ImportStats::of(&book);
    info!(?stats, "import complete");
    Ok(stats)
}
