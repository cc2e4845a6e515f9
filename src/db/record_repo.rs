use chrono::NaiveDate;
use rusqlite::{params, Connection};
use tracing::debug;

use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Birthday, Phone, Record};

/// Replaces everything stored with the contents of `book`, in one transaction.
pub fn save_book(conn: &Connection, book: &AddressBook) -> BookResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM phones", [])?;
    tx.execute("DELETE FROM records", [])?;

    for (position, record) in book.values().enumerate() {
        insert_record(&tx, position, record)?;
    }

    tx.commit()?;
    debug!(records = book.len(), "address book saved");
    Ok(())
}

pub fn load_book(conn: &Connection) -> BookResult<AddressBook> {
    let mut stmt = conn.prepare("SELECT name, birthday FROM records ORDER BY position")?;

    let rows = stmt
        .query_map([], |row| {
            let name: String = row.get(0)?;
            let birthday: Option<String> = row.get(1)?;
            Ok((name, birthday))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut book = AddressBook::new();
    for (name, birthday_str) in rows {
        let phones = find_phones(conn, &name)?;
        let birthday = birthday_str.map(|s| parse_stored_date(&s)).transpose()?;
        book.add_record(Record::from_parts(&name, phones, birthday)?);
    }

    debug!(records = book.len(), "address book loaded");
    Ok(book)
}

pub fn find_phones(conn: &Connection, name: &str) -> BookResult<Vec<Phone>> {
    let mut stmt = conn.prepare(
        "SELECT number FROM phones WHERE record_name = ?1 ORDER BY position",
    )?;

    let phones = stmt
        .query_map(params![name], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?
        .iter()
        .map(|n| Phone::parse(n))
        .collect::<BookResult<Vec<_>>>()?;

    Ok(phones)
}

pub fn count(conn: &Connection) -> BookResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn insert_record(conn: &Connection, position: usize, record: &Record) -> BookResult<()> {
    conn.execute(
        "INSERT INTO records (name, birthday, position) VALUES (?1, ?2, ?3)",
        params![
            record.name(),
            record.birthday().map(|b| b.date().to_string()),
            position as i64,
        ],
    )?;

    for (idx, phone) in record.phones().iter().enumerate() {
        conn.execute(
            "INSERT INTO phones (record_name, position, number) VALUES (?1, ?2, ?3)",
            params![record.name(), idx as i64, phone.as_str()],
        )?;
    }
    Ok(())
}

fn parse_stored_date(s: &str) -> BookResult<Birthday> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(Birthday::from_date)
        .map_err(|e| BookError::Other(format!("Invalid stored birthday '{}': {}", s, e)))
}
