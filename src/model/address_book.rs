use chrono::{Datelike, Days, NaiveDate, Weekday};
use indexmap::IndexMap;
use serde::Serialize;

use super::birthday::format_date;
use super::record::Record;

/// Window used by `upcoming_birthdays` when the caller has no preference.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// A birthday that falls inside the requested window.
/// `date` is already moved off the weekend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn date_text(&self) -> String {
        format_date(self.date)
    }
}

/// All contacts, keyed by name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record under its own name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().to_string(), record)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn values(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday lies within `[today, today + window_days]`.
    ///
    /// Saturday and Sunday occurrences are reported on the following Monday,
    /// even when that Monday is past the end of the window. Results follow
    /// storage order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let occurrence = birthday.next_occurrence(today);
                let offset = (occurrence - today).num_days();
                if !(0..=window_days).contains(&offset) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    date: move_off_weekend(occurrence),
                })
            })
            .collect()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

/// Saturday and Sunday move forward to the next Monday; weekdays are unchanged.
pub fn move_off_weekend(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift)).unwrap_or(date)
}
