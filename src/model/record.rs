use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::birthday::Birthday;
use super::phone::Phone;
use crate::error::{BookError, BookResult};
use crate::validation;

/// A single contact: a name, its phone numbers and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    name: String,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

/// Serialized form of a record, checked by `Record::from_parts` on the way in.
#[derive(Deserialize)]
struct RawRecord {
    name: String,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<RawRecord> for Record {
    type Error = BookError;

    fn try_from(raw: RawRecord) -> BookResult<Self> {
        Record::from_parts(&raw.name, raw.phones, raw.birthday)
    }
}

impl Record {
    pub fn new(name: &str) -> BookResult<Self> {
        Ok(Self {
            name: validation::non_blank(name, "name")?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Rebuilds a record from already-validated parts.
    pub fn from_parts(name: &str, phones: Vec<Phone>, birthday: Option<Birthday>) -> BookResult<Self> {
        let mut record = Self::new(name)?;
        record.phones = phones;
        record.birthday = birthday;
        Ok(record)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, value: &str) -> BookResult<&Phone> {
        let phone = Phone::parse(value)?;
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    /// Removes the first matching phone. Returns whether one was removed.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        match self.position_of(value) {
            Some(idx) => {
                self.phones.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> BookResult<()> {
        let idx = self
            .position_of(old_value)
            .ok_or_else(|| BookError::not_found("Phone", old_value))?;
        self.phones[idx] = Phone::parse(new_value)?;
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == value)
    }

    pub fn set_birthday(&mut self, value: &str) -> BookResult<&Birthday> {
        let birthday = Birthday::parse(value)?;
        Ok(&*self.birthday.insert(birthday))
    }

    pub fn days_until_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until(today))
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "not specified".into());
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            phones.join("; "),
            birthday
        )
    }
}
