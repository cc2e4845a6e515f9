use chrono::NaiveDate;

use super::contact_queries::get_contact;
use crate::error::BookResult;
use crate::model::{AddressBook, Birthday, UpcomingBirthday};
use crate::validation;

/// The contact's birthday, `None` when it was never set.
pub fn birthday_for(book: &AddressBook, name: &str) -> BookResult<Option<Birthday>> {
    Ok(get_contact(book, name)?.birthday().copied())
}

pub fn days_until_birthday(book: &AddressBook, name: &str, today: NaiveDate) -> BookResult<Option<i64>> {
    Ok(get_contact(book, name)?.days_until_birthday(today))
}

pub fn upcoming(book: &AddressBook, today: NaiveDate, window_days: i64) -> BookResult<Vec<UpcomingBirthday>> {
    let window_days = validation::positive(window_days, "birthday window")?;
    Ok(book.upcoming_birthdays(today, window_days))
}
