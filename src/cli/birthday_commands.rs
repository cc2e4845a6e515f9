use chrono::NaiveDate;

use super::context::format_error;
use crate::error::BookError;
use crate::model::AddressBook;
use crate::ops::birthday_ops;
use crate::queries::birthday_queries;

pub fn add_birthday(book: &mut AddressBook, args: &[&str]) -> String {
    let [name, date] = args else {
        return "Please provide a name and a date of birth.".into();
    };

    match birthday_ops::add_birthday(book, name, date) {
        Ok(_) => format!("Birthday added for contact {}.", name),
        Err(BookError::NotFound { .. }) => format!("Contact {} not found.", name),
        Err(e) => format_error(&e),
    }
}

pub fn show_birthday(book: &AddressBook, args: &[&str]) -> String {
    let [name] = args else {
        return "Please provide a name.".into();
    };

    match birthday_queries::birthday_for(book, name) {
        Ok(Some(birthday)) => format!("Birthday of {}: {}", name, birthday),
        _ => format!("Contact {} not found or birthday not specified.", name),
    }
}

pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: i64) -> String {
    let upcoming = match birthday_queries::upcoming(book, today, window_days) {
        Ok(list) => list,
        Err(e) => return format_error(&e),
    };

    if upcoming.is_empty() {
        return "No upcoming birthdays.".into();
    }
    upcoming
        .iter()
        .map(|b| format!("Birthday of {} on {}", b.name, b.date_text()))
        .collect::<Vec<_>>()
        .join("\n")
}
