use chrono::NaiveDate;

use crate::error::{BookError, BookResult};

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> BookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(BookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that an integer is positive (> 0).
pub fn positive(value: i64, field: &str) -> BookResult<i64> {
    if value <= 0 {
        Err(BookError::NonPositive {
            field: field.to_string(),
        })
    } else {
        Ok(value)
    }
}

/// Validates a phone number: exactly ten ASCII digits, nothing else.
pub fn phone_number(value: &str) -> BookResult<String> {
    if value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(BookError::InvalidPhone {
            value: value.to_string(),
        })
    }
}

/// Parses a `DD.MM.YYYY` date. Day and month may be one or two digits,
/// the year must be four. The date must exist in the calendar.
pub fn day_month_year(value: &str) -> BookResult<NaiveDate> {
    let invalid = || BookError::InvalidBirthday {
        value: value.to_string(),
    };

    let mut parts = value.split('.');
    let (day, month, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(d), Some(m), Some(y), None) => (d, m, y),
        _ => return Err(invalid()),
    };

    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(day, 1, 2) || !digits(month, 1, 2) || !digits(year, 4, 4) {
        return Err(invalid());
    }

    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}
