use addrbook::model::*;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::new(name).unwrap();
    record.set_birthday(birthday).unwrap();
    record
}

// ==========================================================================
// PHONE TESTS
// ==========================================================================

#[test]
fn phone_accepts_any_ten_digit_string() {
    for value in ["0000000000", "0501234567", "9999999999"] {
        assert_eq!(Phone::parse(value).unwrap().as_str(), value);
    }
}

#[test]
fn phone_rejects_everything_else() {
    for value in ["", "123", "050123456a", "050 123 45 67", "050-1234567", "05012345678"] {
        let err = Phone::parse(value).unwrap_err();
        assert!(err.is_validation(), "{value} should be rejected");
    }
}

// ==========================================================================
// BIRTHDAY TESTS
// ==========================================================================

#[test]
fn birthday_accepts_real_dates() {
    let b = Birthday::parse("24.08.1991").unwrap();
    assert_eq!(b.date(), date(1991, 8, 24));
    assert_eq!(b.to_string(), "24.08.1991");
}

#[test]
fn birthday_rejects_bad_input() {
    for value in ["1991-08-24", "24/08/1991", "32.01.1991", "29.02.1991", "tomorrow"] {
        assert!(Birthday::parse(value).unwrap_err().is_validation());
    }
}

// ==========================================================================
// RECORD TESTS
// ==========================================================================

#[test]
fn record_starts_empty() {
    let record = Record::new("Taras").unwrap();
    assert_eq!(record.name(), "Taras");
    assert!(record.phones().is_empty());
    assert!(record.birthday().is_none());
}

#[test]
fn record_rejects_blank_name() {
    assert!(Record::new("  ").unwrap_err().is_validation());
}

#[test]
fn add_phone_appends_without_dedup() {
    let mut record = Record::new("Taras").unwrap();
    record.add_phone("0501234567").unwrap();
    record.add_phone("0501234567").unwrap();
    record.add_phone("0671234567").unwrap();

    let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    assert_eq!(phones, vec!["0501234567", "0501234567", "0671234567"]);
}

#[test]
fn add_phone_invalid_leaves_list_unchanged() {
    let mut record = Record::new("Taras").unwrap();
    record.add_phone("0501234567").unwrap();
    assert!(record.add_phone("12345").unwrap_err().is_validation());
    assert_eq!(record.phones().len(), 1);
}

#[test]
fn remove_phone_removes_first_match_only() {
    let mut record = Record::new("Taras").unwrap();
    record.add_phone("0501234567").unwrap();
    record.add_phone("0671234567").unwrap();
    record.add_phone("0501234567").unwrap();

    assert!(record.remove_phone("0501234567"));
    let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    assert_eq!(phones, vec!["0671234567", "0501234567"]);
}

#[test]
fn remove_absent_phone_is_noop() {
    let mut record = Record::new("Taras").unwrap();
    record.add_phone("0501234567").unwrap();
    assert!(!record.remove_phone("0999999999"));
    assert_eq!(record.phones().len(), 1);
}

#[test]
fn edit_phone_replaces_in_place() {
    let mut record = Record::new("Taras").unwrap();
    record.add_phone("0501234567").unwrap();
    record.add_phone("0671234567").unwrap();

    record.edit_phone("0501234567", "0931112233").unwrap();
    let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    assert_eq!(phones, vec!["0931112233", "0671234567"]);
}

#[test]
fn edit_missing_phone_is_not_found_and_changes_nothing() {
    let mut record = Record::new("Taras").unwrap();
    record.add_phone("0501234567").unwrap();

    let err = record.edit_phone("0999999999", "0931112233").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(record.phones()[0].as_str(), "0501234567");
}

#[test]
fn edit_phone_with_invalid_new_value_changes_nothing() {
    let mut record = Record::new("Taras").unwrap();
    record.add_phone("0501234567").unwrap();

    let err = record.edit_phone("0501234567", "abc").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(record.phones()[0].as_str(), "0501234567");
}

#[test]
fn find_phone_returns_match_or_none() {
    let mut record = Record::new("Taras").unwrap();
    record.add_phone("0501234567").unwrap();
    assert_eq!(record.find_phone("0501234567").unwrap().as_str(), "0501234567");
    assert!(record.find_phone("0671234567").is_none());
}

#[test]
fn set_birthday_overwrites_previous() {
    let mut record = record_with_birthday("Taras", "09.03.1814");
    record.set_birthday("10.03.1814").unwrap();
    assert_eq!(record.birthday().unwrap().to_string(), "10.03.1814");
}

#[test]
fn set_invalid_birthday_keeps_previous() {
    let mut record = record_with_birthday("Taras", "09.03.1814");
    assert!(record.set_birthday("31.04.1814").is_err());
    assert_eq!(record.birthday().unwrap().to_string(), "09.03.1814");
}

#[test]
fn days_until_birthday_without_birthday_is_none() {
    let record = Record::new("Taras").unwrap();
    assert_eq!(record.days_until_birthday(date(2024, 6, 10)), None);
}

#[test]
fn days_until_birthday_counts_forward() {
    let today = date(2024, 6, 10);
    assert_eq!(record_with_birthday("A", "12.06.1990").days_until_birthday(today), Some(2));
    assert_eq!(record_with_birthday("B", "10.06.1990").days_until_birthday(today), Some(0));
    assert_eq!(record_with_birthday("C", "09.06.1990").days_until_birthday(today), Some(364));
}

#[test]
fn days_until_birthday_across_new_year() {
    let record = record_with_birthday("Taras", "02.01.2000");
    assert_eq!(record.days_until_birthday(date(2024, 12, 30)), Some(3));
}

#[test]
fn describe_lists_phones_and_birthday() {
    let mut record = record_with_birthday("Lesya", "25.02.1871");
    record.add_phone("0501234567").unwrap();
    record.add_phone("0671234567").unwrap();
    assert_eq!(
        record.describe(),
        "Contact name: Lesya, phones: 0501234567; 0671234567, birthday: 25.02.1871"
    );
}

#[test]
fn describe_without_birthday() {
    let record = Record::new("Lesya").unwrap();
    assert_eq!(record.describe(), "Contact name: Lesya, phones: , birthday: not specified");
}

// ==========================================================================
// ADDRESS BOOK TESTS
// ==========================================================================

#[test]
fn add_find_delete() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Ivan").unwrap());

    assert!(book.find("Ivan").is_some());
    assert!(book.find("Petro").is_none());

    assert!(book.delete("Ivan").is_some());
    assert!(book.find("Ivan").is_none());
    assert!(book.is_empty());
}

#[test]
fn delete_absent_is_noop() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Ivan").unwrap());
    assert!(book.delete("Petro").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn add_record_overwrites_without_merging() {
    let mut book = AddressBook::new();
    let mut first = Record::new("Ivan").unwrap();
    first.add_phone("0501234567").unwrap();
    book.add_record(first);

    book.add_record(Record::new("Ivan").unwrap());
    assert_eq!(book.len(), 1);
    assert!(book.find("Ivan").unwrap().phones().is_empty());
}

#[test]
fn keys_match_record_names() {
    let book: AddressBook = ["Ivan", "Olena", "Marta"]
        .iter()
        .map(|n| Record::new(n).unwrap())
        .collect();
    for name in ["Ivan", "Olena", "Marta"] {
        assert_eq!(book.find(name).unwrap().name(), name);
    }
}

#[test]
fn find_and_values_do_not_mutate() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Ivan", "01.01.1990"));
    let before = book.clone();

    let _ = book.find("Ivan");
    let _ = book.find("nobody");
    let _: Vec<&Record> = book.values().collect();
    let _ = book.upcoming_birthdays(date(2024, 1, 1), 7);

    assert_eq!(book, before);
}

// ==========================================================================
// UPCOMING BIRTHDAY TESTS
// ==========================================================================

#[test]
fn upcoming_includes_birthday_within_window() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Anna", "12.06.1990"));

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Anna");
    assert_eq!(upcoming[0].date, date(2024, 6, 12));
    assert_eq!(upcoming[0].date_text(), "12.06.2024");
}

#[test]
fn upcoming_excludes_birthday_that_already_passed() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Bohdan", "08.06.1990"));
    assert!(book.upcoming_birthdays(date(2024, 6, 10), 7).is_empty());
}

#[test]
fn upcoming_includes_today() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Anna", "10.06.1990"));
    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming[0].date, date(2024, 6, 10));
}

#[test]
fn upcoming_window_end_is_inclusive() {
    let mut book = AddressBook::new();
    // 17.06.2024 is a Monday, the last day of the window
    book.add_record(record_with_birthday("Anna", "17.06.1990"));
    book.add_record(record_with_birthday("Bohdan", "18.06.1990"));

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Anna");
}

#[test]
fn saturday_birthday_reported_on_monday() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Sofia", "15.06.1990"));

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming[0].date, date(2024, 6, 17));
}

#[test]
fn sunday_birthday_reported_on_monday() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Sofia", "16.06.1990"));

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming[0].date, date(2024, 6, 17));
}

#[test]
fn weekend_shift_may_leave_the_window() {
    let mut book = AddressBook::new();
    // today Monday 03.06.2024; Sunday 09.06 is the last window day
    book.add_record(record_with_birthday("Yurii", "09.06.1990"));

    let upcoming = book.upcoming_birthdays(date(2024, 6, 3), 6);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].date, date(2024, 6, 10));
}

#[test]
fn upcoming_rolls_over_new_year() {
    let mut book = AddressBook::new();
    // 02.01.2025 is a Thursday
    book.add_record(record_with_birthday("Mykola", "02.01.1980"));

    let upcoming = book.upcoming_birthdays(date(2024, 12, 30), 7);
    assert_eq!(upcoming[0].date, date(2025, 1, 2));
}

#[test]
fn upcoming_skips_records_without_birthday_and_keeps_storage_order() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Zoryana", "14.06.1990"));
    book.add_record(Record::new("NoBirthday").unwrap());
    book.add_record(record_with_birthday("Andrii", "11.06.1990"));

    let names: Vec<String> = book
        .upcoming_birthdays(date(2024, 6, 10), 7)
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, vec!["Zoryana", "Andrii"]);
}

#[test]
fn leap_day_birthday_in_common_year() {
    let mut book = AddressBook::new();
    // 01.03.2023 is a Wednesday
    book.add_record(record_with_birthday("Leap", "29.02.2000"));

    let upcoming = book.upcoming_birthdays(date(2023, 2, 27), 7);
    assert_eq!(upcoming[0].date, date(2023, 3, 1));
}
