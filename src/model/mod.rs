pub mod phone;
pub mod birthday;
pub mod record;
pub mod address_book;

// Re-exports for convenience
pub use phone::Phone;
pub use birthday::{format_date, Birthday, DATE_FORMAT};
pub use record::Record;
pub use address_book::{move_off_weekend, AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
