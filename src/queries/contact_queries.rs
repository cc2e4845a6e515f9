use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Phone, Record};

pub fn get_contact<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a Record> {
    let name = name.trim();
    book.find(name).ok_or_else(|| BookError::not_found("Contact", name))
}

pub fn phones_for<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a [Phone]> {
    get_contact(book, name).map(Record::phones)
}

pub fn all_contacts(book: &AddressBook) -> Vec<&Record> {
    book.values().collect()
}
