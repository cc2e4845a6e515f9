use std::path::Path;

use super::context::format_error;
use crate::error::BookError;
use crate::migrate;
use crate::model::AddressBook;
use crate::ops::contact_ops::{self, ContactChange};
use crate::queries::contact_queries;

pub fn add(book: &mut AddressBook, args: &[&str]) -> String {
    let [name, phone] = args else {
        return "Please provide a name and a phone number.".into();
    };

    match contact_ops::add_contact(book, name, phone) {
        Ok(ContactChange::Added) => "Contact added.".into(),
        Ok(ContactChange::Updated) => "Contact updated.".into(),
        Err(e) => format_error(&e),
    }
}

pub fn change(book: &mut AddressBook, args: &[&str]) -> String {
    let [name, old_phone, new_phone] = args else {
        return "Please provide a name, the old phone number and the new phone number.".into();
    };

    match contact_ops::change_phone(book, name, old_phone, new_phone) {
        Ok(()) => format!("Phone number changed for contact {}.", name),
        Err(BookError::NotFound { entity_type, .. }) if entity_type == "Phone" => {
            format!("Old phone number not found for contact {}.", name)
        }
        Err(BookError::NotFound { .. }) => format!("Contact {} not found.", name),
        Err(e) => format_error(&e),
    }
}

pub fn phone(book: &AddressBook, args: &[&str]) -> String {
    let [name] = args else {
        return "Please provide a name.".into();
    };

    match contact_queries::phones_for(book, name) {
        Ok(phones) => phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; "),
        Err(_) => "Contact not found.".into(),
    }
}

pub fn all(book: &AddressBook) -> String {
    let records = contact_queries::all_contacts(book);
    if records.is_empty() {
        return "No contacts found.".into();
    }
    records
        .iter()
        .map(|r| r.describe())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn remove_phone(book: &mut AddressBook, args: &[&str]) -> String {
    let [name, phone] = args else {
        return "Please provide a name and a phone number.".into();
    };

    match contact_ops::remove_phone(book, name, phone) {
        Ok(true) => format!("Phone number {} removed from contact {}.", phone, name),
        Ok(false) => format!("Contact {} has no phone number {}.", name, phone),
        Err(_) => format!("Contact {} not found.", name),
    }
}

pub fn delete(book: &mut AddressBook, args: &[&str]) -> String {
    let [name] = args else {
        return "Please provide a name.".into();
    };

    if contact_ops::delete_contact(book, name) {
        format!("Contact {} deleted.", name)
    } else {
        format!("Contact {} not found.", name)
    }
}

pub fn export(book: &AddressBook, args: &[&str]) -> String {
    let [path] = args else {
        return "Please provide a file path.".into();
    };

    match migrate::export_json(book, Path::new(path)) {
        Ok(()) => format!("Exported {} contacts to {}.", book.len(), path),
        Err(e) => format_error(&e),
    }
}
