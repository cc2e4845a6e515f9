pub mod context;
pub mod contact_commands;
pub mod birthday_commands;

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::{debug, error, info};

use crate::db::{record_repo, schema};
use crate::model::AddressBook;
use context::CLIContext;

/// What the REPL should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Exit(String),
}

/// Run the interactive REPL against the database at `db_path`.
pub fn run(db_path: &Path, window_days: i64) {
    let conn = match Connection::open(db_path) {
        Ok(c) => c,
        Err(e) => {
            error!(path = %db_path.display(), error = %e, "cannot open database");
            eprintln!("Error opening database: {}", e);
            return;
        }
    };

    if let Err(e) = schema::initialize(&conn) {
        eprintln!("Error initializing database: {}", e);
        return;
    }

    let book = match record_repo::load_book(&conn) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("Error loading address book: {}", e);
            return;
        }
    };
    info!(path = %db_path.display(), records = book.len(), "address book opened");

    let mut ctx = CLIContext::new(conn, book, window_days);
    println!("Welcome to the assistant bot!");
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("Enter a command: ") {
            Some(s) => s,
            None => {
                ctx.save_or_report();
                break;
            }
        };

        if input.trim().is_empty() {
            continue;
        }

        match dispatch(&mut ctx.book, &input, CLIContext::today(), ctx.window_days) {
            Reply::Continue(message) => println!("{}", message),
            Reply::Exit(message) => {
                ctx.save_or_report();
                println!("{}", message);
                break;
            }
        }
    }
}

/// Runs one line of input against the book.
pub fn dispatch(book: &mut AddressBook, input: &str, today: NaiveDate, window_days: i64) -> Reply {
    let (command, args) = parse_command(input);
    let args: Vec<&str> = args.split_whitespace().collect();
    debug!(command, argc = args.len(), "dispatch");

    let message = match command {
        "close" | "exit" => return Reply::Exit("Good bye!".into()),
        "hello" => "How can I help you?".into(),
        "help" | "?" => help_text().into(),

        "add" => contact_commands::add(book, &args),
        "change" => contact_commands::change(book, &args),
        "phone" => contact_commands::phone(book, &args),
        "all" => contact_commands::all(book),
        "remove-phone" => contact_commands::remove_phone(book, &args),
        "delete" => contact_commands::delete(book, &args),
        "export" => contact_commands::export(book, &args),

        "add-birthday" => birthday_commands::add_birthday(book, &args),
        "show-birthday" => birthday_commands::show_birthday(book, &args),
        "birthdays" => birthday_commands::birthdays(book, today, window_days),

        _ => "Invalid command.".into(),
    };
    Reply::Continue(message)
}

/// Split input into the command word and the rest.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn help_text() -> &'static str {
    r#"COMMANDS:
    hello                             Greeting
    add <name> <phone>                Add a contact or another phone to it
    change <name> <old> <new>         Replace a phone number
    phone <name>                      Show a contact's phone numbers
    remove-phone <name> <phone>       Remove a phone number
    delete <name>                     Delete a contact
    all                               List all contacts
    add-birthday <name> <DD.MM.YYYY>  Set a contact's birthday
    show-birthday <name>              Show a contact's birthday
    birthdays                         Birthdays in the coming days
    export <path>                     Write the address book as JSON
    help                              Show this help
    close / exit                      Save and quit

Phone numbers are exactly 10 digits."#
}
