use std::path::PathBuf;

use addrbook::config::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // stderr only, stdout belongs to the REPL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut db_path: Option<PathBuf> = None;
    let mut import_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                db_path = args.next().map(PathBuf::from);
                if db_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--import" => {
                import_path = args.next().map(PathBuf::from);
                if import_path.is_none() {
                    eprintln!("Error: --import requires a JSON file path");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("addrbook - contact book with birthday reminders");
                println!();
                println!("Usage: addrbook [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>      Database file path (default: $ADDRBOOK_DB or .data/addrbook.db)");
                println!("  --import <JSON_PATH>   Import an exported JSON address book into a new database");
                println!("  -h, --help             Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let db_path = db_path.unwrap_or(config.db_path);
    if let Some(dir) = db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error: cannot create {}: {}", dir.display(), e);
            std::process::exit(1);
        }
    }

    if let Some(json_path) = import_path {
        println!("Importing from {}...", json_path.display());
        match addrbook::migrate::import_into_db(&json_path, &db_path) {
            Ok(stats) => {
                println!("Import complete!");
                println!("  Contacts: {}", stats.records);
                println!("  Phones: {}", stats.phones);
                println!("  Birthdays: {}", stats.birthdays);
            }
            Err(e) => {
                eprintln!("Import failed: {}", e);
                eprintln!("Remove the existing database or use --file to specify a different path.");
                std::process::exit(1);
            }
        }
        return;
    }

    addrbook::cli::run(&db_path, config.birthday_window_days);
}
