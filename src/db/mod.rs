pub mod schema;
pub mod record_repo;
