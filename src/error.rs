use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Phone number must consist of exactly 10 digits: {value}")]
    InvalidPhone { value: String },

    #[error("Invalid date format, use DD.MM.YYYY: {value}")]
    InvalidBirthday { value: String },

    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} must be positive")]
    NonPositive { field: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("Invalid configuration for {var}: {reason}")]
    Config { var: String, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl BookError {
    pub fn not_found(entity_type: &str, id: impl Into<String>) -> Self {
        BookError::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// True for errors caused by a malformed field value.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BookError::InvalidPhone { .. }
                | BookError::InvalidBirthday { .. }
                | BookError::BlankField { .. }
                | BookError::NonPositive { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BookError::NotFound { .. })
    }
}

pub type BookResult<T> = Result<T, BookError>;
