use sea_orm::{DbErr, SqlErr};

/// Storage error surfaced by every repository operation
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    // Integrity errors
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    // Field bound errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("{0} not found")]
    NotFound(String),

    // Everything else the database reports
    #[error("Database error: {0}")]
    Database(String),
}

impl StoreError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, StoreError::ConstraintViolation(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                return StoreError::ConstraintViolation(msg)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return StoreError::ConstraintViolation(msg)
            }
            _ => {}
        }

        match err {
            DbErr::RecordNotFound(what) => StoreError::NotFound(what),
            DbErr::RecordNotUpdated => StoreError::NotFound("Record".to_string()),
            DbErr::RecordNotInserted => {
                StoreError::ConstraintViolation("Record already exists".to_string())
            }
            _ => classify_message(err.to_string()),
        }
    }
}

/// Fallback for failures `sql_err` does not classify (NOT NULL, length)
fn classify_message(message: String) -> StoreError {
    let lower = message.to_lowercase();

    if lower.contains("not null constraint") || lower.contains("not-null constraint") {
        StoreError::ConstraintViolation(message)
    } else if lower.contains("value too long") {
        StoreError::Validation(message)
    } else if lower.contains("duplicate key") || lower.contains("unique constraint") {
        StoreError::ConstraintViolation(message)
    } else if lower.contains("foreign key constraint") {
        StoreError::ConstraintViolation(message)
    } else {
        StoreError::Database(message)
    }
}

/// Result type alias for repository operations
pub type StoreResult<T> = Result<T, StoreError>;
