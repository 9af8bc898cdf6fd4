// ============================================================================
// Customer Errors
// ============================================================================
//
// Storage failures, not-found lookups and row-shape mismatches all surface as
// the same kind. Only the message travels up to the HTTP layer.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CustomerError {
    message: String,
}

impl CustomerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<sqlx::Error> for CustomerError {
    fn from(value: sqlx::Error) -> Self {
        Self::new(value.to_string())
    }
}
