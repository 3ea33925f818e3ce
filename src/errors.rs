use std::fmt;

/// Error kinds surfaced by the core. The presentation layer maps each
/// variant to its own redirect/denial view; none of the messages expose
/// storage paths or raw parser output.
#[derive(Debug)]
pub enum AppError {
    /// No identity supplied (or an empty one). Distinct from an identity
    /// that lacks the required capability.
    Unauthenticated,
    /// Identity present but the role satisfies none of the required
    /// capabilities. Carries the capability list for the denial view.
    PermissionDenied(String),
    /// Referenced record id is absent from its collection.
    NotFound,
    /// The record is not in the state the requested transition requires.
    InvalidState { current: String, required: &'static str },
    /// A required field is missing or malformed.
    Validation(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthenticated => write!(f, "Not authenticated"),
            AppError::PermissionDenied(caps) => write!(f, "Permission denied: requires {caps}"),
            AppError::NotFound => write!(f, "Not found"),
            AppError::InvalidState { current, required } => {
                write!(f, "Invalid state: expected '{required}', found '{current}'")
            }
            AppError::Validation(msg) => write!(f, "Validation error: {msg}"),
            AppError::Io(_) => write!(f, "Storage error"),
            AppError::Json(_) => write!(f, "Storage error: malformed collection"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl AppError {
    /// True for the two storage-level variants; guard failures are expected
    /// outcomes and logged lower than these.
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Json(_))
    }
}
