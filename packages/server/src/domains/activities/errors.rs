use axum::http::StatusCode;
use thiserror::Error;

/// Rejections from the activity registry.
///
/// Every variant is a deterministic function of registry state and the
/// request, so none of them are retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

impl RegistryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::ActivityNotFound => StatusCode::NOT_FOUND,
            RegistryError::AlreadySignedUp | RegistryError::NotSignedUp => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(RegistryError::ActivityNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(RegistryError::AlreadySignedUp.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RegistryError::NotSignedUp.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_detail_messages() {
        assert_eq!(RegistryError::ActivityNotFound.to_string(), "Activity not found");
        assert_eq!(RegistryError::AlreadySignedUp.to_string(), "Student already signed up");
        assert_eq!(
            RegistryError::NotSignedUp.to_string(),
            "Student is not signed up for this activity"
        );
    }
}
