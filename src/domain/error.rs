use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Already exists: {message}")]
    AlreadyExists { message: String },

    #[error("Username '{username}' is unavailable")]
    UsernameUnavailable { username: String },

    #[error("Username '{username}' is already in use")]
    UsernameInUse { username: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    pub fn username_unavailable(username: impl Into<String>) -> Self {
        Self::UsernameUnavailable {
            username: username.into(),
        }
    }

    pub fn username_in_use(username: impl Into<String>) -> Self {
        Self::UsernameInUse {
            username: username.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("No user present with id = 42");
        assert_eq!(error.to_string(), "Not found: No user present with id = 42");
    }

    #[test]
    fn test_username_unavailable_error() {
        let error = DomainError::username_unavailable("obama");
        assert_eq!(error.to_string(), "Username 'obama' is unavailable");
    }

    #[test]
    fn test_username_in_use_error() {
        let error = DomainError::username_in_use("taha.furkan");
        assert_eq!(error.to_string(), "Username 'taha.furkan' is already in use");
    }

    #[test]
    fn test_already_exists_error() {
        let error = DomainError::already_exists("User with id 1 already exists");
        assert_eq!(
            error.to_string(),
            "Already exists: User with id 1 already exists"
        );
    }
}
