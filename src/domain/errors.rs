use thiserror::Error;

/// Fallback message shown to users when the failure is not a validation error
pub const GENERIC_FAILURE_MESSAGE: &str = "The operation could not be completed. Please try again.";

/// Failures reported by a key-value store adapter
///
/// The repositories do not look inside these; they are propagated to the
/// caller unmodified.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("stored value under key `{key}` could not be decoded: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Wraps any displayable backend failure
    pub fn backend(err: impl std::fmt::Display) -> Self {
        StorageError::Backend(err.to_string())
    }
}

/// Errors returned by the group and player repositories
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("A group named \"{name}\" already exists.")]
    DuplicateGroup { name: String },

    #[error("A player named \"{name}\" is already in group \"{group}\".")]
    DuplicatePlayerName { group: String, name: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RosterError {
    /// True for failures the user can fix by changing their input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RosterError::DuplicateGroup { .. } | RosterError::DuplicatePlayerName { .. }
        )
    }

    /// Message suitable for showing to the user
    ///
    /// Validation errors carry their own message; anything else collapses to
    /// [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            GENERIC_FAILURE_MESSAGE.to_string()
        }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_group_is_validation() {
        let err = RosterError::DuplicateGroup {
            name: "Friday".to_string(),
        };

        assert!(err.is_validation());
        assert_eq!(err.user_message(), "A group named \"Friday\" already exists.");
    }

    #[test]
    fn duplicate_player_is_validation() {
        let err = RosterError::DuplicatePlayerName {
            group: "Friday".to_string(),
            name: "Ana".to_string(),
        };

        assert!(err.is_validation());
        assert!(err.user_message().contains("Ana"));
        assert!(err.user_message().contains("Friday"));
    }

    #[test]
    fn storage_error_uses_fallback_message() {
        let err = RosterError::from(StorageError::backend("disk full"));

        assert!(!err.is_validation());
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn corrupt_value_names_the_key() {
        let source = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err = StorageError::Corrupt {
            key: "groups".to_string(),
            source,
        };

        assert!(err.to_string().contains("`groups`"));
    }
}
