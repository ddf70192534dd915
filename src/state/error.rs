//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Navigation target does not exist on the page
    #[error("Section not found: {id}")]
    SectionNotFound { id: String },

    /// Skill category index out of range
    #[error("Skill category not found: {0}")]
    CategoryNotFound(usize),

    /// Theme preference could not be persisted
    #[error("Failed to persist theme preference: {0}")]
    PreferenceWrite(String),

    /// Stored theme name is not recognised
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Typing animation needs at least one phrase
    #[error("Typing animation requires at least one phrase")]
    NoPhrases,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::SectionNotFound {
            id: "about".to_string(),
        };
        assert!(error.to_string().contains("Section not found"));
        assert!(error.to_string().contains("about"));

        let error = StateError::CategoryNotFound(7);
        assert!(error.to_string().contains("7"));

        let error = StateError::PreferenceWrite("disk full".to_string());
        assert!(error.to_string().contains("theme preference"));
        assert!(error.to_string().contains("disk full"));

        let error = StateError::UnknownTheme("sepia".to_string());
        assert!(error.to_string().contains("sepia"));

        let error = StateError::NoPhrases;
        assert!(error.to_string().contains("at least one phrase"));
    }
}
