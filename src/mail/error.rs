//! Mail hand-off error types.

/// Errors that can occur while handing a message to the mail client.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// Recipient address cannot be used in a mail link
    #[error("Invalid recipient address: '{0}'")]
    InvalidRecipient(String),

    /// The platform opener could not be started
    #[error("Failed to open '{program}': {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_error_display() {
        let error = MailError::InvalidRecipient("not an address".to_string());
        assert!(error.to_string().contains("Invalid recipient"));
        assert!(error.to_string().contains("not an address"));

        let error = MailError::Launch {
            program: "xdg-open".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        assert!(error.to_string().contains("xdg-open"));
        assert!(error.to_string().contains("No such file"));
    }
}
