use lettre::address::AddressError;
use lettre::transport::smtp;

/// Failure reported by the mail relay, or while preparing a message for it.
///
/// `code` is the SMTP reply code when the relay answered, otherwise a
/// symbolic code for the local failure (`ETIMEDOUT`, `ETLS`, `ECONNECTION`,
/// `EENVELOPE`, `EMESSAGE`).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RelayError {
    pub message: String,
    pub code: String,
    pub command: Option<String>,
}

impl RelayError {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: &str) -> Self {
        self.command = Some(command.to_string());
        self
    }

    pub(crate) fn invalid_sender(source: AddressError, email: &str) -> Self {
        Self::new(format!("Invalid sender address `{}`: {}", email, source), "EENVELOPE")
            .with_command("MAIL FROM")
    }

    pub(crate) fn invalid_recipient(source: AddressError, email: &str) -> Self {
        Self::new(
            format!("Invalid recipient address `{}`: {}", email, source),
            "EENVELOPE",
        )
        .with_command("RCPT TO")
    }
}

impl From<lettre::error::Error> for RelayError {
    fn from(source: lettre::error::Error) -> Self {
        Self::new(source.to_string(), "EMESSAGE")
    }
}

impl From<smtp::Error> for RelayError {
    fn from(source: smtp::Error) -> Self {
        let code = match source.status() {
            Some(status) => status.to_string(),
            None if source.is_timeout() => "ETIMEDOUT".to_string(),
            None if source.is_tls() => "ETLS".to_string(),
            None => "ECONNECTION".to_string(),
        };
        Self::new(source.to_string(), code)
    }
}
