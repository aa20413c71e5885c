/// Display name and address an email is sent from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sender {
    pub name: String,
    pub email: String,
}

impl Sender {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// A single email handed to a [`Mailer`](crate::email_client::Mailer).
///
/// When `text` is present the message is sent as `multipart/alternative`
/// with both parts, otherwise as a single `text/html` part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from: Sender,
    pub to: String,
    pub subject: String,
    pub text: Option<String>,
    pub html: String,
}
