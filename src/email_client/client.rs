use async_trait::async_trait;
use derivative::Derivative;
use lettre::message::{
    Mailbox,
    MultiPart,
    SinglePart,
};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{
    Tls,
    TlsParameters,
};
use lettre::{
    Address,
    AsyncSmtpTransport,
    AsyncTransport,
    Message,
    Tokio1Executor,
};

use crate::app::EmailClientSettings;
use crate::email_client::{
    OutboundMessage,
    RelayError,
};

const IMPLICIT_TLS_PORT: u16 = 465;
const SUBMISSION_PORT: u16 = 587;

/// Anything able to hand a message over to a mail relay.
///
/// Implementations are shared by every in-flight request, each `send` is
/// independent of the others.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: OutboundMessage) -> Result<(), RelayError>;
}

/// [`Mailer`] talking SMTP to the configured relay.
///
/// A new connection is opened for every message.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct SmtpClient {
    host: String,
    port: u16,
    #[derivative(Debug = "ignore")]
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpClient {
    pub fn new(settings: &EmailClientSettings) -> Result<Self, RelayError> {
        let port = settings.port.unwrap_or(if settings.secure {
            IMPLICIT_TLS_PORT
        } else {
            SUBMISSION_PORT
        });

        let tls_parameters = TlsParameters::builder(settings.host.clone())
            .dangerous_accept_invalid_certs(settings.accept_invalid_certs)
            .dangerous_accept_invalid_hostnames(settings.accept_invalid_certs)
            .build()?;
        let tls = if settings.secure {
            Tls::Wrapper(tls_parameters)
        } else {
            Tls::Opportunistic(tls_parameters)
        };

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
            .port(port)
            .tls(tls);
        if !settings.user.is_empty() {
            builder = builder.credentials(Credentials::new(
                settings.user.clone(),
                settings.password.clone(),
            ));
        }

        Ok(Self {
            host: settings.host.clone(),
            port,
            transport: builder.build(),
        })
    }

    /// Connects to the relay and runs the greeting, TLS and AUTH steps
    /// without sending anything.
    #[tracing::instrument(name = "verifying smtp relay", skip(self), fields(host = %self.host, port = self.port))]
    pub async fn verify(&self) -> Result<(), RelayError> {
        match self.transport.test_connection().await? {
            true => Ok(()),
            false => Err(RelayError::new(
                format!("Relay {}:{} did not accept the connection", self.host, self.port),
                "ECONNECTION",
            )),
        }
    }
}

#[async_trait]
impl Mailer for SmtpClient {
    async fn send(&self, message: OutboundMessage) -> Result<(), RelayError> {
        let recipient = message.to.clone();
        let response = self.transport.send(build_message(message)?).await?;
        tracing::debug!(
            "Relay accepted message to {}: {}",
            recipient,
            response.code()
        );
        Ok(())
    }
}

fn build_message(message: OutboundMessage) -> Result<Message, RelayError> {
    let sender_address: Address = message
        .from
        .email
        .parse()
        .map_err(|e| RelayError::invalid_sender(e, &message.from.email))?;
    let recipient_address: Address = message
        .to
        .parse()
        .map_err(|e| RelayError::invalid_recipient(e, &message.to))?;

    let builder = Message::builder()
        .from(Mailbox::new(Some(message.from.name), sender_address))
        .to(Mailbox::new(None, recipient_address))
        .subject(message.subject);

    let email = match message.text {
        Some(text) => builder.multipart(MultiPart::alternative_plain_html(text, message.html))?,
        None => builder.singlepart(SinglePart::html(message.html))?,
    };
    Ok(email)
}
