use std::fmt;

use crate::email_client::{
    Mailer,
    OutboundMessage,
    RelayError,
};

/// The two sends every accepted submission goes through, in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Notify,
    Acknowledge,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Notify => f.write_str("notification"),
            Step::Acknowledge => f.write_str("acknowledgment"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{step} email failed: {source}")]
pub struct DeliveryError {
    pub step: Step,
    #[source]
    pub source: RelayError,
}

/// Send `notification` to the operator, then `acknowledgment` to the
/// submitter.
///
/// The acknowledgment is only attempted once the notification has been
/// accepted. Nothing is rolled back: when the acknowledgment fails the
/// operator has already been notified.
pub async fn deliver(
    mailer: &dyn Mailer,
    notification: OutboundMessage,
    acknowledgment: OutboundMessage,
) -> Result<(), DeliveryError> {
    send_step(mailer, Step::Notify, notification).await?;
    send_step(mailer, Step::Acknowledge, acknowledgment).await
}

#[tracing::instrument(name = "sending email", skip(mailer, message), fields(to = %message.to))]
async fn send_step(
    mailer: &dyn Mailer,
    step: Step,
    message: OutboundMessage,
) -> Result<(), DeliveryError> {
    tracing::info!("Attempting to send {} email", step);
    mailer.send(message).await.map_err(|source| {
        tracing::error!(
            code = %source.code,
            command = ?source.command,
            "Failed to send {} email: {}",
            step,
            source.message
        );
        DeliveryError { step, source }
    })?;
    tracing::info!("{} email sent successfully", step);
    Ok(())
}
