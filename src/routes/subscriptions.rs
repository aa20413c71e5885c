use std::convert::TryInto;

use actix_web::{
    web,
    HttpResponse,
};
use serde_json::json;

use crate::app::EmailClientSettings;
use crate::domain::{
    SubscriptionForm,
    SubscriptionRequest,
};
use crate::email_client::{
    Mailer,
    OutboundMessage,
    Sender,
};
use crate::routes::{
    deliver,
    JsonForm,
    received_at,
    RouteError,
    OPERATOR_EMAIL,
    SENDER_NAME,
};

#[tracing::instrument(
    name = "adding new subscriber",
    skip(form, mailer, settings),
    fields(email = ?form.email)
)]
pub async fn subscribe(
    form: JsonForm<SubscriptionForm>,
    mailer: web::Data<dyn Mailer>,
    settings: web::Data<EmailClientSettings>,
) -> Result<HttpResponse, RouteError> {
    let request: SubscriptionRequest = form.into_inner().try_into()?;

    deliver(
        mailer.get_ref(),
        notification_email(&settings.user, &request, &received_at()),
        welcome_email(&settings.user, &request),
    )
    .await
    .map_err(|delivery| RouteError::SubscriptionFailed { delivery })?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Subscription successful" })))
}

fn notification_email(
    sender_email: &str,
    request: &SubscriptionRequest,
    received_at: &str,
) -> OutboundMessage {
    OutboundMessage {
        from: Sender::new(SENDER_NAME, sender_email),
        to: OPERATOR_EMAIL.to_string(),
        subject: "New Newsletter Subscription".to_string(),
        text: Some(format!("New subscription from: {}", request.email)),
        html: format!(
            "<h2>New Newsletter Subscription</h2>\n\
             <p>A new user has subscribed to the newsletter:</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Date:</strong> {}</p>\n",
            request.email, received_at
        ),
    }
}

fn welcome_email(sender_email: &str, request: &SubscriptionRequest) -> OutboundMessage {
    OutboundMessage {
        from: Sender::new(SENDER_NAME, sender_email),
        to: request.email.to_string(),
        subject: "Welcome to Orange Lilies Newsletter!".to_string(),
        text: None,
        html: "<h2>Welcome to Orange Lilies!</h2>\n\
               <p>Thank you for subscribing to our newsletter. You'll be the first to know \
               about:</p>\n\
               <ul>\n\
               <li>New product launches</li>\n\
               <li>Special offers and discounts</li>\n\
               <li>Period care tips and advice</li>\n\
               <li>Community updates</li>\n\
               </ul>\n\
               <p>Stay tuned for our next update!</p>\n\
               <p>Best regards,<br>The Orange Lilies Team</p>\n"
            .to_string(),
    }
}
