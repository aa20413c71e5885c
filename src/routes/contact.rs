use std::convert::TryInto;

use actix_web::{
    web,
    HttpResponse,
};
use serde_json::json;

use crate::app::EmailClientSettings;
use crate::domain::{
    ContactForm,
    ContactRequest,
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

const CONTACT_FORM_SENDER_NAME: &str = "Orange Lilies Contact Form";

#[tracing::instrument(
    name = "relaying contact form",
    skip(form, mailer, settings),
    fields(sender_name = ?form.name, email = ?form.email, subject = ?form.subject)
)]
pub async fn contact(
    form: JsonForm<ContactForm>,
    mailer: web::Data<dyn Mailer>,
    settings: web::Data<EmailClientSettings>,
) -> Result<HttpResponse, RouteError> {
    let request: ContactRequest = form.into_inner().try_into()?;

    deliver(
        mailer.get_ref(),
        notification_email(&settings.user, &request, &received_at()),
        confirmation_email(&settings.user, &request),
    )
    .await
    .map_err(|delivery| RouteError::ContactFailed { delivery })?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Message sent successfully" })))
}

// User content is embedded as is, no HTML escaping.
fn notification_email(
    sender_email: &str,
    request: &ContactRequest,
    received_at: &str,
) -> OutboundMessage {
    OutboundMessage {
        from: Sender::new(CONTACT_FORM_SENDER_NAME, sender_email),
        to: OPERATOR_EMAIL.to_string(),
        subject: format!("Contact Form: {}", request.subject),
        text: Some(format!(
            "New contact form submission:\n\nName: {}\nEmail: {}\nSubject: {}\nMessage: {}",
            request.name, request.email, request.subject, request.message
        )),
        html: format!(
            "<h2>New Contact Form Submission</h2>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Subject:</strong> {}</p>\n\
             <p><strong>Message:</strong></p>\n\
             <p>{}</p>\n\
             <p><strong>Date:</strong> {}</p>\n",
            request.name, request.email, request.subject, request.message, received_at
        ),
    }
}

fn confirmation_email(sender_email: &str, request: &ContactRequest) -> OutboundMessage {
    OutboundMessage {
        from: Sender::new(SENDER_NAME, sender_email),
        to: request.email.to_string(),
        subject: "Thank you for contacting Orange Lilies".to_string(),
        text: None,
        html: format!(
            "<h2>Thank you for contacting Orange Lilies!</h2>\n\
             <p>Dear {},</p>\n\
             <p>We have received your message and will get back to you as soon as \
             possible.</p>\n\
             <p>Here's a copy of your message:</p>\n\
             <div style=\"background-color: #f9f9f9; padding: 15px; border-radius: 5px; \
             margin: 15px 0;\">\n\
             <p><strong>Subject:</strong> {}</p>\n\
             <p><strong>Message:</strong></p>\n\
             <p>{}</p>\n\
             </div>\n\
             <p>Best regards,<br>The Orange Lilies Team</p>\n",
            request.name, request.subject, request.message
        ),
    }
}
