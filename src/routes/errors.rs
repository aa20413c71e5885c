use actix_web::http::StatusCode;
use actix_web::{
    HttpResponse,
    ResponseError,
};
use custom_error::custom_error;
use serde::Serialize;

use crate::domain::MalformedInput;
use crate::routes::DeliveryError;

custom_error! {
/// Error inside route handler
pub RouteError
    InvalidFormData{source:MalformedInput} = "{source}",
    InvalidBody{source:serde_json::Error} = "Invalid request body",
    SubscriptionFailed{delivery:DeliveryError} = "Failed to process subscription",
    ContactFailed{delivery:DeliveryError} = "Failed to send message",
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl RouteError {
    /// Raw relay message, whichever of the two sends failed.
    fn details(&self) -> Option<String> {
        match self {
            RouteError::SubscriptionFailed { delivery } | RouteError::ContactFailed { delivery } => {
                Some(delivery.source.message.clone())
            }
            RouteError::InvalidFormData { .. } | RouteError::InvalidBody { .. } => None,
        }
    }
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            RouteError::InvalidFormData { .. } | RouteError::InvalidBody { .. } => {
                StatusCode::BAD_REQUEST
            }
            RouteError::SubscriptionFailed { .. } | RouteError::ContactFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            details: self.details(),
        })
    }
}
