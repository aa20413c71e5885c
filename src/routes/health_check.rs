use actix_web::{
    web,
    HttpResponse,
};
use serde::Serialize;

use crate::app::{
    EmailClientSettings,
    EmailConfigStatus,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthReport {
    status: &'static str,
    email_config: EmailConfigStatus,
}

/// Reports which relay settings are configured. The relay itself is never
/// contacted, so this always succeeds.
pub async fn health_check(settings: web::Data<EmailClientSettings>) -> HttpResponse {
    HttpResponse::Ok().json(HealthReport {
        status: "ok",
        email_config: settings.status(),
    })
}
