use std::sync::Arc;

use contact_relay::app::{
    load_configuration,
    setup_tracing,
    RelayApp,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing("contact-relay".into(), "info".into());

    let configuration = load_configuration()?;
    let smtp_client = Arc::new(RelayApp::smtp_client(&configuration.email_client)?);

    // the server starts whether or not the relay can be reached
    let verifier = Arc::clone(&smtp_client);
    actix_web::rt::spawn(async move {
        match verifier.verify().await {
            Ok(()) => tracing::info!("SMTP relay is ready to take messages"),
            Err(e) => tracing::error!(
                code = %e.code,
                command = ?e.command,
                "SMTP connection error: {}",
                e.message
            ),
        }
    });

    let app = RelayApp::from(configuration, smtp_client)?;
    tracing::info!("Server is running on port {}", app.port);
    app.server?.await?;
    Ok(())
}
