use std::net::TcpListener;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{
    web,
    App,
    HttpResponse,
    HttpServer,
};
use tracing_actix_web::TracingLogger;

use crate::app::configuration::{
    EmailClientSettings,
    Settings,
};
use crate::email_client::{
    Mailer,
    RelayError,
    SmtpClient,
};
use crate::routes::*;

pub struct RelayApp {
    pub server: Result<Server, std::io::Error>,
    pub port: u16,
}

impl RelayApp {
    /// Bind the listener and build the server on top of `mailer`.
    ///
    /// The server does nothing until it is awaited (or spawned).
    pub fn from(configuration: Settings, mailer: Arc<dyn Mailer>) -> Result<RelayApp, std::io::Error> {
        let tcp_listener = TcpListener::bind(configuration.application.binding_address())?;
        let port = tcp_listener.local_addr()?.port();
        let mailer: web::Data<dyn Mailer> = web::Data::from(mailer);
        let email_settings = web::Data::new(configuration.email_client);

        // HttpServer handles all transport level concerns
        let server = HttpServer::new(move || {
            // App is where all the application logic lives: routing, middlewares, request
            // handlers, etc.
            App::new()
                .wrap(TracingLogger::default())
                .wrap(cors())
                // a known path hit with another method is a 404 as well, not a 405
                .service(
                    web::resource("/")
                        .route(web::get().to(greet))
                        .route(web::head().to(greet))
                        .default_service(web::to(not_found)),
                )
                .service(
                    web::resource("/api/subscribe")
                        .route(web::post().to(subscribe))
                        .default_service(web::to(not_found)),
                )
                .service(
                    web::resource("/api/contact")
                        .route(web::post().to(contact))
                        .default_service(web::to(not_found)),
                )
                .service(
                    web::resource("/api/health")
                        .route(web::get().to(health_check))
                        .route(web::head().to(health_check))
                        .default_service(web::to(not_found)),
                )
                .app_data(mailer.clone())
                .app_data(email_settings.clone())
        })
        .backlog(configuration.application.max_pending_connections)
        .listen(tcp_listener)
        .map(HttpServer::run);
        Ok(RelayApp { server, port })
    }

    pub fn smtp_client(client_config: &EmailClientSettings) -> Result<SmtpClient, RelayError> {
        let status = client_config.status();
        tracing::info!(
            host = ?status.host,
            port = ?status.port,
            secure = client_config.secure,
            user = ?status.user,
            pass = ?status.pass,
            accept_invalid_certs = client_config.accept_invalid_certs,
            "Email configuration"
        );
        SmtpClient::new(client_config)
    }
}

/// Any origin, method and header.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}
