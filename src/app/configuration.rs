use std::env;

use config::{
    Config,
    ConfigError,
    Environment,
    File,
};
use custom_error::custom_error;
use derivative::Derivative;
use serde::Serialize;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub max_pending_connections: u32,
    pub port: u16,
}

#[derive(Clone, Derivative, serde::Deserialize)]
#[derivative(Debug)]
pub struct EmailClientSettings {
    pub host: String,
    pub port: Option<u16>,
    pub secure: bool,
    pub user: String,
    #[derivative(Debug = "ignore")]
    pub password: String,
    pub accept_invalid_certs: bool,
}

/// Presence of each relay setting, safe to log or return to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailConfigStatus {
    pub host: Presence,
    pub port: Presence,
    pub user: Presence,
    pub pass: Presence,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Presence {
    Set,
    #[serde(rename = "Not Set")]
    NotSet,
}

impl From<bool> for Presence {
    fn from(is_set: bool) -> Self {
        if is_set {
            Presence::Set
        } else {
            Presence::NotSet
        }
    }
}

impl ApplicationSettings {
    pub fn binding_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl EmailClientSettings {
    pub fn status(&self) -> EmailConfigStatus {
        EmailConfigStatus {
            host: (!self.host.is_empty()).into(),
            port: self.port.is_some().into(),
            user: (!self.user.is_empty()).into(),
            pass: (!self.password.is_empty()).into(),
        }
    }
}

custom_error! {
/// Invalid configuration files or values.
pub ConfigurationError
    InvalidConfig{source:ConfigError} = "{source}",
}

/// Load the settings from the process environment, see [`load_from`].
///
/// # Examples
///
/// ```rust
/// use contact_relay::app::load_configuration;
///
/// assert!(load_configuration().is_ok());
/// ```
pub fn load_configuration() -> Result<Settings, ConfigurationError> {
    load_from(|key| env::var(key).ok())
}

/// Load the settings, later sources overriding earlier ones:
///
/// - built-in defaults
/// - the optional `configuration/base` file
/// - `APP_` prefixed environment variables, `__` separated
///   (e.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`)
/// - `PORT`, `SMTP_HOST`, `SMTP_PORT`, `SMTP_SECURE`, `EMAIL_USER`,
///   `EMAIL_PASS` and `SMTP_ACCEPT_INVALID_CERTS`, resolved through `lookup`
///
/// Empty values are treated as unset. An `SMTP_PORT` that is not a port
/// number is logged and ignored: the relay falls back to its default port
/// and the HTTP service still starts.
pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Settings, ConfigurationError> {
    let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

    let config = Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", 5000)?
        .set_default("application.max_pending_connections", 128)?
        .set_default("email_client.host", "")?
        .set_default("email_client.secure", false)?
        .set_default("email_client.user", "")?
        .set_default("email_client.password", "")?
        .set_default("email_client.accept_invalid_certs", true)?
        .add_source(File::with_name("configuration/base").required(false))
        .add_source(
            Environment::with_prefix("app")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("application.port", var("PORT"))?
        .set_override_option("email_client.host", var("SMTP_HOST"))?
        .set_override_option(
            "email_client.port",
            var("SMTP_PORT").and_then(|port| relay_port(&port)),
        )?
        .set_override_option("email_client.secure", var("SMTP_SECURE").map(|v| v == "true"))?
        .set_override_option("email_client.user", var("EMAIL_USER"))?
        .set_override_option("email_client.password", var("EMAIL_PASS"))?
        .set_override_option(
            "email_client.accept_invalid_certs",
            var("SMTP_ACCEPT_INVALID_CERTS").map(|v| v != "false"),
        )?
        .build()?;

    Ok(config.try_deserialize()?)
}

fn relay_port(value: &str) -> Option<i64> {
    match value.parse::<u16>() {
        Ok(port) => Some(i64::from(port)),
        Err(e) => {
            tracing::warn!("Ignoring SMTP_PORT `{}`: {}", value, e);
            None
        }
    }
}
