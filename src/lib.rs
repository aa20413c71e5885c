//! HTTP backend relaying newsletter subscriptions and contact form
//! submissions to an SMTP relay.

pub mod app;
pub mod domain;
pub mod email_client;
pub mod routes;
