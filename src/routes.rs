pub use contact::contact;
pub use delivery::{
    deliver,
    DeliveryError,
    Step,
};
pub use errors::RouteError;
pub use greet::greet;
pub use health_check::health_check;
pub use json_form::JsonForm;
pub use subscriptions::subscribe;

mod contact;
mod delivery;
mod errors;
mod greet;
mod health_check;
mod json_form;
mod subscriptions;

/// Receives every notification, whoever submitted the form.
pub const OPERATOR_EMAIL: &str = "info@orangelilies.com";
pub const SENDER_NAME: &str = "Orange Lilies";

/// Local wall clock time a submission was received at, e.g.
/// `3/14/2024, 9:26:53 AM`.
fn received_at() -> String {
    chrono::Local::now()
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}
