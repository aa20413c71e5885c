pub use contact_request::{
    ContactForm,
    ContactRequest,
};
pub use errors::MalformedInput;
pub use required_field::RequiredField;
pub use subscription_request::{
    SubscriptionForm,
    SubscriptionRequest,
};

mod contact_request;
mod errors;
mod required_field;
mod subscription_request;
