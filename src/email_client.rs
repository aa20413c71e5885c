pub use client::{
    Mailer,
    SmtpClient,
};
pub use errors::RelayError;
pub use message::{
    OutboundMessage,
    Sender,
};

mod client;
mod errors;
mod message;
