use std::convert::{
    TryFrom,
    TryInto,
};

use serde::Deserialize;

use crate::domain::{
    MalformedInput,
    RequiredField,
};

/// Body of `POST /api/subscribe`, as submitted.
#[derive(Debug, Default, Deserialize)]
pub struct SubscriptionForm {
    pub email: Option<String>,
}

#[derive(Debug)]
pub struct SubscriptionRequest {
    pub email: RequiredField,
}

impl TryFrom<SubscriptionForm> for SubscriptionRequest {
    type Error = MalformedInput;

    fn try_from(form: SubscriptionForm) -> Result<Self, Self::Error> {
        let email = form.email.try_into().map_err(|e| {
            tracing::warn!("No email provided in request: {}", e);
            MalformedInput::MissingEmail
        })?;
        Ok(Self { email })
    }
}
