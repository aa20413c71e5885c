use std::convert::{
    TryFrom,
    TryInto,
};

use serde::Deserialize;

use crate::domain::{
    MalformedInput,
    RequiredField,
};

/// Body of `POST /api/contact`, as submitted.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct ContactRequest {
    pub name: RequiredField,
    pub email: RequiredField,
    pub subject: RequiredField,
    pub message: RequiredField,
}

impl TryFrom<ContactForm> for ContactRequest {
    type Error = MalformedInput;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let required = |value: Option<String>| -> Result<RequiredField, MalformedInput> {
            value.try_into().map_err(|_| {
                tracing::warn!("Missing required fields in contact form");
                MalformedInput::MissingContactFields
            })
        };
        Ok(Self {
            name: required(form.name)?,
            email: required(form.email)?,
            subject: required(form.subject)?,
            message: required(form.message)?,
        })
    }
}
