use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{
    web,
    FromRequest,
    HttpMessage,
    HttpRequest,
};
use serde::de::DeserializeOwned;

use crate::routes::RouteError;

/// JSON form body, lenient about what counts as "no form".
///
/// A request without a body, with a blank body, or with a content type
/// other than `application/json` yields `T::default()` so that field
/// validation reports what is missing. Only a JSON body that fails to
/// deserialize is rejected.
#[derive(Debug)]
pub struct JsonForm<T>(pub T);

impl<T> JsonForm<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for JsonForm<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for JsonForm<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let is_json = req.content_type().eq_ignore_ascii_case("application/json");
        let body = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let body = body.await?;
            if !is_json || body.iter().all(u8::is_ascii_whitespace) {
                return Ok(JsonForm(T::default()));
            }
            let form: T = serde_json::from_slice(&body).map_err(|source| {
                tracing::warn!("Invalid json body: {}", source);
                actix_web::Error::from(RouteError::from(source))
            })?;
            Ok::<_, actix_web::Error>(JsonForm(form))
        })
    }
}
