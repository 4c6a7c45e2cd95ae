//! JSON request bodies that are decoded by the handler, after its path
//! identifiers have resolved. An unknown id answers 404 whatever the body
//! holds.

use std::marker::PhantomData;

use actix_web::dev::Payload;
use actix_web::web::Bytes;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub struct JsonBody<T> {
    raw: Result<Bytes, ApiError>,
    _target: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> JsonBody<T> {
    pub fn decode(self) -> Result<T, ApiError> {
        let bytes = self.raw?;
        serde_json::from_slice(&bytes)
            .map_err(|err| ApiError::Validation(format!("Json deserialize error: {err}")))
    }
}

fn is_json(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(mime)) => {
            mime.subtype() == "json" || mime.suffix().is_some_and(|suffix| suffix == "json")
        }
        _ => false,
    }
}

impl<T: DeserializeOwned + 'static> FromRequest for JsonBody<T> {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = is_json(req);
        let bytes = Bytes::from_request(req, payload);

        Box::pin(async move {
            let raw = match bytes.await {
                Ok(_) if !json => Err(ApiError::Validation("Content type error".to_string())),
                Ok(bytes) => Ok(bytes),
                Err(err) => Err(ApiError::Validation(err.to_string())),
            };
            Ok(JsonBody {
                raw,
                _target: PhantomData,
            })
        })
    }
}
