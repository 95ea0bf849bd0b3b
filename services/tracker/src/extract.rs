//! Extractors that reject malformed input with the service's JSON error body

use axum::{
    Form, Json, async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Request body decoded from `application/json` or
/// `application/x-www-form-urlencoded`
#[derive(Debug)]
pub struct Payload<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(payload) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
            return Ok(Payload(payload));
        }

        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(Payload(payload))
    }
}

/// Query string decoded into `T`
#[derive(Debug)]
pub struct Params<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for Params<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(Params(params))
    }
}
