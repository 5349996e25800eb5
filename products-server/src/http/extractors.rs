//! Custom Axum extractors
//!
//! None of these surface axum's plain-text rejections: ids and bodies
//! reject with `ApiError`, list paging never rejects.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{ListParams, Page};

/// Extract and parse an integer product id from the path
pub struct ProductId(pub i32);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId)?;

        let id = raw.parse::<i32>().map_err(|_| ApiError::InvalidId)?;
        Ok(Self(id))
    }
}

/// JSON body extractor whose rejection is `ApiError::InvalidPayload`.
///
/// Unlike `axum::Json` the `content-type` header is not required.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::InvalidPayload)?;

        let value = serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!("Rejected payload: {}", e);
            ApiError::InvalidPayload
        })?;

        Ok(Self(value))
    }
}

/// Paging window from `?count=&start=`.
///
/// Repeated keys keep their first value and anything unparsable falls
/// back to the defaults, so listing always succeeds.
pub struct ListPage(pub Page);

impl<S> FromRequestParts<S> for ListPage
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => pairs,
            Err(e) => {
                tracing::debug!("Ignoring query string: {}", e);
                Vec::new()
            }
        };

        Ok(Self(Page::from(ListParams::from_pairs(pairs))))
    }
}
