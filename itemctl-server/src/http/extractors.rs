//! Custom Axum extractors
//!
//! Rejections are mapped to [`ApiError`] so malformed ids and bodies come
//! back as JSON 400s before any handler code runs.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::models::ValidationError;

const ID_REASON: &str = "must be a base-10 64-bit integer";

fn parse_id(field: &'static str, raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        ApiError::Validation(ValidationError::InvalidFormat {
            field,
            reason: ID_REASON,
        })
    })
}

/// Extract the `{id}` segment as an `i64`
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        Ok(Self(parse_id("id", &id)?))
    }
}

/// Extract `{id}` and `{item_id}` from the nested membership route
pub struct MembershipIds {
    pub collection_id: i64,
    pub item_id: i64,
}

impl<S> FromRequestParts<S> for MembershipIds
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((collection_id, item_id)): Path<(String, String)> =
            Path::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        Ok(Self {
            collection_id: parse_id("collection id", &collection_id)?,
            item_id: parse_id("item id", &item_id)?,
        })
    }
}

/// JSON body extractor that ignores `Content-Type` and turns every decode
/// failure into a 400.
///
/// Only the first JSON value in the body is read; anything after it is
/// ignored. Top-level object keys match field names case-insensitively, and
/// a bare `null` body decodes like `{}`.
pub struct JsonBody<T>(pub T);

fn invalid_body(reason: &dyn std::fmt::Display) -> ApiError {
    tracing::debug!(error = %reason, "rejecting request body");
    ApiError::BadRequest {
        message: "invalid request body".to_string(),
    }
}

/// Read the leading JSON value and fold its object keys to lowercase.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let value = serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Value>()
        .next()
        .ok_or_else(|| invalid_body(&"empty body"))?
        .map_err(|e| invalid_body(&e))?;

    let fields = match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| (key.to_lowercase(), value))
            .collect::<Map<String, Value>>(),
        Value::Null => Map::new(),
        _ => return Err(invalid_body(&"body is not a JSON object")),
    };

    serde_json::from_value(Value::Object(fields)).map_err(|e| invalid_body(&e))
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;

        Ok(Self(decode_body(&bytes)?))
    }
}
