//! Extractors whose rejections are reported as [`AppError`] so malformed
//! input gets the same JSON error body as every other failure.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::{header, HeaderMap};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_path_to_error::Segment;
use wishlist_core::error::CoreError;
use wishlist_core::validation::FieldViolation;

use crate::error::AppError;

/// JSON body extractor with an [`AppError`] rejection.
///
/// Syntax errors and a missing `Content-Type: application/json` become 400
/// `BAD_REQUEST`. A body of the wrong shape becomes 400 `VALIDATION_ERROR`
/// whose violation names the offending field.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::BadRequest(
                "Expected request with `Content-Type: application/json`".into(),
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        decode_json(&bytes).map(AppJson)
    }
}

/// `axum::extract::Path` with an [`AppError`] rejection, so a non-numeric id
/// is a 400 before any storage access.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `axum::extract::Query` with an [`AppError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut de).map_err(body_error)?;
    de.end().map_err(|err| {
        AppError::BadRequest(format!("Failed to parse the request body as JSON: {err}"))
    })?;
    Ok(value)
}

/// Map a deserialization failure onto the error body. Only data errors carry
/// a field path; syntax and truncation errors are plain bad requests.
fn body_error(err: serde_path_to_error::Error<serde_json::Error>) -> AppError {
    if err.inner().classify() != Category::Data {
        return AppError::BadRequest(format!(
            "Failed to parse the request body as JSON: {}",
            err.inner()
        ));
    }

    let mut path: Vec<String> = err.path().iter().filter_map(segment_name).collect();
    let text = err.inner().to_string();
    let message = match text.rsplit_once(" at line ") {
        Some((message, _)) => message.to_string(),
        None => text,
    };

    // A missing field is reported against its parent, so name it explicitly.
    let missing = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'))
        .map(str::to_string);
    let code = match missing {
        Some(field) => {
            path.push(field);
            "required"
        }
        None => "invalid_type",
    };

    AppError::Core(CoreError::Validation(vec![FieldViolation::at(
        path, code, message,
    )]))
}

fn segment_name(segment: &Segment) -> Option<String> {
    match segment {
        Segment::Seq { index } => Some(index.to_string()),
        Segment::Map { key } => Some(key.clone()),
        Segment::Enum { variant } => Some(variant.clone()),
        Segment::Unknown => None,
    }
}
