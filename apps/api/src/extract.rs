//! Request extractors that report malformed input as `AppError` JSON.
//!
//! axum's own `Json`, `Query` and `Path` reject with plain-text bodies (and 422
//! for JSON that fails to deserialize). These wrappers route every rejection
//! through `AppError::Validation` so clients always see the `{"error": ...}`
//! shape with a 400.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
