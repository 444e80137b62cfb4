//! Request extractors that report failures through [`AppError`].

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::{AppError, PageError};

/// `axum::Json` with its rejection mapped to a 400 `VALIDATION_ERROR`.
///
/// A body with missing required fields or wrong types is a client
/// validation error, not a 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` whose rejection is the JSON error envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `axum::extract::Path` for HTML pages; a bad segment renders the error page.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(PageError))]
pub struct PagePath<T>(pub T);
