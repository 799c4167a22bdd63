use axum::extract::FromRequestParts;
use serde::Serialize;

use crate::error::BlogServiceError;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod user;

/// `Path` extractor whose rejection (e.g. a non-integer id) is rendered as a
/// JSON `BlogServiceError` instead of axum's plain-text body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(BlogServiceError))]
pub struct IdPath<T>(pub T);

/// Narrows a path id to the `i32` key space; anything wider cannot name a
/// stored row and reports `missing`.
pub fn row_id(id: i64, missing: BlogServiceError) -> Result<i32, BlogServiceError> {
    i32::try_from(id).map_err(|_| missing)
}

/// `{"msg": ...}` body used by the favorite mutations and `GET /user`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}
