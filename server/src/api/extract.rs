//! axum extractors whose rejections render through [`ApiError`], so clients
//! get the same `{"detail": ...}` body for malformed input as for failed
//! validation.

use super::ApiError;
use axum::extract::{FromRequest, FromRequestParts};
use serde::de::{self, Deserialize, Deserializer};

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct QueryParams<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathParam<T>(pub T);

/// A row id taken from the path. Any integer is accepted; one outside the
/// store's id range cannot name a row and is held as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowId(pub Option<i32>);

impl RowId {
    /// `None` when `raw` is not an integer at all.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(raw.parse().ok()))
    }
}

impl<'de> Deserialize<'de> for RowId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| de::Error::custom(format!("`{raw}` is not an integer id")))
    }
}
