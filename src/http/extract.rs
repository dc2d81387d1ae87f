//! Wrappers around [`axum`]'s extractors.
//!
//! These reject with [`runtime::Error`] instead of axum's plain-text
//! rejections, so every error that reaches a client has the same JSON shape.

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request;
use axum::response::IntoResponse;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http;
use crate::runtime;

/// Like [`axum::Json`], but rejects with a 422 carrying the deserializer's
/// field-level detail.
#[derive(Debug)]
pub(crate) struct Json<T>(pub T);

impl<T, S> FromRequest<S> for Json<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = runtime::Error;

	async fn from_request(req: http::Request, state: &S) -> Result<Self, Self::Rejection>
	{
		<axum::Json<T> as FromRequest<S>>::from_request(req, state)
			.await
			.map(|axum::Json(value)| Self(value))
			.map_err(runtime::Error::unprocessable_entity)
	}
}

impl<T> IntoResponse for Json<T>
where
	T: Serialize,
{
	fn into_response(self) -> http::Response
	{
		axum::Json(self.0).into_response()
	}
}

/// Like [`axum::extract::Query`], but rejects with a 400.
#[derive(Debug)]
pub(crate) struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = runtime::Error;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection>
	{
		<axum::extract::Query<T> as FromRequestParts<S>>::from_request_parts(parts, state)
			.await
			.map(|axum::extract::Query(value)| Self(value))
			.map_err(runtime::Error::bad_request)
	}
}
