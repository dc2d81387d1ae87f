//! Typed HTTP responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::http;

/// A `201 Created` response with a JSON body.
#[derive(Debug)]
pub(crate) struct Created<T>(pub T);

impl<T> IntoResponse for Created<T>
where
	T: Serialize,
{
	fn into_response(self) -> http::Response
	{
		(StatusCode::CREATED, axum::Json(self.0)).into_response()
	}
}

/// A `204 No Content` response.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NoContent;

impl IntoResponse for NoContent
{
	fn into_response(self) -> http::Response
	{
		StatusCode::NO_CONTENT.into_response()
	}
}
