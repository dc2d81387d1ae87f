//! The main error type.
//!
//! This is returned by all fallible HTTP handlers, middlewares, etc.

use std::fmt;
use std::panic::Location;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::database::DatabaseError;

/// Type alias that defaults to our [`Error`] as the default error type, but is
/// still overridable and therefore compatible with [`std::result::Result`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Convenience type alias.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main runtime error type.
///
/// This is the only error type allowed to reach users!
pub struct Error
{
	/// We box this so our error type is only 1 pointer wide.
	inner: Box<Inner>,
}

/// The different kinds of errors that can occur at runtime.
#[derive(Debug, thiserror::Error)]
enum ErrorKind
{
	/// Request was somehow malformed.
	#[error(transparent)]
	BadRequest(BoxError),

	/// Request body was missing required fields or had wrong types.
	#[error(transparent)]
	UnprocessableEntity(BoxError),

	/// A resource does not exist.
	#[error("{what} not found")]
	NotFound
	{
		/// The thing that could not be found.
		what: String,
	},

	/// Something went wrong communicating with the database.
	#[error("database error; please report this incident")]
	Database(#[from] DatabaseError),

	/// An HTTP handler panicked, but was caught by middleware.
	#[error("something unexpected happened; please report this incident")]
	Panic,
}

/// The actual error data.
struct Inner
{
	/// What went wrong.
	kind: ErrorKind,

	/// Where the error was originally constructed.
	source_location: Location<'static>,
}

impl Error
{
	/// Create a new [`Error`].
	#[track_caller]
	fn new(kind: ErrorKind) -> Self
	{
		Self {
			inner: Box::new(Inner { kind, source_location: *Location::caller() }),
		}
	}

	/// Returns the original error source.
	pub fn source(&self) -> &(dyn std::error::Error + Send + Sync + 'static)
	{
		&self.inner.kind
	}

	/// Returns the source code location of the original error source.
	pub fn source_location(&self) -> Location<'static>
	{
		self.inner.source_location
	}

	/// Returns the appropriate HTTP status code to use in an error response.
	pub(crate) fn status(&self) -> StatusCode
	{
		match self.inner.kind {
			ErrorKind::BadRequest(_) => StatusCode::BAD_REQUEST,
			ErrorKind::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
			ErrorKind::NotFound { .. } => StatusCode::NOT_FOUND,
			ErrorKind::Database(_) | ErrorKind::Panic => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Indicate that an HTTP handler panicked but the panic was caught.
	#[track_caller]
	pub(crate) fn panic() -> Self
	{
		Self::new(ErrorKind::Panic)
	}

	/// Reject a request because it was malformed in some way.
	#[track_caller]
	pub(crate) fn bad_request(reason: impl Into<BoxError>) -> Self
	{
		Self::new(ErrorKind::BadRequest(reason.into()))
	}

	/// Reject a request because its body was missing required fields or had
	/// fields of the wrong type.
	#[track_caller]
	pub(crate) fn unprocessable_entity(reason: impl Into<BoxError>) -> Self
	{
		Self::new(ErrorKind::UnprocessableEntity(reason.into()))
	}

	/// Reject a request because a requested resource was not found.
	#[track_caller]
	pub(crate) fn not_found(what: impl fmt::Display) -> Self
	{
		Self::new(ErrorKind::NotFound { what: what.to_string() })
	}
}

impl From<DatabaseError> for Error
{
	#[track_caller]
	fn from(error: DatabaseError) -> Self
	{
		Self::new(ErrorKind::Database(error))
	}
}

impl fmt::Debug for Error
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(fmt, "[{}]: {}", self.source_location(), self.source())
	}
}

impl fmt::Display for Error
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(self.source(), fmt)
	}
}

impl IntoResponse for Error
{
	fn into_response(self) -> Response
	{
		#[derive(Debug, Serialize)]
		#[allow(clippy::missing_docs_in_private_items)]
		struct ErrorResponse
		{
			message: String,

			#[cfg(not(feature = "production"))]
			#[serde(skip_serializing_if = "Option::is_none")]
			debug_info: Option<String>,
		}

		let message = self.to_string();

		#[cfg(not(feature = "production"))]
		let debug_info = Some(format!("{self:?}"));

		let response = ErrorResponse {
			message,

			#[cfg(not(feature = "production"))]
			debug_info,
		};

		(self.status(), Json(response)).into_response()
	}
}
