//! The errors that can occur when interacting with this service.

use thiserror::Error;

use super::{ParseStudentIdError, StudentId};
use crate::database::DatabaseError;
use crate::runtime;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with the student service.
#[derive(Debug, Error)]
pub enum Error
{
	/// No record matches the given identifier.
	#[error("student with ID `{student_id}` does not exist")]
	StudentDoesNotExist
	{
		/// The identifier that did not match anything.
		student_id: StudentId,
	},

	/// The given identifier is not a well-formed identifier for the store.
	///
	/// Callers cannot tell this apart from [`Error::StudentDoesNotExist`];
	/// both map to a 404 at the HTTP boundary.
	#[error(transparent)]
	MalformedStudentId(#[from] ParseStudentIdError),

	/// Something went wrong communicating with the store.
	#[error(transparent)]
	Database(#[from] DatabaseError),
}

impl From<Error> for runtime::Error
{
	#[track_caller]
	fn from(error: Error) -> Self
	{
		match error {
			Error::StudentDoesNotExist { .. } | Error::MalformedStudentId(_) => {
				runtime::Error::not_found("Student")
			}
			Error::Database(error) => error.into(),
		}
	}
}

#[cfg(test)]
mod tests
{
	use axum::http::StatusCode;

	use super::*;

	#[test]
	fn missing_and_malformed_ids_are_indistinguishable()
	{
		let missing = Error::StudentDoesNotExist {
			student_id: "66b1f3a2c9e77a2b9c1d4e5f".parse().unwrap(),
		};
		let malformed = Error::MalformedStudentId(
			"definitely-not-an-object-id".parse::<StudentId>().unwrap_err(),
		);

		let missing = runtime::Error::from(missing);
		let malformed = runtime::Error::from(malformed);

		assert_eq!(missing.status(), StatusCode::NOT_FOUND);
		assert_eq!(malformed.status(), StatusCode::NOT_FOUND);
		assert_eq!(missing.to_string(), malformed.to_string());
	}
}
