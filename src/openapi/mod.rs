//! Everything related to [OpenAPI].
//!
//! This project uses the [`utoipa`] crate for generating an OpenAPI
//! specification from code. The [`Spec`] struct in this module lists out all
//! the relevant types, routes, and other metadata that will be included in
//! the spec. The generated document is served at `/docs/openapi.json` and can
//! be printed with the `generate-spec` CLI subcommand.
//!
//! [OpenAPI]: https://spec.openapis.org/oas/latest.html

use utoipa::OpenApi;

use crate::services::students;

/// The API's OpenAPI specification.
#[derive(Debug, Clone, Copy, OpenApi)]
#[openapi(
  info(
    title = "Student API",
    description = "A record-management service for student records.",
    license(
      name = "Licensed under the GPLv3",
      url = "https://www.gnu.org/licenses/gpl-3.0",
    ),
  ),
  paths(
    crate::services::students::http::get_many,
    crate::services::students::http::create,
    crate::services::students::http::get_single,
    crate::services::students::http::update,
    crate::services::students::http::delete,

    crate::services::health::http::get,
  ),
  components(schemas(
    students::Student,
    students::StudentId,
    students::Address,
    students::NewStudent,
    students::CreatedStudent,
    students::StudentUpdate,
    students::FetchStudentsResponse,
    students::DeleteStudentResponse,
  )),
)]
pub struct Spec;

impl Spec
{
	/// Create a new [`Spec`].
	pub fn new() -> Self
	{
		Self
	}

	/// Serializes the spec as JSON.
	pub fn as_json(&self) -> serde_json::Result<String>
	{
		Self::openapi().to_pretty_json()
	}
}

impl Default for Spec
{
	fn default() -> Self
	{
		Self::new()
	}
}

/// Serves the spec over HTTP.
pub(crate) async fn serve() -> axum::Json<utoipa::openapi::OpenApi>
{
	axum::Json(Spec::openapi())
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn spec_lists_every_operation()
	{
		let spec = Spec::openapi();
		let paths = &spec.paths.paths;

		assert!(paths.contains_key("/students"));
		assert!(paths.contains_key("/students/{student_id}"));
		assert!(paths.contains_key("/health"));
	}

	#[test]
	fn spec_serializes()
	{
		assert!(Spec::new().as_json().is_ok());
	}
}
