//! HTTP handlers for this service.

use axum::extract::{Path, State};
use axum::{Router, routing};

use super::{
	CreatedStudent,
	DeleteStudentResponse,
	FetchStudentsRequest,
	FetchStudentsResponse,
	NewStudent,
	Student,
	StudentService,
	StudentUpdate,
};
use crate::http::extract::{Json, Query};
use crate::http::response::{Created, NoContent};
use crate::middleware::cors;
use crate::runtime;

impl From<StudentService> for Router
{
	fn from(svc: StudentService) -> Self
	{
		let root = Router::new()
			.route("/", routing::get(get_many))
			.route_layer(cors::permissive())
			.route("/", routing::post(create))
			.with_state(svc.clone());

		let by_id = Router::new()
			.route("/{student_id}", routing::get(get_single))
			.route_layer(cors::permissive())
			.route("/{student_id}", routing::patch(update))
			.route("/{student_id}", routing::delete(delete))
			.with_state(svc);

		root.merge(by_id)
	}
}

/// Fetch students.
///
/// Both filters are optional; without any, the whole collection is returned.
#[tracing::instrument(skip(svc), err(level = "debug"))]
#[utoipa::path(get, path = "/students", tag = "Students", params(FetchStudentsRequest), responses(
	(status = 200, body = FetchStudentsResponse),
	(status = 400, description = "malformed query parameters"),
))]
pub(crate) async fn get_many(
	State(svc): State<StudentService>,
	Query(req): Query<FetchStudentsRequest>,
) -> runtime::Result<Json<FetchStudentsResponse>>
{
	let res = svc.fetch_students(req).await?;

	Ok(Json(res))
}

/// Create a new student.
#[tracing::instrument(skip(svc), err(level = "debug"))]
#[utoipa::path(post, path = "/students", tag = "Students", request_body = NewStudent, responses(
	(status = 201, body = CreatedStudent),
	(status = 422, description = "request body is missing required fields or has wrong types"),
))]
pub(crate) async fn create(
	State(svc): State<StudentService>,
	Json(req): Json<NewStudent>,
) -> runtime::Result<Created<CreatedStudent>>
{
	let res = svc.create_student(req).await?;

	Ok(Created(res))
}

/// Fetch a specific student by their ID.
#[tracing::instrument(skip(svc), err(level = "debug"))]
#[utoipa::path(get, path = "/students/{student_id}", tag = "Students", responses(
	(status = 200, body = Student),
	(status = 404, description = "no student with the given ID exists"),
))]
pub(crate) async fn get_single(
	State(svc): State<StudentService>,
	Path(student_id): Path<String>,
) -> runtime::Result<Json<Student>>
{
	let res = svc.fetch_student(&student_id).await?;

	Ok(Json(res))
}

/// Update an existing student.
///
/// Only the fields present in the request body are written.
#[tracing::instrument(skip(svc), err(level = "debug"))]
#[utoipa::path(patch, path = "/students/{student_id}", tag = "Students", request_body = StudentUpdate, responses(
	(status = 204, description = "the student was updated"),
	(status = 404, description = "no student with the given ID exists"),
	(status = 422, description = "request body has fields of the wrong type"),
))]
pub(crate) async fn update(
	State(svc): State<StudentService>,
	Path(student_id): Path<String>,
	Json(req): Json<StudentUpdate>,
) -> runtime::Result<NoContent>
{
	svc.update_student(&student_id, req).await?;

	Ok(NoContent)
}

/// Delete a student.
#[tracing::instrument(skip(svc), err(level = "debug"))]
#[utoipa::path(delete, path = "/students/{student_id}", tag = "Students", responses(
	(status = 200, body = DeleteStudentResponse),
	(status = 404, description = "no student with the given ID exists"),
))]
pub(crate) async fn delete(
	State(svc): State<StudentService>,
	Path(student_id): Path<String>,
) -> runtime::Result<Json<DeleteStudentResponse>>
{
	let res = svc.delete_student(&student_id).await?;

	Ok(Json(res))
}
