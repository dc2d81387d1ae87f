//! A service for managing student records.
//!
//! Every operation is a single request/response cycle against the store; the
//! store is responsible for per-document atomicity, and failures propagate
//! directly to the caller.

use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use serde::{Deserialize, Serialize};

use crate::database::{DatabaseError, DatabaseResult};

mod error;
pub use error::{Error, Result};

mod id;
pub use id::{ParseStudentIdError, StudentId};

mod models;
pub use models::{
	Address,
	CreatedStudent,
	DeleteStudentResponse,
	FetchStudentsRequest,
	FetchStudentsResponse,
	NewStudent,
	Student,
	StudentUpdate,
};

pub(crate) mod http;

/// The name of the collection holding student records.
pub const COLLECTION: &str = "students";

/// How a student record is laid out in the store.
#[derive(Debug, Serialize, Deserialize)]
struct StudentDocument
{
	/// Left unset on insert so the store assigns one.
	#[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
	id: Option<ObjectId>,

	name: String,
	age: i32,
	address: Address,
}

/// A service for managing student records.
#[derive(Debug, Clone)]
pub struct StudentService
{
	collection: Collection<StudentDocument>,
}

impl StudentService
{
	/// Create a new [`StudentService`].
	pub fn new(database: &mongodb::Database) -> Self
	{
		Self { collection: database.collection(COLLECTION) }
	}

	/// Create a new student record.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	async fn create_student(&self, req: NewStudent) -> Result<CreatedStudent>
	{
		let document = StudentDocument {
			id: None,
			name: req.name,
			age: req.age,
			address: req.address,
		};

		let result = self
			.collection
			.insert_one(&document)
			.await
			.map_err(DatabaseError::from)?;

		let student_id = match result.inserted_id {
			Bson::ObjectId(object_id) => StudentId::from(object_id),
			other => return Err(DatabaseError::UnexpectedIdType(other).into()),
		};

		tracing::debug!(%student_id, "created student");

		Ok(CreatedStudent { id: student_id })
	}

	/// Fetch all student records matching the given filters.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	async fn fetch_students(&self, req: FetchStudentsRequest) -> Result<FetchStudentsResponse>
	{
		let mut cursor = self
			.collection
			.find(list_filter(&req))
			.await
			.map_err(DatabaseError::from)?;

		let mut data = Vec::new();

		while let Some(document) = cursor.try_next().await.map_err(DatabaseError::from)? {
			data.push(map_document(document)?);
		}

		Ok(FetchStudentsResponse { data })
	}

	/// Fetch the student record with the given identifier.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	async fn fetch_student(&self, student_id: &str) -> Result<Student>
	{
		let student_id = student_id.parse::<StudentId>()?;
		let document = self
			.collection
			.find_one(doc! { "_id": student_id.as_object_id() })
			.await
			.map_err(DatabaseError::from)?
			.ok_or(Error::StudentDoesNotExist { student_id })?;

		Ok(map_document(document)?)
	}

	/// Update the student record with the given identifier.
	///
	/// Only the fields present in `update` are written; everything else keeps
	/// its prior value.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	async fn update_student(&self, student_id: &str, update: StudentUpdate) -> Result<()>
	{
		let student_id = student_id.parse::<StudentId>()?;

		// The store rejects an empty `$set`, so an empty update degenerates
		// to an existence check.
		if update.is_empty() {
			return self
				.collection
				.find_one(doc! { "_id": student_id.as_object_id() })
				.await
				.map_err(DatabaseError::from)?
				.map(|_| ())
				.ok_or(Error::StudentDoesNotExist { student_id });
		}

		let result = self
			.collection
			.update_one(
				doc! { "_id": student_id.as_object_id() },
				doc! { "$set": update_document(update) },
			)
			.await
			.map_err(DatabaseError::from)?;

		if result.matched_count == 0 {
			return Err(Error::StudentDoesNotExist { student_id });
		}

		tracing::debug!(%student_id, "updated student");

		Ok(())
	}

	/// Delete the student record with the given identifier.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	async fn delete_student(&self, student_id: &str) -> Result<DeleteStudentResponse>
	{
		let student_id = student_id.parse::<StudentId>()?;
		let result = self
			.collection
			.delete_one(doc! { "_id": student_id.as_object_id() })
			.await
			.map_err(DatabaseError::from)?;

		if result.deleted_count == 0 {
			return Err(Error::StudentDoesNotExist { student_id });
		}

		tracing::debug!(%student_id, "deleted student");

		Ok(DeleteStudentResponse::new())
	}
}

/// Builds the filter document for a list request.
fn list_filter(req: &FetchStudentsRequest) -> Document
{
	let mut filter = Document::new();

	if let Some(ref country) = req.country {
		filter.insert("address.country", country.as_str());
	}

	if let Some(min_age) = req.age {
		filter.insert("age", doc! { "$gte": min_age });
	}

	filter
}

/// Builds the `$set` document for a partial update.
///
/// Contains exactly the fields that were present in the request body.
fn update_document(update: StudentUpdate) -> Document
{
	let mut document = Document::new();

	if let Some(name) = update.name {
		document.insert("name", name);
	}

	if let Some(age) = update.age {
		document.insert("age", age);
	}

	if let Some(address) = update.address {
		document.insert("address", doc! {
			"city": address.city,
			"country": address.country,
		});
	}

	document
}

/// Maps a stored document into its response representation.
fn map_document(document: StudentDocument) -> DatabaseResult<Student>
{
	let id = document.id.ok_or(DatabaseError::MissingDocumentId)?;

	Ok(Student {
		id: StudentId::from(id),
		name: document.name,
		age: document.age,
		address: document.address,
	})
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn empty_list_request_scans_the_whole_collection()
	{
		let filter = list_filter(&FetchStudentsRequest::default());

		assert!(filter.is_empty());
	}

	#[test]
	fn country_filter_matches_the_embedded_field()
	{
		let filter = list_filter(&FetchStudentsRequest {
			country: Some(String::from("Austria")),
			age: None,
		});

		assert_eq!(filter, doc! { "address.country": "Austria" });
	}

	#[test]
	fn age_filter_is_a_lower_bound()
	{
		let filter = list_filter(&FetchStudentsRequest { country: None, age: Some(18) });

		assert_eq!(filter, doc! { "age": { "$gte": 18 } });
	}

	#[test]
	fn filters_compose()
	{
		let filter = list_filter(&FetchStudentsRequest {
			country: Some(String::from("Austria")),
			age: Some(18),
		});

		assert_eq!(filter, doc! {
			"address.country": "Austria",
			"age": { "$gte": 18 },
		});
	}

	#[test]
	fn update_document_contains_exactly_the_provided_fields()
	{
		let update = update_document(StudentUpdate {
			age: Some(21),
			..Default::default()
		});

		assert_eq!(update, doc! { "age": 21 });

		let update = update_document(StudentUpdate {
			name: Some(String::from("Alice")),
			age: None,
			address: Some(Address {
				city: String::from("Vienna"),
				country: String::from("Austria"),
			}),
		});

		assert_eq!(update, doc! {
			"name": "Alice",
			"address": { "city": "Vienna", "country": "Austria" },
		});
	}

	#[test]
	fn documents_without_an_id_do_not_map()
	{
		let document = StudentDocument {
			id: None,
			name: String::from("Alice"),
			age: 20,
			address: Address {
				city: String::from("Linz"),
				country: String::from("Austria"),
			},
		};

		assert!(matches!(
			map_document(document),
			Err(DatabaseError::MissingDocumentId)
		));
	}

	#[test]
	fn inserts_leave_the_id_to_the_store()
	{
		let document = StudentDocument {
			id: None,
			name: String::from("Alice"),
			age: 20,
			address: Address {
				city: String::from("Linz"),
				country: String::from("Austria"),
			},
		};

		let serialized = mongodb::bson::to_document(&document).unwrap();

		assert!(!serialized.contains_key("_id"));
	}
}
