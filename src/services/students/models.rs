//! Request / Response types for this service.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::StudentId;

/// A student's address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address
{
	/// The city the student lives in.
	pub city: String,

	/// The country the student lives in.
	pub country: String,
}

/// A student record.
#[derive(Debug, Serialize, ToSchema)]
pub struct Student
{
	/// The student's identifier.
	pub id: StudentId,

	/// The student's name.
	pub name: String,

	/// The student's age.
	pub age: i32,

	/// The student's address.
	pub address: Address,
}

/// Request payload for creating a new student.
///
/// All fields are required.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewStudent
{
	/// The student's name.
	pub name: String,

	/// The student's age.
	pub age: i32,

	/// The student's address.
	pub address: Address,
}

/// Response body for a successfully created student.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedStudent
{
	/// The identifier the store assigned to the new record.
	pub id: StudentId,
}

/// Request payload for updating an existing student.
///
/// Every field is optional; only the fields that are actually present in the
/// request body will be written.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct StudentUpdate
{
	/// A new name for the student.
	pub name: Option<String>,

	/// A new age for the student.
	pub age: Option<i32>,

	/// A new address for the student.
	///
	/// This replaces the address as a whole.
	pub address: Option<Address>,
}

impl StudentUpdate
{
	/// Whether this update would not change anything.
	pub fn is_empty(&self) -> bool
	{
		let Self { name, age, address } = self;

		name.is_none() && age.is_none() && address.is_none()
	}
}

/// Query parameters for fetching students.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FetchStudentsRequest
{
	/// Only include students whose country matches this value exactly.
	pub country: Option<String>,

	/// Only include students of at least this age.
	pub age: Option<i32>,
}

/// Response body for fetching students.
#[derive(Debug, Serialize, ToSchema)]
pub struct FetchStudentsResponse
{
	/// The matching records, in the store's natural order.
	pub data: Vec<Student>,
}

/// Response body for deleting a student.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteStudentResponse
{
	/// A confirmation message.
	pub message: String,
}

impl DeleteStudentResponse
{
	/// Create the confirmation message for a successful deletion.
	pub(super) fn new() -> Self
	{
		Self { message: String::from("Student deleted successfully") }
	}
}

#[cfg(test)]
mod tests
{
	use serde_json::json;

	use super::*;

	#[test]
	fn student_serializes_with_the_documented_shape()
	{
		let student = Student {
			id: "66b1f3a2c9e77a2b9c1d4e5f".parse().unwrap(),
			name: String::from("Alice"),
			age: 20,
			address: Address {
				city: String::from("Linz"),
				country: String::from("Austria"),
			},
		};

		assert_eq!(serde_json::to_value(&student).unwrap(), json!({
			"id": "66b1f3a2c9e77a2b9c1d4e5f",
			"name": "Alice",
			"age": 20,
			"address": { "city": "Linz", "country": "Austria" },
		}));
	}

	#[test]
	fn new_student_requires_all_fields()
	{
		let missing_age = json!({
			"name": "Alice",
			"address": { "city": "Linz", "country": "Austria" },
		});

		assert!(serde_json::from_value::<NewStudent>(missing_age).is_err());

		let missing_country = json!({
			"name": "Alice",
			"age": 20,
			"address": { "city": "Linz" },
		});

		assert!(serde_json::from_value::<NewStudent>(missing_country).is_err());

		let wrong_type = json!({
			"name": "Alice",
			"age": "twenty",
			"address": { "city": "Linz", "country": "Austria" },
		});

		assert!(serde_json::from_value::<NewStudent>(wrong_type).is_err());
	}

	#[test]
	fn update_fields_are_all_optional()
	{
		let update = serde_json::from_value::<StudentUpdate>(json!({})).unwrap();

		assert!(update.is_empty());

		let update = serde_json::from_value::<StudentUpdate>(json!({ "age": 21 })).unwrap();

		assert!(!update.is_empty());
		assert_eq!(update.age, Some(21));
		assert_eq!(update.name, None);
		assert_eq!(update.address, None);
	}
}
