//! The identifier type for student records.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::{self, ObjectId};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;
use utoipa::ToSchema;

/// A unique identifier for a student record.
///
/// The store assigns one of these to every document on insert. At the HTTP
/// boundary it is rendered as a 24-character lowercase hex string; not every
/// string is a valid identifier, so parsing is explicit and fallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[schema(value_type = String, example = "66b1f3a2c9e77a2b9c1d4e5f")]
pub struct StudentId(ObjectId);

/// Error returned when parsing a [`StudentId`] from a string fails.
#[derive(Debug, Error)]
#[error("failed to parse student id: {0}")]
pub struct ParseStudentIdError(#[from] oid::Error);

impl StudentId
{
	/// Returns the store's native representation of this identifier.
	pub(crate) fn as_object_id(&self) -> ObjectId
	{
		self.0
	}
}

impl From<ObjectId> for StudentId
{
	fn from(object_id: ObjectId) -> Self
	{
		Self(object_id)
	}
}

impl FromStr for StudentId
{
	type Err = ParseStudentIdError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		ObjectId::parse_str(value)
			.map(Self)
			.map_err(ParseStudentIdError)
	}
}

impl fmt::Display for StudentId
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.0.to_hex(), fmt)
	}
}

impl Serialize for StudentId
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for StudentId
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = <String as Deserialize<'de>>::deserialize(deserializer)?;

		value.parse::<Self>().map_err(de::Error::custom)
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn parse_format_roundtrip()
	{
		let raw = "66b1f3a2c9e77a2b9c1d4e5f";
		let student_id = raw.parse::<StudentId>().unwrap();

		assert_eq!(student_id.to_string(), raw);
	}

	#[test]
	fn reject_garbage()
	{
		assert!("not-an-id".parse::<StudentId>().is_err());
		assert!("".parse::<StudentId>().is_err());
		assert!("66b1f3a2".parse::<StudentId>().is_err());
		assert!("zzzzzzzzzzzzzzzzzzzzzzzz".parse::<StudentId>().is_err());
	}

	#[test]
	fn serializes_as_a_plain_string()
	{
		let student_id = "66b1f3a2c9e77a2b9c1d4e5f".parse::<StudentId>().unwrap();
		let json = serde_json::to_value(student_id).unwrap();

		assert_eq!(json, serde_json::json!("66b1f3a2c9e77a2b9c1d4e5f"));
	}

	#[test]
	fn deserializes_from_a_plain_string()
	{
		let student_id =
			serde_json::from_value::<StudentId>(serde_json::json!("66b1f3a2c9e77a2b9c1d4e5f"))
				.unwrap();

		assert_eq!(student_id.to_string(), "66b1f3a2c9e77a2b9c1d4e5f");
	}
}
