use mongodb::bson::Bson;
use thiserror::Error;

/// Convenience type alias.
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// An error returned by the document store.
#[derive(Debug, Error)]
pub enum DatabaseError
{
	/// The driver reported an error.
	#[error("database error: {0}")]
	Driver(#[from] mongodb::error::Error),

	/// A document came back without an `_id`.
	///
	/// The store assigns one on every insert, so this should never actually
	/// happen.
	#[error("document is missing an `_id`")]
	MissingDocumentId,

	/// An insert reported an `_id` that is not an ObjectId.
	#[error("store assigned a non-ObjectId `_id`: {0}")]
	UnexpectedIdType(Bson),
}
