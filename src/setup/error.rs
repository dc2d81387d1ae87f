use thiserror::Error;

use crate::database::DatabaseError;

/// The different errors that can happen in [`server()`].
///
/// [`server()`]: crate::server
#[derive(Debug, Error)]
pub enum Error
{
	/// Something went wrong connecting to the database.
	#[error("failed to setup database: {0}")]
	Database(#[from] DatabaseError),
}
