//! Helper types for talking to the document store.

use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use url::Url;

mod error;
pub use error::{DatabaseError, DatabaseResult};

/// The database used when the connection string does not name one.
pub const DEFAULT_DATABASE: &str = "student_db";

/// Connects to the document store.
///
/// The returned handle owns a connection pool that is shared by all clones;
/// this function is called exactly once, at startup. The driver establishes
/// connections lazily, so a reachable store is not required for this to
/// succeed, only a well-formed connection string.
pub async fn connect(uri: &Url) -> DatabaseResult<Database>
{
	let options = ClientOptions::parse(uri.as_str()).await?;
	let client = Client::with_options(options)?;

	Ok(client
		.default_database()
		.unwrap_or_else(|| client.database(DEFAULT_DATABASE)))
}
