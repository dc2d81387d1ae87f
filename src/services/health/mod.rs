//! A very basic service that acts as a healthcheck.
//!
//! This doesn't really need to be a service, but it's the simplest example of
//! one, and can be used as a reference for writing new services.

pub(crate) mod http;

/// A service that simply responds if the API is healthy.
#[derive(Debug, Clone, Copy)]
pub struct HealthService {}

impl HealthService
{
	/// Create a new [`HealthService`].
	pub fn new() -> Self
	{
		Self {}
	}

	/// Says hello to the world.
	#[tracing::instrument(level = "trace", skip(self))]
	pub async fn hello(&self) -> &'static str
	{
		"(͡ ͡° ͜ つ ͡͡°)"
	}
}

impl Default for HealthService
{
	fn default() -> Self
	{
		Self::new()
	}
}
