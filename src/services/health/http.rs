//! HTTP handlers for this service.

use axum::extract::State;
use axum::{Router, routing};

use super::HealthService;

impl From<HealthService> for Router
{
	fn from(svc: HealthService) -> Self
	{
		Router::new().route("/", routing::get(get)).with_state(svc)
	}
}

/// (͡ ͡° ͜ つ ͡͡°)
#[utoipa::path(get, path = "/health", tag = "Health", responses(
	(status = 200, description = "the API is healthy"),
))]
pub(crate) async fn get(State(svc): State<HealthService>) -> &'static str
{
	svc.hello().await
}
