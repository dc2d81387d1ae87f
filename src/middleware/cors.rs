//! CORS layers for public routes.

use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer for read-only endpoints.
pub(crate) fn permissive() -> CorsLayer
{
	CorsLayer::permissive()
}
