//! HTTP plumbing shared by all services.

pub(crate) mod extract;
pub(crate) mod response;

/// The request type used throughout the API.
pub(crate) type Request = axum::extract::Request;

/// The response type used throughout the API.
pub(crate) type Response = axum::response::Response;
