//! The Student API.
//!
//! This crate implements a small record-management service: HTTP requests are
//! translated into document-database operations on a single collection of
//! student records, and the results are mapped back into JSON responses.

/*
 * Student API - a record-management service for student records.
 * Copyright (C) 2026  AlphaKeks <alphakeks@dawn>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

use axum::routing;

pub mod setup;
pub mod runtime;
pub mod signal;
pub mod openapi;

pub mod services;
pub mod database;

mod middleware;
mod http;

/// Create the server that will run the API.
///
/// The returned router is what we pass to [`axum::serve()`].
pub async fn server(config: &runtime::Config) -> Result<axum::Router, setup::Error>
{
	use self::services::{HealthService, StudentService};

	let database = database::connect(config.mongo_uri()).await?;

	let health_svc = HealthService::new();
	let student_svc = StudentService::new(&database);

	let server = axum::Router::new()
		.route("/docs/openapi.json", routing::get(openapi::serve))
		.nest("/health", axum::Router::from(health_svc))
		.nest("/students", axum::Router::from(student_svc))
		.layer(middleware::panic_handler::layer())
		.layer(middleware::trace::layer())
		.layer(middleware::request_id::layer());

	Ok(server)
}
