//! End-to-end tests for the `/students` endpoints.
//!
//! These drive the real router against a live document store and are skipped
//! unless `MONGO_URI` is set (the same variable the server itself reads).

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use serde_json::{Value as JsonValue, json};
use tower::ServiceExt;

struct Context
{
	router: axum::Router,
}

impl Context
{
	async fn new() -> Option<Self>
	{
		if std::env::var("MONGO_URI").is_err() {
			eprintln!("WARNING: skipping; `MONGO_URI` is not set");
			return None;
		}

		let config = student_api::runtime::Config::new().expect("load config from environment");
		let router = student_api::server(&config).await.expect("setup server");

		Some(Self { router })
	}

	async fn send(&self, request: Request<Body>) -> (StatusCode, JsonValue)
	{
		let response = self
			.router
			.clone()
			.oneshot(request)
			.await
			.expect("router is infallible");

		let status = response.status();
		let body = response
			.into_body()
			.collect()
			.await
			.expect("collect response body")
			.to_bytes();

		let json = if body.is_empty() {
			JsonValue::Null
		} else {
			serde_json::from_slice(&body).expect("response body is JSON")
		};

		(status, json)
	}

	/// Creates a student and returns their ID.
	async fn create_student(&self, student: &JsonValue) -> String
	{
		let (status, body) = self.send(post("/students", student)).await;

		assert_eq!(status, StatusCode::CREATED);

		body["id"]
			.as_str()
			.expect("create response contains an id")
			.to_owned()
	}
}

fn get(uri: impl AsRef<str>) -> Request<Body>
{
	Request::builder()
		.method("GET")
		.uri(uri.as_ref())
		.body(Body::empty())
		.expect("valid request")
}

fn post(uri: impl AsRef<str>, body: &JsonValue) -> Request<Body>
{
	Request::builder()
		.method("POST")
		.uri(uri.as_ref())
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body.to_string()))
		.expect("valid request")
}

fn patch(uri: impl AsRef<str>, body: &JsonValue) -> Request<Body>
{
	Request::builder()
		.method("PATCH")
		.uri(uri.as_ref())
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body.to_string()))
		.expect("valid request")
}

fn delete(uri: impl AsRef<str>) -> Request<Body>
{
	Request::builder()
		.method("DELETE")
		.uri(uri.as_ref())
		.body(Body::empty())
		.expect("valid request")
}

/// A country name no other test run will have used.
fn unique_country() -> String
{
	format!("Testland-{}", ObjectId::new().to_hex())
}

#[tokio::test]
async fn create_then_fetch()
{
	let Some(ctx) = Context::new().await else { return };

	let country = unique_country();
	let alice = json!({
		"name": "Alice",
		"age": 20,
		"address": { "city": "Linz", "country": country },
	});

	let student_id = ctx.create_student(&alice).await;

	assert_eq!(student_id.len(), 24);

	let (status, body) = ctx.send(get(format!("/students/{student_id}"))).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!({
		"id": student_id,
		"name": "Alice",
		"age": 20,
		"address": { "city": "Linz", "country": country },
	}));
}

#[tokio::test]
async fn fetch_unknown_id()
{
	let Some(ctx) = Context::new().await else { return };

	let student_id = ObjectId::new().to_hex();
	let (status, _) = ctx.send(get(format!("/students/{student_id}"))).await;

	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fetch_malformed_id()
{
	let Some(ctx) = Context::new().await else { return };

	let (status, _) = ctx.send(get("/students/not-an-id")).await;

	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_with_missing_fields()
{
	let Some(ctx) = Context::new().await else { return };

	let missing_address = json!({ "name": "Alice", "age": 20 });
	let (status, body) = ctx.send(post("/students", &missing_address)).await;

	assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
	assert!(body["message"].is_string());

	let wrong_type = json!({
		"name": "Alice",
		"age": "twenty",
		"address": { "city": "Linz", "country": "Austria" },
	});
	let (status, _) = ctx.send(post("/students", &wrong_type)).await;

	assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_with_filters()
{
	let Some(ctx) = Context::new().await else { return };

	let country = unique_country();

	for (name, age) in [("Alice", 20), ("Bob", 25)] {
		ctx.create_student(&json!({
			"name": name,
			"age": age,
			"address": { "city": "Linz", "country": country },
		}))
		.await;
	}

	ctx.create_student(&json!({
		"name": "Carol",
		"age": 30,
		"address": { "city": "Berlin", "country": unique_country() },
	}))
	.await;

	let (status, body) = ctx.send(get(format!("/students?country={country}"))).await;
	let data = body["data"].as_array().expect("list response contains data");

	assert_eq!(status, StatusCode::OK);
	assert_eq!(data.len(), 2);
	assert!(data.iter().all(|student| student["address"]["country"] == country.as_str()));

	let (status, body) = ctx
		.send(get(format!("/students?country={country}&age=21")))
		.await;
	let data = body["data"].as_array().expect("list response contains data");

	assert_eq!(status, StatusCode::OK);
	assert_eq!(data.len(), 1);
	assert_eq!(data[0]["name"], "Bob");
	assert!(data.iter().all(|student| student["age"].as_i64() >= Some(21)));

	// No filters returns a superset of any filtered result.
	let (status, body) = ctx.send(get("/students")).await;
	let all = body["data"].as_array().expect("list response contains data");

	assert_eq!(status, StatusCode::OK);
	assert!(all.len() >= 3);
}

#[tokio::test]
async fn list_with_malformed_query()
{
	let Some(ctx) = Context::new().await else { return };

	let (status, _) = ctx.send(get("/students?age=twenty")).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_partial()
{
	let Some(ctx) = Context::new().await else { return };

	let country = unique_country();
	let student_id = ctx
		.create_student(&json!({
			"name": "Alice",
			"age": 20,
			"address": { "city": "Linz", "country": country },
		}))
		.await;

	let (status, body) = ctx
		.send(patch(format!("/students/{student_id}"), &json!({ "age": 21 })))
		.await;

	assert_eq!(status, StatusCode::NO_CONTENT);
	assert_eq!(body, JsonValue::Null);

	// Only the specified field changed.
	let (_, body) = ctx.send(get(format!("/students/{student_id}"))).await;

	assert_eq!(body["age"], 21);
	assert_eq!(body["name"], "Alice");
	assert_eq!(body["address"], json!({ "city": "Linz", "country": country }));

	let new_address = json!({ "city": "Vienna", "country": country });
	let (status, _) = ctx
		.send(patch(
			format!("/students/{student_id}"),
			&json!({ "address": new_address }),
		))
		.await;

	assert_eq!(status, StatusCode::NO_CONTENT);

	let (_, body) = ctx.send(get(format!("/students/{student_id}"))).await;

	assert_eq!(body["address"], new_address);
	assert_eq!(body["age"], 21);
}

#[tokio::test]
async fn update_with_empty_body()
{
	let Some(ctx) = Context::new().await else { return };

	let student_id = ctx
		.create_student(&json!({
			"name": "Alice",
			"age": 20,
			"address": { "city": "Linz", "country": unique_country() },
		}))
		.await;

	let (status, _) = ctx
		.send(patch(format!("/students/{student_id}"), &json!({})))
		.await;

	assert_eq!(status, StatusCode::NO_CONTENT);

	let unknown_id = ObjectId::new().to_hex();
	let (status, _) = ctx
		.send(patch(format!("/students/{unknown_id}"), &json!({})))
		.await;

	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_unknown_id()
{
	let Some(ctx) = Context::new().await else { return };

	let unknown_id = ObjectId::new().to_hex();
	let (status, _) = ctx
		.send(patch(format!("/students/{unknown_id}"), &json!({ "age": 21 })))
		.await;

	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_fetch()
{
	let Some(ctx) = Context::new().await else { return };

	let student_id = ctx
		.create_student(&json!({
			"name": "Alice",
			"age": 20,
			"address": { "city": "Linz", "country": unique_country() },
		}))
		.await;

	let (status, body) = ctx.send(delete(format!("/students/{student_id}"))).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!({ "message": "Student deleted successfully" }));

	let (status, _) = ctx.send(get(format!("/students/{student_id}"))).await;

	assert_eq!(status, StatusCode::NOT_FOUND);

	// Deleting again is a 404 as well.
	let (status, _) = ctx.send(delete(format!("/students/{student_id}"))).await;

	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health()
{
	let Some(ctx) = Context::new().await else { return };

	let response = ctx
		.router
		.clone()
		.oneshot(get("/health"))
		.await
		.expect("router is infallible");

	assert_eq!(response.status(), StatusCode::OK);
}
