//! Runtime configuration for the API.
//!
//! This module contains the [`Config`] struct - a set of configuration options
//! that will be read from the environment on startup. See the `.env.example`
//! file in the root of the repository for examples.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::{env, fmt};

use thiserror::Error;
use url::Url;

/// The address the HTTP server binds to if `STUDENT_API_ADDR` is not set.
const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 7070);

/// The API's runtime configuration.
///
/// See [module level docs] for more details.
///
/// [module level docs]: crate::runtime::config
#[derive(Clone)]
pub struct Config
{
	/// [`Inner`] actually contains all the values, we just wrap it so
	/// [`Config`] is cheap to clone.
	inner: Arc<Inner>,
}

/// Error that can occur while initializing the API's [`Config`].
#[derive(Debug, Error)]
pub enum InitializeConfigError
{
	/// A required environment variable was not found or invalid UTF-8.
	#[error("failed to read configuration value: {0}")]
	Env(#[from] env::VarError),

	/// A required configuration option was empty.
	#[error("`{0}` cannot be empty")]
	EmptyValue(&'static str),

	/// A required configuration option could not be parsed into the required
	/// type.
	#[error("failed to parse configuration value: {0}")]
	Parse(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Config
{
	/// Initializes a [`Config`] by reading and parsing environment variables.
	///
	/// The process refuses to start without a connection string for the
	/// document store.
	pub fn new() -> Result<Self, InitializeConfigError>
	{
		let mongo_uri = parse_from_env::<Url>("MONGO_URI")?;
		let socket_addr = parse_from_env_opt::<SocketAddr>("STUDENT_API_ADDR")?;

		Ok(Self {
			inner: Arc::new(Inner {
				mongo_uri,
				socket_addr: socket_addr.unwrap_or(DEFAULT_ADDR),
			}),
		})
	}

	/// Returns the connection string for the document store.
	pub fn mongo_uri(&self) -> &Url
	{
		&self.inner.mongo_uri
	}

	/// Returns the address the HTTP server should bind to.
	pub fn socket_addr(&self) -> SocketAddr
	{
		self.inner.socket_addr
	}
}

impl fmt::Debug for Config
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt.debug_struct("Config")
			.field("mongo_uri", &self.inner.mongo_uri.as_str())
			.field("socket_addr", &self.inner.socket_addr)
			.finish()
	}
}

/// The actual configuration values.
struct Inner
{
	/// Connection string for the document store.
	mongo_uri: Url,

	/// Address for the HTTP server.
	socket_addr: SocketAddr,
}

/// Reads the environment variable `var` and parses it into a `T`.
fn parse_from_env<T>(var: &'static str) -> Result<T, InitializeConfigError>
where
	T: FromStr,
	T::Err: std::error::Error + Send + Sync + 'static,
{
	let value = env::var(var)?;

	if value.is_empty() {
		return Err(InitializeConfigError::EmptyValue(var));
	}

	value
		.parse::<T>()
		.map_err(|err| InitializeConfigError::Parse(Box::new(err)))
}

/// Reads the environment variable `var` and parses it into a `T`, treating a
/// missing or empty variable as [`None`].
fn parse_from_env_opt<T>(var: &'static str) -> Result<Option<T>, InitializeConfigError>
where
	T: FromStr,
	T::Err: std::error::Error + Send + Sync + 'static,
{
	match env::var(var) {
		Ok(value) if value.is_empty() => Ok(None),
		Ok(value) => value
			.parse::<T>()
			.map(Some)
			.map_err(|err| InitializeConfigError::Parse(Box::new(err))),
		Err(env::VarError::NotPresent) => Ok(None),
		Err(err) => Err(err.into()),
	}
}
