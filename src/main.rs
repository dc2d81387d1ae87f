//! Student API - a record-management service for student records.
//! Copyright (C) 2026  AlphaKeks <alphakeks@dawn>
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use similar::TextDiff;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode>
{
	color_eyre::install()?;

	match CLI::parse().action.unwrap_or_default() {
		Action::Serve { env_file } => {
			if let Some(path) = env_file.as_deref() {
				dotenvy::from_filename(path).wrap_err("load custom `.env` file")?;
			} else if dotenvy::dotenv().is_err() {
				// A missing `.env` file is not necessarily an issue (e.g. when
				// running in CI), but we log it to stderr just in case.
				eprintln!("WARNING: no `.env` file found");
			}
		}
		Action::GenerateSpec { check } => {
			return generate_spec(check.as_deref());
		}
	}

	student_api::runtime::panic_hook::install();

	tracing_subscriber::fmt()
		.pretty()
		.with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let config = student_api::runtime::Config::new().wrap_err("load config")?;
	let tcp_listener = TcpListener::bind(config.socket_addr()).await?;
	let server = student_api::server(&config).await.wrap_err("setup server")?;

	tracing::info!("listening on {}", tcp_listener.local_addr()?);

	axum::serve(
		tcp_listener,
		server.into_make_service_with_connect_info::<SocketAddr>(),
	)
	.with_graceful_shutdown(student_api::signal::shutdown())
	.await?;

	Ok(ExitCode::SUCCESS)
}

/// Student API
#[derive(Debug, Parser)]
struct CLI
{
	/// What you want to do
	#[command(subcommand)]
	action: Option<Action>,
}

#[derive(Debug, Subcommand)]
enum Action
{
	/// Serve the API
	Serve
	{
		/// Use a custom `.env` file.
		#[arg(long, name = "FILE")]
		env_file: Option<PathBuf>,
	},

	/// Generate a JSON representation of the API's OpenAPI spec.
	GenerateSpec
	{
		/// Do not print the generated spec, only diff it against an existing
		/// one. This will exit with code 1 if any diffs are found.
		#[arg(long, name = "FILE")]
		check: Option<PathBuf>,
	},
}

impl Default for Action
{
	fn default() -> Self
	{
		Self::Serve { env_file: None }
	}
}

/// Serializes the API's OpenAPI spec as JSON and potentially diffs it against
/// an existing spec file.
///
/// If `check` is specified, the real spec will be diffed against the spec
/// stored at the specified path. Any diffs will be printed, and the exit
/// status will be 1 if any diffs are found.
///
/// Otherwise, the spec is simply printed to stdout.
fn generate_spec(check: Option<&Path>) -> color_eyre::Result<ExitCode>
{
	let spec = student_api::openapi::Spec::new()
		.as_json()
		.wrap_err("serialize spec")?;

	let Some(path) = check else {
		print!("{spec}");
		return Ok(ExitCode::SUCCESS);
	};

	let file = fs::read_to_string(path).wrap_err_with(|| format!("read {path:?}"))?;
	let exit_code = TextDiff::from_lines(&file, &spec)
		.unified_diff()
		.iter_hunks()
		.fold(ExitCode::SUCCESS, |_, hunk| {
			eprintln!("{hunk}");
			ExitCode::FAILURE
		});

	Ok(exit_code)
}
