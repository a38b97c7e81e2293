use std::path::PathBuf;

use jsonbind::bind::BindError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Input file could not be read.
	#[error("io: {path}: {source}")]
	Io {
		/// File that failed to read.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Input was not valid JSON, or output failed to encode.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Narrowing or binding failed.
	#[error(transparent)]
	Bind(#[from] BindError),
}
