#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod error;

use cmd::bind::RecordKind;

#[derive(Parser)]
#[command(name = "jsonbind", about = "Bind JSON documents into typed provider records")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the value at a key path.
	Get {
		path: PathBuf,
		#[arg(long = "path", value_name = "KEY_PATH")]
		key_path: Option<String>,
		#[arg(long)]
		json: bool,
	},
	/// Bind the value at a key path into a record type and print the result.
	Bind {
		path: PathBuf,
		#[arg(long = "as", value_enum)]
		record: RecordKind,
		#[arg(long = "path", value_name = "KEY_PATH")]
		key_path: Option<String>,
	},
	/// Print the kind of every node under a key path.
	Kinds {
		path: PathBuf,
		#[arg(long = "path", value_name = "KEY_PATH")]
		key_path: Option<String>,
		#[arg(long, default_value_t = 8)]
		max_depth: u32,
	},
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Get { path, key_path, json } => cmd::get::run(path, key_path, json),
		Commands::Bind { path, record, key_path } => cmd::bind::run(path, record, key_path),
		Commands::Kinds { path, key_path, max_depth } => cmd::kinds::run(path, key_path, max_depth),
	}
}

fn init_tracing() {
	let env_filter = EnvFilter::try_from_env("JSONBIND_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
