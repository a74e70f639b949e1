#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use varpack::wire::Engine;

mod cmd;

#[derive(Parser)]
#[command(name = "varpack", about = "Pack and inspect self-describing info buffers")]
struct Cli {
	/// JSON engine settings; `VARPACK_*` variables override them.
	#[arg(long, global = true)]
	config: Option<PathBuf>,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Types(cmd::types::Args),
	Pack(cmd::pack::Args),
	Unpack(cmd::unpack::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();
	let config = cmd::load_config(cli.config.as_deref())?;
	let engine = Engine::new(config)?;

	match cli.command {
		Commands::Types(args) => cmd::types::run(&engine, args),
		Commands::Pack(args) => cmd::pack::run(&engine, args),
		Commands::Unpack(args) => cmd::unpack::run(&engine, args),
	}
}
