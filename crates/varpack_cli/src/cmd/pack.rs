use std::path::PathBuf;

use varpack::wire::{BufferType, Engine};

use crate::cmd::infos::{InfoDoc, build_list};
use crate::cmd::util::{read_file, write_file};
use crate::cmd::{CliError, Result, file};

#[derive(clap::Args)]
pub struct Args {
	/// JSON document with an `infos` array.
	pub input: PathBuf,
	/// Destination `.vpk` file.
	#[arg(short, long)]
	pub output: PathBuf,
	/// Tag every packed group with its type.
	#[arg(long)]
	pub described: bool,
	/// Compress strings at or above the configured limit.
	#[arg(long)]
	pub compress: bool,
}

/// Pack a JSON info document into a `.vpk` file.
pub fn run(engine: &Engine, args: Args) -> Result<()> {
	let Args {
		input,
		output,
		described,
		compress,
	} = args;

	let raw = read_file(&input)?;
	let doc: InfoDoc = serde_json::from_slice(&raw).map_err(|source| CliError::Json { path: input.clone(), source })?;

	let list = build_list(engine, &doc, compress)?;
	let count = list.len();
	let array = list.convert(engine);
	list.release(engine);
	let array = array?;

	let bytes = if described {
		let mut config = engine.config().clone();
		config.buffer_type = BufferType::FullyDescribed;
		let described_engine = Engine::new(config)?;
		file::encode(&described_engine, array)?
	} else {
		file::encode(engine, array)?
	};
	write_file(&output, &bytes)?;

	println!("path: {}", output.display());
	println!("infos: {count}");
	println!("bytes: {}", bytes.len());
	Ok(())
}
