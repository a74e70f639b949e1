use serde_json::json;
use varpack::wire::Engine;

use crate::cmd::Result;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

/// List registered type tags, their names, and native widths.
pub fn run(engine: &Engine, args: Args) -> Result<()> {
	let mut entries: Vec<_> = engine.registry().iter().collect();
	entries.sort_by_key(|info| info.ty);

	if args.json {
		let rows: Vec<_> = entries
			.iter()
			.map(|info| json!({ "tag": info.ty.tag(), "name": info.name, "width": info.ty.fixed_width() }))
			.collect();
		println!("{}", serde_json::Value::Array(rows));
		return Ok(());
	}

	println!("types: {}", entries.len());
	for info in entries {
		match info.ty.fixed_width() {
			Some(width) => println!("  {:>3} {} ({width} bytes)", info.ty.tag(), info.name),
			None => println!("  {:>3} {}", info.ty.tag(), info.name),
		}
	}
	Ok(())
}
