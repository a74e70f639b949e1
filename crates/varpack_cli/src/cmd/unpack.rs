use std::path::PathBuf;

use serde_json::json;
use varpack::wire::{ArrayItems, Engine};

use crate::cmd::infos::array_json;
use crate::cmd::util::{flag_names, read_file};
use crate::cmd::{Result, file};

#[derive(clap::Args)]
pub struct Args {
	/// Packed `.vpk` file.
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print the infos stored in a `.vpk` file.
pub fn run(engine: &Engine, args: Args) -> Result<()> {
	let Args { path, json } = args;

	let (buffer_type, mut array) = file::decode(engine, read_file(&path)?)?;

	if json {
		let doc = json!({
			"path": path.display().to_string(),
			"buffer_type": buffer_type.as_str(),
			"infos": array_json(engine, &array),
		});
		println!("{doc}");
	} else {
		println!("path: {}", path.display());
		println!("buffer_type: {}", buffer_type.as_str());
		println!("infos: {}", array.size());
		if let ArrayItems::Infos(infos) = array.items() {
			for info in infos {
				let ty = info.value().data_type();
				let prefix = format!("  {} [{}] ", info.key(), flag_names(info.flags()).join(","));
				let line = match engine.registry().lookup(ty) {
					Some(registered) => registered.ops.print(&prefix, info.value()),
					None => format!("{prefix}{ty}"),
				};
				println!("{line}");
			}
		}
	}

	engine.darray_destruct(&mut array);
	Ok(())
}
