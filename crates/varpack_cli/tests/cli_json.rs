#![allow(missing_docs)]

use std::process::{Command, Output};

use serde_json::json;
use varpack_testkit::{fixture_path, scratch_path, stdout_json};

fn run_varpack(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_varpack")).args(args).output().expect("varpack command executes")
}

fn pack_fixture(name: &str, extra: &[&str]) -> String {
	let input = fixture_path("job_infos.json");
	let output = scratch_path(name);
	let input = input.to_str().expect("utf-8 fixture path");
	let output_arg = output.to_str().expect("utf-8 scratch path").to_owned();

	let mut args = vec!["pack", input, "--output", output_arg.as_str()];
	args.extend_from_slice(extra);
	let packed = run_varpack(&args);
	assert!(packed.status.success(), "pack failed: {}", String::from_utf8_lossy(&packed.stderr));
	output_arg
}

#[test]
fn pack_then_unpack_json_keeps_order_and_values() {
	let path = pack_fixture("plain.vpk", &[]);
	let doc = stdout_json(&run_varpack(&["unpack", &path, "--json"]));
	std::fs::remove_file(&path).ok();

	assert_eq!(doc["buffer_type"], "non_described");
	let infos = doc["infos"].as_array().expect("infos array");
	assert_eq!(infos.len(), 12);

	let keys: Vec<_> = infos.iter().map(|info| info["key"].as_str().expect("key")).collect();
	assert_eq!(keys[0], "job.nspace");
	assert_eq!(keys[11], "job.note");

	assert_eq!(infos[0]["flags"], json!(["required"]));
	assert_eq!(infos[0]["value"], "slurm.job.4411");
	assert_eq!(infos[1]["type"], "UINT32");
	assert_eq!(infos[1]["value"], 16);
	assert_eq!(infos[4]["value"], json!({ "nspace": "slurm.job.4410", "rank": 0 }));
	assert_eq!(infos[5]["value"]["separator"], ":");
	assert_eq!(infos[6]["value"], json!({ "sec": 1760000000, "usec": 250 }));
	assert_eq!(infos[7]["value"], -1);
	assert_eq!(infos[10]["value"], "deadbeef");
	assert_eq!(infos[11]["value"], "");
}

#[test]
fn described_files_record_their_layout() {
	let plain = pack_fixture("size-plain.vpk", &[]);
	let described = pack_fixture("size-described.vpk", &["--described"]);
	let plain_len = std::fs::metadata(&plain).expect("plain file").len();
	let described_len = std::fs::metadata(&described).expect("described file").len();
	assert!(described_len > plain_len);

	let doc = stdout_json(&run_varpack(&["unpack", &described, "--json"]));
	std::fs::remove_file(&plain).ok();
	std::fs::remove_file(&described).ok();
	assert_eq!(doc["buffer_type"], "fully_described");
	assert_eq!(doc["infos"].as_array().map(Vec::len), Some(12));
}

#[test]
fn unpack_text_uses_registered_printers() {
	let path = pack_fixture("text.vpk", &[]);
	let output = run_varpack(&["unpack", &path]);
	std::fs::remove_file(&path).ok();
	assert!(output.status.success());

	let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
	assert!(stdout.contains("infos: 12"));
	assert!(stdout.contains("job.size [] Data type: UINT32\tValue: 16"));
}

#[test]
fn types_json_lists_builtins_in_tag_order() {
	let doc = stdout_json(&run_varpack(&["types", "--json"]));
	let rows = doc.as_array().expect("type rows");
	let tags: Vec<_> = rows.iter().map(|row| row["tag"].as_u64().expect("tag")).collect();
	assert!(tags.windows(2).all(|pair| pair[0] < pair[1]));
	assert!(rows.iter().any(|row| row["name"] == "STRING" && row["width"].is_null()));
	assert!(rows.iter().any(|row| row["name"] == "UINT32" && row["width"] == 4));
}

#[test]
fn env_overrides_reach_the_engine() {
	let input = fixture_path("job_infos.json");
	let output = scratch_path("strict.vpk");
	let packed = Command::new(env!("CARGO_BIN_EXE_varpack"))
		.env("VARPACK_MAX_DEPTH", "0")
		.args(["pack", input.to_str().expect("utf-8"), "--output", output.to_str().expect("utf-8")])
		.output()
		.expect("varpack command executes");
	assert!(!packed.status.success());
	assert!(String::from_utf8_lossy(&packed.stderr).starts_with("error: "));
}

#[test]
fn garbage_files_are_rejected() {
	let path = scratch_path("garbage.vpk");
	std::fs::write(&path, b"not a packed file").expect("write garbage");
	let output = run_varpack(&["unpack", path.to_str().expect("utf-8")]);
	std::fs::remove_file(&path).ok();
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("not a varpack file"));
}
