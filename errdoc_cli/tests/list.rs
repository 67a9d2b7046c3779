mod common;

use errdoc_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn list_shows_messages_and_usage_glyphs() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;

	let mut cmd = common::errdoc_cmd();
	cmd.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(
			predicates::str::contains("Cannot parse *")
				.and(predicates::str::contains("Missing field"))
				.and(predicates::str::contains("✅"))
				.and(predicates::str::contains("2 code(s) defined")),
		);

	Ok(())
}

#[test]
fn list_with_no_defined_codes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;
	std::fs::write(tmp.path().join("error.properties"), "# no codes yet\n")?;

	let mut cmd = common::errdoc_cmd();
	cmd.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("No error codes defined."));

	Ok(())
}
