mod common;

use errdoc_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn update_rewrites_known_sections() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;

	let mut cmd = common::errdoc_cmd();
	cmd.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Rewrote 2 section(s)"));

	let written = std::fs::read_to_string(tmp.path().join("ERROR_CODES.md"))?;
	assert_eq!(
		written,
		"# Error Codes\n\n### 1: `Cannot parse *`\n\n- Runtime: ✅\n- Annotation Processor: \
		 ❌\n\n### 2: `Missing field`\n\n- Runtime: ❌\n- Annotation Processor: ❌\n"
	);

	Ok(())
}

#[test]
fn bare_invocation_runs_an_update() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;

	let mut cmd = common::errdoc_cmd();
	cmd.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Rewrote 2 section(s)"));

	let written = std::fs::read_to_string(tmp.path().join("ERROR_CODES.md"))?;
	assert!(written.contains("### 1: `Cannot parse *`"));

	Ok(())
}

#[test]
fn second_update_is_a_no_op() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;

	common::errdoc_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let mut cmd = common::errdoc_cmd();
	cmd.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already up to date"));

	Ok(())
}

#[test]
fn dry_run_leaves_the_document_untouched() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;
	let before = std::fs::read_to_string(tmp.path().join("ERROR_CODES.md"))?;

	let mut cmd = common::errdoc_cmd();
	cmd.arg("update")
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Dry run"));

	let after = std::fs::read_to_string(tmp.path().join("ERROR_CODES.md"))?;
	assert_eq!(before, after);

	Ok(())
}

#[test]
fn undocumented_codes_warn_without_failing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;
	// Drop the section for code 2 — it stays defined but undocumented.
	std::fs::write(
		tmp.path().join("ERROR_CODES.md"),
		"# Error Codes\n\n### 1\n\n- Runtime: ❌\n- Annotation Processor: ❌\n",
	)?;

	let mut cmd = common::errdoc_cmd();
	cmd.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(
			predicates::str::contains("error code 2")
				.and(predicates::str::contains("ERROR_CODES.md")),
		);

	Ok(())
}

#[test]
fn missing_definitions_file_aborts() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;
	std::fs::remove_file(tmp.path().join("error.properties"))?;

	let mut cmd = common::errdoc_cmd();
	cmd.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("definitions"));

	Ok(())
}
