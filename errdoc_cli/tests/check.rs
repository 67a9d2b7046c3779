mod common;

use errdoc_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn check_fails_when_document_is_stale() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;

	let mut cmd = common::errdoc_cmd();
	cmd.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("out of date"));

	Ok(())
}

#[test]
fn check_passes_after_update() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;

	common::errdoc_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let mut cmd = common::errdoc_cmd();
	cmd.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Check passed"));

	Ok(())
}

#[test]
fn check_flags_undocumented_codes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;
	// Document is current for code 1 but has no section for code 2.
	std::fs::write(
		tmp.path().join("ERROR_CODES.md"),
		"# Error Codes\n\n### 1: `Cannot parse *`\n\n- Runtime: ✅\n- Annotation Processor: \
		 ❌\n",
	)?;

	let mut cmd = common::errdoc_cmd();
	cmd.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(
			predicates::str::contains("error code 2")
				.and(predicates::str::contains("out of date").not()),
		);

	Ok(())
}

#[test]
fn check_diff_shows_the_expected_rewrite() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;

	let mut cmd = common::errdoc_cmd();
	cmd.arg("check")
		.arg("--diff")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("Cannot parse *"));

	Ok(())
}

#[test]
fn check_json_reports_status_and_unmatched_codes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;

	let mut cmd = common::errdoc_cmd();
	cmd.arg("check")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stdout(
			predicates::str::contains("\"ok\":false")
				.and(predicates::str::contains("\"stale\":true")),
		);

	Ok(())
}

#[test]
fn check_github_format_emits_annotations() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;

	let mut cmd = common::errdoc_cmd();
	cmd.arg("check")
		.arg("--format")
		.arg("github")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stdout(predicates::str::contains("::error file=ERROR_CODES.md"));

	Ok(())
}
