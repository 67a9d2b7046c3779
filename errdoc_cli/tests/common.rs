use assert_cmd::Command;

pub fn errdoc_cmd() -> Command {
	let mut cmd = Command::cargo_bin("errdoc").expect("errdoc binary builds");
	cmd.env("NO_COLOR", "1");
	cmd
}

/// Lay out a minimal project: definitions, both component source trees, the
/// reference document, and an `errdoc.toml` pointing at them.
pub fn write_project(root: &std::path::Path) -> std::io::Result<()> {
	std::fs::create_dir_all(root.join("runtime/src"))?;
	std::fs::create_dir_all(root.join("processor/src"))?;

	std::fs::write(
		root.join("errdoc.toml"),
		"definitions = \"error.properties\"\ndocument = \"ERROR_CODES.md\"\nextension = \
		 \"java\"\n\n[components]\nruntime = \"runtime/src\"\nannotation_processor = \
		 \"processor/src\"\n",
	)?;
	std::fs::write(
		root.join("error.properties"),
		"1=Cannot parse %s\n2=Missing field\n",
	)?;
	std::fs::write(
		root.join("runtime/src/Helper.java"),
		"class Helper { void f() { helper.error(1); } }",
	)?;
	std::fs::write(
		root.join("ERROR_CODES.md"),
		"# Error Codes\n\n### 1\n\n- Runtime: ❌\n- Annotation Processor: ❌\n\n### 2\n\n- \
		 Runtime: ❌\n- Annotation Processor: ❌\n",
	)?;

	Ok(())
}
