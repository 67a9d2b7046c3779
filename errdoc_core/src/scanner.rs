use std::collections::BTreeSet;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use crate::ErrdocError;
use crate::ErrdocResult;

/// The invocation token the scanner searches for in source text.
const INVOCATION_MARKER: &str = "error(";

/// Result of scanning one component's source tree.
///
/// The scan does not touch the registry — it produces an independent set of
/// referenced codes that the engine merges afterwards via
/// [`CodeRegistry::mark_used`](crate::CodeRegistry::mark_used). Because
/// flag-setting is idempotent, file scan order cannot affect the merged
/// result.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UsageScan {
	/// Distinct codes referenced by `error(<code>)` invocations.
	pub codes: BTreeSet<u32>,
	/// Number of source files searched.
	pub files_scanned: usize,
	/// Total invocation matches, counting duplicates.
	pub hits: usize,
}

/// Recursively scan `dir` for files with the given extension and collect
/// every error code referenced by an `error(<code>)` invocation.
///
/// An inaccessible scan root is a fatal error; unknown codes are not
/// filtered here — the merge into the registry ignores them.
pub fn scan_component(dir: &Path, extension: &str) -> ErrdocResult<UsageScan> {
	if !dir.is_dir() {
		return Err(ErrdocError::MissingDirectory {
			path: dir.display().to_string(),
		});
	}

	let mut files = Vec::new();
	let mut active_dirs = HashSet::new();
	collect_source_files(dir, extension, &mut files, &mut active_dirs)?;
	// Sort for deterministic traversal in logs; the result is order-independent.
	files.sort();

	let mut scan = UsageScan::default();
	for file in &files {
		let content = std::fs::read_to_string(file)?;
		for code in find_invocations(&content) {
			scan.codes.insert(code);
			scan.hits += 1;
		}
		scan.files_scanned += 1;
	}

	tracing::debug!(
		dir = %dir.display(),
		files = scan.files_scanned,
		hits = scan.hits,
		codes = scan.codes.len(),
		"scanned component sources"
	);

	Ok(scan)
}

fn is_hidden_directory_name(name: &str) -> bool {
	name.starts_with('.')
}

fn collect_source_files(
	dir: &Path,
	extension: &str,
	files: &mut Vec<PathBuf>,
	active_dirs: &mut HashSet<PathBuf>,
) -> ErrdocResult<()> {
	// A canonical path already on the current recursion path means a symlink
	// loops back to an ancestor. The entry is removed on unwind, so two
	// sibling symlinks sharing a target are walked normally.
	let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
	if !active_dirs.insert(canonical.clone()) {
		return Err(ErrdocError::SymlinkCycle {
			path: dir.display().to_string(),
		});
	}

	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_dir() {
			// Only dot-entries are excluded; package directories named
			// `build` or `target` are ordinary source directories.
			if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
				if is_hidden_directory_name(name) {
					continue;
				}
			}
			collect_source_files(&path, extension, files, active_dirs)?;
		} else if path.extension().and_then(|e| e.to_str()) == Some(extension) {
			files.push(path);
		}
	}

	active_dirs.remove(&canonical);
	Ok(())
}

/// Find all non-overlapping `error(<digits>)` invocations in source text and
/// yield the parsed codes.
///
/// This is a literal-scan matcher rather than a regex: find the `error(`
/// token, take one or more ASCII digits, and require a closing `)`. Digit
/// runs that do not fit in a `u32` are skipped.
pub fn find_invocations(content: &str) -> Vec<u32> {
	let bytes = content.as_bytes();
	let mut codes = Vec::new();
	let mut search_from = 0;

	while let Some(offset) = memstr(&bytes[search_from..], INVOCATION_MARKER.as_bytes()) {
		let digits_start = search_from + offset + INVOCATION_MARKER.len();
		let mut digits_end = digits_start;
		while digits_end < bytes.len() && bytes[digits_end].is_ascii_digit() {
			digits_end += 1;
		}

		if digits_end > digits_start && bytes.get(digits_end) == Some(&b')') {
			if let Ok(code) = content[digits_start..digits_end].parse::<u32>() {
				codes.push(code);
			}
			search_from = digits_end + 1;
		} else {
			search_from = digits_start;
		}
	}

	codes
}

/// Find the first occurrence of `needle` in `haystack`, returning its byte
/// offset.
fn memstr(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	if needle.is_empty() || haystack.len() < needle.len() {
		return None;
	}
	haystack
		.windows(needle.len())
		.position(|window| window == needle)
}
