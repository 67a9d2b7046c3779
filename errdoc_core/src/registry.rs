use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::ErrdocError;
use crate::ErrdocResult;

/// The wildcard glyph substituted for `%s` placeholders in message
/// templates.
pub const PLACEHOLDER_WILDCARD: &str = "*";

/// One of the two logical components whose source trees are scanned for
/// error-code invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Component {
	Runtime,
	AnnotationProcessor,
}

impl Component {
	/// The human-readable label used in document status lines.
	#[must_use]
	pub fn label(&self) -> &'static str {
		match self {
			Self::Runtime => "Runtime",
			Self::AnnotationProcessor => "Annotation Processor",
		}
	}
}

impl fmt::Display for Component {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// The registry entry for one error code: its message template with
/// placeholders collapsed to wildcards, plus per-component usage flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDescriptor {
	/// Non-negative integer identifying the error condition.
	pub code: u32,
	/// Message template with every `%s` placeholder replaced by `*`. Fixed
	/// at load time and never recomputed.
	pub message: String,
	/// Whether the runtime component references this code.
	pub used_by_runtime: bool,
	/// Whether the annotation processor references this code.
	pub used_by_annotation_processor: bool,
	/// Whether a document section for this code was found during the last
	/// rewrite. Transient per run.
	pub matched_in_document: bool,
}

impl CodeDescriptor {
	fn new(code: u32, message: String) -> Self {
		Self {
			code,
			message,
			used_by_runtime: false,
			used_by_annotation_processor: false,
			matched_in_document: false,
		}
	}

	/// Whether the given component references this code.
	#[must_use]
	pub fn used_by(&self, component: Component) -> bool {
		match component {
			Component::Runtime => self.used_by_runtime,
			Component::AnnotationProcessor => self.used_by_annotation_processor,
		}
	}
}

/// In-memory registry of error-code descriptors, keyed by code.
///
/// Built once from the definitions file, marked up by the usage scanner and
/// the document updater, then consumed read-only by the reconciliation
/// report. A `BTreeMap` keeps iteration order deterministic for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeRegistry {
	codes: BTreeMap<u32, CodeDescriptor>,
}

impl CodeRegistry {
	/// Load the registry from a properties file at `path`.
	///
	/// A missing or unreadable definitions file is a fatal error — the
	/// resource is assumed present.
	pub fn load(path: &Path) -> ErrdocResult<Self> {
		let content = std::fs::read_to_string(path).map_err(|e| ErrdocError::Definitions {
			path: path.display().to_string(),
			reason: e.to_string(),
		})?;
		Ok(Self::from_properties(&content))
	}

	/// Build the registry from properties file content.
	///
	/// Keys that do not parse as base-10 integers are skipped silently —
	/// the definitions file may carry non-code entries alongside the codes.
	/// Every `%s` placeholder in a value is collapsed to `*` at load time.
	#[must_use]
	pub fn from_properties(content: &str) -> Self {
		let mut codes = BTreeMap::new();

		for (key, value) in parse_properties(content) {
			let Ok(code) = key.parse::<u32>() else {
				tracing::trace!(key, "skipping non-integer definitions key");
				continue;
			};
			let message = value.replace("%s", PLACEHOLDER_WILDCARD);
			codes.insert(code, CodeDescriptor::new(code, message));
		}

		tracing::debug!(count = codes.len(), "loaded error-code definitions");
		Self { codes }
	}

	#[must_use]
	pub fn get(&self, code: u32) -> Option<&CodeDescriptor> {
		self.codes.get(&code)
	}

	#[must_use]
	pub fn contains(&self, code: u32) -> bool {
		self.codes.contains_key(&code)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.codes.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.codes.is_empty()
	}

	/// Iterate descriptors in ascending code order.
	pub fn iter(&self) -> impl Iterator<Item = &CodeDescriptor> {
		self.codes.values()
	}

	/// Mark every registry code in `codes` as used by `component`. Codes
	/// absent from the registry are ignored. Monotonic — a flag is never
	/// reset to false within a run, so merging the same scan twice is a
	/// no-op.
	pub fn mark_used(&mut self, component: Component, codes: &BTreeSet<u32>) {
		for code in codes {
			let Some(descriptor) = self.codes.get_mut(code) else {
				continue;
			};
			match component {
				Component::Runtime => descriptor.used_by_runtime = true,
				Component::AnnotationProcessor => descriptor.used_by_annotation_processor = true,
			}
		}
	}

	/// Mark every registry code in `codes` as matched in the document.
	/// Codes absent from the registry are ignored.
	pub fn mark_matched(&mut self, codes: &BTreeSet<u32>) {
		for code in codes {
			if let Some(descriptor) = self.codes.get_mut(code) {
				descriptor.matched_in_document = true;
			}
		}
	}

	/// Descriptors never matched in the document — the input to the
	/// reconciliation report.
	#[must_use]
	pub fn unmatched(&self) -> Vec<&CodeDescriptor> {
		self.codes
			.values()
			.filter(|descriptor| !descriptor.matched_in_document)
			.collect()
	}
}

/// Parse properties file content into key/value pairs.
///
/// This is a line-oriented parser for the subset of the Java properties
/// format the definitions file uses: `#` and `!` comment lines, blank
/// lines, `=` or `:` separators, and backslash line continuations. Unicode
/// escapes are not interpreted — message values pass through verbatim.
fn parse_properties(content: &str) -> Vec<(String, String)> {
	let mut entries = Vec::new();
	let mut lines = content.lines();

	while let Some(line) = lines.next() {
		let trimmed = line.trim_start();
		if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
			continue;
		}

		// Join continuation lines: a trailing backslash (not itself escaped)
		// splices the next line, with its leading whitespace stripped.
		let mut logical = trimmed.to_string();
		while has_continuation(&logical) {
			logical.pop();
			let Some(next) = lines.next() else {
				break;
			};
			logical.push_str(next.trim_start());
		}

		let Some(separator) = logical.find(['=', ':']) else {
			continue;
		};

		let key = logical[..separator].trim().to_string();
		let value = logical[separator + 1..].trim_start().to_string();
		entries.push((key, value));
	}

	entries
}

/// Whether a logical line ends in an odd number of backslashes, meaning the
/// final one escapes the line terminator.
fn has_continuation(line: &str) -> bool {
	let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
	trailing % 2 == 1
}
