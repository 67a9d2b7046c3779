use std::collections::BTreeSet;

use crate::CodeDescriptor;
use crate::CodeRegistry;

/// Status glyph for a component that references the code.
pub const CHECK_GLYPH: &str = "✅";
/// Status glyph for a component that does not reference the code.
pub const CROSS_GLYPH: &str = "❌";

const HEADING_MARKER: &str = "### ";
const RUNTIME_LABEL: &str = "- Runtime: ";
const ANNOTATION_PROCESSOR_LABEL: &str = "- Annotation Processor: ";

/// Result of rewriting the per-code sections of a reference document.
///
/// The rewrite does not touch the registry — `matched` is merged afterwards
/// via [`CodeRegistry::mark_matched`](crate::CodeRegistry::mark_matched).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpdate {
	/// The fully substituted document text.
	pub content: String,
	/// Registry codes whose sections were found and rewritten.
	pub matched: BTreeSet<u32>,
	/// Number of sections replaced.
	pub rewritten: usize,
	/// Codes of recognized sections that are absent from the registry.
	/// These sections pass through verbatim.
	pub unknown_sections: Vec<u32>,
}

/// One line of the document, split from its terminator so CRLF documents
/// round-trip byte-for-byte outside rewritten sections.
struct Line<'a> {
	content: &'a str,
	terminator: &'a str,
}

fn split_lines(text: &str) -> Vec<Line<'_>> {
	let mut lines: Vec<Line<'_>> = text
		.split_inclusive('\n')
		.map(|raw| {
			let without_lf = raw.strip_suffix('\n').unwrap_or(raw);
			let content = without_lf.strip_suffix('\r').unwrap_or(without_lf);
			Line {
				content,
				terminator: &raw[content.len()..],
			}
		})
		.collect();

	// split_inclusive yields nothing for an empty document; normalize to a
	// single empty line so the rewrite loop still terminates cleanly.
	if lines.is_empty() {
		lines.push(Line {
			content: "",
			terminator: "",
		});
	}

	lines
}

/// Parse a heading line `### <digits>...`, returning the code.
///
/// Zero-padded digit runs are rejected: rendered headings never carry
/// leading zeros, so `### 007` is not a section for code 7.
fn parse_heading(line: &str) -> Option<u32> {
	let rest = line.strip_prefix(HEADING_MARKER)?;
	let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
	if digits.is_empty() || (digits.len() > 1 && digits.starts_with('0')) {
		return None;
	}
	digits.parse().ok()
}

/// Whether a line is a status line: the given label followed by a single
/// status glyph (at most two characters, matching the original section
/// grammar).
fn is_status_line(line: &str, label: &str) -> bool {
	let Some(rest) = line.strip_prefix(label) else {
		return false;
	};
	let count = rest.chars().count();
	(1..=2).contains(&count)
}

/// The rewritten block for one code's section. LF line separators; the
/// terminator that followed the original section is preserved by the caller.
#[must_use]
pub fn render_section(descriptor: &CodeDescriptor) -> String {
	let runtime = if descriptor.used_by_runtime {
		CHECK_GLYPH
	} else {
		CROSS_GLYPH
	};
	let annotation_processor = if descriptor.used_by_annotation_processor {
		CHECK_GLYPH
	} else {
		CROSS_GLYPH
	};

	format!(
		"{HEADING_MARKER}{code}: `{message}`\n\n{RUNTIME_LABEL}{runtime}\n\
		 {ANNOTATION_PROCESSOR_LABEL}{annotation_processor}",
		code = descriptor.code,
		message = descriptor.message,
	)
}

/// Rewrite every recognized per-code section of `content` against the
/// registry.
///
/// A section is a heading line `### <digits>` (arbitrary trailing content),
/// zero or more blank lines, a `- Runtime: ` status line, and a
/// `- Annotation Processor: ` status line. Sections whose code is in the
/// registry are replaced with a freshly rendered block; sections referencing
/// unknown codes — and everything outside recognized sections — pass through
/// byte-for-byte.
#[must_use]
pub fn rewrite_sections(content: &str, registry: &CodeRegistry) -> DocumentUpdate {
	let lines = split_lines(content);
	let mut output = String::with_capacity(content.len());
	let mut matched = BTreeSet::new();
	let mut rewritten = 0;
	let mut unknown_sections = Vec::new();

	let mut index = 0;
	while index < lines.len() {
		let Some((code, section_end)) = match_section(&lines, index) else {
			output.push_str(lines[index].content);
			output.push_str(lines[index].terminator);
			index += 1;
			continue;
		};

		if let Some(descriptor) = registry.get(code) {
			output.push_str(&render_section(descriptor));
			output.push_str(lines[section_end].terminator);
			matched.insert(code);
			rewritten += 1;
		} else {
			// Unknown code: the recognized span passes through unchanged.
			for line in &lines[index..=section_end] {
				output.push_str(line.content);
				output.push_str(line.terminator);
			}
			unknown_sections.push(code);
		}

		index = section_end + 1;
	}

	tracing::debug!(
		rewritten,
		matched = matched.len(),
		unknown = unknown_sections.len(),
		"rewrote document sections"
	);

	DocumentUpdate {
		content: output,
		matched,
		rewritten,
		unknown_sections,
	}
}

/// Try to match a per-code section starting at `start`. Returns the section
/// code and the index of its final line (the annotation-processor status
/// line).
fn match_section(lines: &[Line<'_>], start: usize) -> Option<(u32, usize)> {
	let code = parse_heading(lines[start].content)?;

	let mut cursor = start + 1;
	while cursor < lines.len() && lines[cursor].content.is_empty() {
		cursor += 1;
	}

	let runtime_line = lines.get(cursor)?;
	if !is_status_line(runtime_line.content, RUNTIME_LABEL) {
		return None;
	}

	let annotation_line = lines.get(cursor + 1)?;
	if !is_status_line(annotation_line.content, ANNOTATION_PROCESSOR_LABEL) {
		return None;
	}

	Some((code, cursor + 1))
}
