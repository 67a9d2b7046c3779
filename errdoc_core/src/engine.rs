use std::path::Path;
use std::path::PathBuf;

use crate::CodeDescriptor;
use crate::CodeRegistry;
use crate::Component;
use crate::ErrdocError;
use crate::ErrdocResult;
use crate::config::ErrdocConfig;
use crate::document::DocumentUpdate;
use crate::document::rewrite_sections;
use crate::scanner::UsageScan;
use crate::scanner::scan_component;

/// The outcome of one full synchronization pass: the marked-up registry,
/// the original and rewritten document text, and per-component scan stats.
///
/// Computing the sync performs no writes — call [`write_document`] to
/// persist the rewritten document.
#[derive(Debug)]
pub struct SyncResult {
	/// Registry with usage and matched flags populated.
	pub registry: CodeRegistry,
	/// Absolute path of the reference document.
	pub document_path: PathBuf,
	/// Document text as read from disk.
	pub original: String,
	/// Rewritten document text plus section bookkeeping.
	pub update: DocumentUpdate,
	/// Scan of the runtime component's sources.
	pub runtime_scan: UsageScan,
	/// Scan of the annotation processor's sources.
	pub annotation_processor_scan: UsageScan,
}

impl SyncResult {
	/// Whether the rewrite changed the document text.
	#[must_use]
	pub fn document_changed(&self) -> bool {
		self.original != self.update.content
	}

	/// Registry codes never matched in the document — each one is a defined
	/// code with no documentation section.
	#[must_use]
	pub fn unmatched(&self) -> Vec<&CodeDescriptor> {
		self.registry.unmatched()
	}
}

/// Run the full pipeline rooted at `root`: load definitions, scan both
/// component source trees, and rewrite the document sections in memory.
///
/// Each stage produces an independent result that is merged into the
/// registry afterwards, so the registry is only ever mutated here.
pub fn compute_sync(root: &Path, config: &ErrdocConfig) -> ErrdocResult<SyncResult> {
	let mut registry = CodeRegistry::load(&root.join(&config.definitions))?;

	let runtime_scan = scan_component(&root.join(&config.components.runtime), &config.extension)?;
	registry.mark_used(Component::Runtime, &runtime_scan.codes);

	let annotation_processor_scan = scan_component(
		&root.join(&config.components.annotation_processor),
		&config.extension,
	)?;
	registry.mark_used(
		Component::AnnotationProcessor,
		&annotation_processor_scan.codes,
	);

	let document_path = root.join(&config.document);
	let original =
		std::fs::read_to_string(&document_path).map_err(|e| ErrdocError::DocumentRead {
			path: document_path.display().to_string(),
			reason: e.to_string(),
		})?;

	let update = rewrite_sections(&original, &registry);
	registry.mark_matched(&update.matched);

	Ok(SyncResult {
		registry,
		document_path,
		original,
		update,
		runtime_scan,
		annotation_processor_scan,
	})
}

/// Overwrite the reference document with the rewritten text.
pub fn write_document(result: &SyncResult) -> ErrdocResult<()> {
	std::fs::write(&result.document_path, &result.update.content).map_err(|e| {
		ErrdocError::DocumentWrite {
			path: result.document_path.display().to_string(),
			reason: e.to_string(),
		}
	})
}
