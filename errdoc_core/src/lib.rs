//! `errdoc_core` is the core library for the errdoc synchronization tool.
//! It keeps an error-code reference document in sync with the codebase that
//! raises the codes: canonical messages come from a properties file, usage
//! flags come from scanning component source trees, and the markdown
//! document's per-code sections are rewritten to match.
//!
//! ## Processing Pipeline
//!
//! ```text
//! error.properties
//!   → Registry (code → message template, `%s` collapsed to `*`)
//!   → Scanner (walks each component tree, finds `error(<code>)` calls)
//!   → Document updater (rewrites `### <code>` sections in the reference doc)
//!   → Reconciliation (defined codes with no document section)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `errdoc.toml`: definitions
//!   path, component source roots, document path, and source extension.
//! - [`document`] — Line-oriented section parser and renderer for the
//!   reference document.
//! - [`scanner`] — Recursive source-tree scan for error-code invocations.
//!
//! ## Key Types
//!
//! - [`CodeRegistry`] — The in-memory registry of code descriptors.
//! - [`CodeDescriptor`] — One code's message template and usage flags.
//! - [`Component`] — The two scanned components (runtime, annotation
//!   processor).
//! - [`SyncResult`] — A computed synchronization pass, ready to be written.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use errdoc_core::config::ErrdocConfig;
//! use errdoc_core::{compute_sync, write_document};
//!
//! let root = Path::new(".");
//! let config = ErrdocConfig::load(root).unwrap();
//! let result = compute_sync(root, &config).unwrap();
//!
//! if result.document_changed() {
//! 	write_document(&result).unwrap();
//! }
//! for descriptor in result.unmatched() {
//! 	eprintln!("error code {} is not documented", descriptor.code);
//! }
//! ```

pub use config::*;
pub use document::*;
pub use engine::*;
pub use error::*;
pub use registry::*;
pub use scanner::*;

pub mod config;
pub mod document;
mod engine;
mod error;
mod registry;
pub mod scanner;
