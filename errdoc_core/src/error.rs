use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ErrdocError {
	#[error(transparent)]
	#[diagnostic(code(errdoc::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read definitions file `{path}`: {reason}")]
	#[diagnostic(
		code(errdoc::definitions),
		help("the definitions file must exist — check the `definitions` path in errdoc.toml")
	)]
	Definitions { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(errdoc::config_parse),
		help("check that errdoc.toml is valid TOML with `definitions`, `document`, and `[components]` entries")
	)]
	ConfigParse(String),

	#[error("component source directory not found: `{path}`")]
	#[diagnostic(
		code(errdoc::missing_directory),
		help("check the `[components]` paths in errdoc.toml")
	)]
	MissingDirectory { path: String },

	#[error("symlink cycle detected at: `{path}`")]
	#[diagnostic(
		code(errdoc::symlink_cycle),
		help("remove the circular symlink from the scanned source tree")
	)]
	SymlinkCycle { path: String },

	#[error("failed to read document `{path}`: {reason}")]
	#[diagnostic(
		code(errdoc::document_read),
		help("the reference document must exist before it can be rewritten")
	)]
	DocumentRead { path: String, reason: String },

	#[error("failed to write document `{path}`: {reason}")]
	#[diagnostic(code(errdoc::document_write))]
	DocumentWrite { path: String, reason: String },
}

pub type ErrdocResult<T> = Result<T, ErrdocError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
