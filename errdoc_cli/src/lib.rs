use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Keep the error-code reference document synchronized with the codebase.",
	long_about = "errdoc scans component source trees for `error(<code>)` invocations, \
	              cross-references them against the canonical message definitions in \
	              error.properties, and rewrites the per-code sections of the markdown \
	              reference document to match.\n\nRunning `errdoc` with no subcommand is \
	              equivalent to `errdoc update`.\n\nQuick start:\n  errdoc update  Rewrite the \
	              reference document\n  errdoc check   Verify the document is in sync\n  errdoc \
	              list    Show every defined code and its usage"
)]
pub struct ErrdocCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Rewrite the reference document's per-code sections.
	///
	/// Loads the error-code definitions, scans both component source trees
	/// for `error(<code>)` invocations, and replaces each recognized
	/// `### <code>` section with the current message and per-component
	/// usage status. Codes defined but never documented are reported as
	/// warnings; they do not affect the exit status.
	Update {
		/// Preview the rewrite without writing the document.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Check that the reference document is in sync.
	///
	/// Computes the same rewrite as `update` but writes nothing. Exits with
	/// a non-zero status when the document text would change or when any
	/// defined code has no documentation section, making this usable as a
	/// CI gate.
	Check {
		/// Show a unified diff between the current and expected document.
		#[arg(long, default_value_t = false)]
		diff: bool,

		/// Output format for check results. Use `text` for human-readable
		/// output, `json` for programmatic consumption, or `github` for
		/// GitHub Actions annotations that appear inline on PRs.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// List every defined error code with its message and usage status.
	///
	/// Shows the registry after scanning both component source trees:
	/// each code's message template and whether the runtime and the
	/// annotation processor reference it.
	List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption.
	Json,
	/// GitHub Actions annotation format. Emits `::warning` or `::error`
	/// annotations that appear inline on pull request diffs.
	Github,
}
