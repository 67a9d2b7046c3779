use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use errdoc_cli::Commands;
use errdoc_cli::ErrdocCli;
use errdoc_cli::OutputFormat;
use errdoc_core::ErrdocConfig;
use errdoc_core::SyncResult;
use errdoc_core::compute_sync;
use errdoc_core::document::CHECK_GLYPH;
use errdoc_core::document::CROSS_GLYPH;
use errdoc_core::write_document;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = ErrdocCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Update { dry_run }) => run_update(&args, dry_run),
		Some(Commands::Check { diff, format }) => run_check(&args, diff, format),
		Some(Commands::List) => run_list(&args),
		// Plain `errdoc` is the batch entry point: a full update run.
		None => run_update(&args, false),
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<errdoc_core::ErrdocError>() {
			Ok(errdoc_err) => {
				let report: miette::Report = (*errdoc_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let default_directive = if verbose { "errdoc_core=debug" } else { "off" };
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn resolve_root(args: &ErrdocCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn sync(args: &ErrdocCli) -> Result<SyncResult, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = ErrdocConfig::load(&root)?;
	let result = compute_sync(&root, &config)?;

	if args.verbose {
		println!(
			"Loaded {} code(s); runtime scan: {} file(s), {} hit(s); annotation processor scan: \
			 {} file(s), {} hit(s)",
			result.registry.len(),
			result.runtime_scan.files_scanned,
			result.runtime_scan.hits,
			result.annotation_processor_scan.files_scanned,
			result.annotation_processor_scan.hits,
		);
	}

	Ok(result)
}

/// Print one warning line per defined code with no documentation section.
fn print_unmatched_warnings(result: &SyncResult, root: &Path) {
	let document = make_relative(&result.document_path, root);
	for descriptor in result.unmatched() {
		eprintln!(
			"{} error code {} not found in {document}",
			colored!("warning:", yellow),
			descriptor.code,
		);
	}
}

fn run_update(args: &ErrdocCli, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let result = sync(args)?;
	let document = make_relative(&result.document_path, &root);

	if result.document_changed() {
		if dry_run {
			println!(
				"Dry run: would rewrite {} section(s) in {document}.",
				result.update.rewritten
			);
		} else {
			write_document(&result)?;
			println!(
				"Rewrote {} section(s) in {document}.",
				result.update.rewritten
			);
		}
	} else {
		println!("{document} is already up to date.");
	}

	// Reconciliation warnings are advisory only — update always succeeds.
	print_unmatched_warnings(&result, &root);

	Ok(())
}

fn run_check(
	args: &ErrdocCli,
	show_diff: bool,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let result = sync(args)?;
	let document = make_relative(&result.document_path, &root);

	let stale = result.document_changed();
	let unmatched: Vec<u32> = result.unmatched().iter().map(|d| d.code).collect();
	let ok = !stale && unmatched.is_empty();

	match format {
		OutputFormat::Json => {
			let output = serde_json::json!({
				"ok": ok,
				"stale": stale,
				"document": document,
				"rewritten": result.update.rewritten,
				"unmatched": unmatched,
			});
			println!("{output}");
		}
		OutputFormat::Github => {
			if stale {
				println!("::error file={document}::{document} is out of date — run `errdoc update`");
			}
			for code in &unmatched {
				println!("::warning file={document}::error code {code} is not documented");
			}
			if ok {
				println!("{document} is up to date and every code is documented.");
			}
		}
		OutputFormat::Text => {
			if ok {
				println!("Check passed: {document} is up to date and every code is documented.");
			} else {
				if stale {
					eprintln!("{document} is out of date. Run `errdoc update` to fix.");
					if show_diff {
						print_diff(&result.original, &result.update.content);
					}
				}
				for code in &unmatched {
					eprintln!(
						"{} error code {code} not found in {document}",
						colored!("warning:", yellow),
					);
				}
			}
		}
	}

	if !ok {
		process::exit(1);
	}

	Ok(())
}

fn run_list(args: &ErrdocCli) -> Result<(), Box<dyn std::error::Error>> {
	let result = sync(args)?;

	if result.registry.is_empty() {
		println!("No error codes defined.");
		return Ok(());
	}

	println!("{}", colored!("Error codes:", bold));
	for descriptor in result.registry.iter() {
		println!(
			"  {:>6}  runtime {}  annotation processor {}  `{}`",
			descriptor.code,
			usage_glyph(descriptor.used_by_runtime),
			usage_glyph(descriptor.used_by_annotation_processor),
			descriptor.message,
		);
	}
	println!("\n{} code(s) defined", result.registry.len());

	Ok(())
}

fn usage_glyph(used: bool) -> &'static str {
	if used { CHECK_GLYPH } else { CROSS_GLYPH }
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
