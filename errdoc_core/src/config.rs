use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::ErrdocError;
use crate::ErrdocResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["errdoc.toml", ".errdoc.toml", ".config/errdoc.toml"];

/// Configuration loaded from an `errdoc.toml` file.
///
/// Every entry has a fixed default matching the layout of the fulib-fx
/// repository, so a config file is only needed when the project deviates
/// from it:
///
/// ```toml
/// definitions = "framework/src/main/resources/org/fulib/fx/lang/error.properties"
/// document = "ERROR_CODES.md"
/// extension = "java"
///
/// [components]
/// runtime = "framework/src/main/java"
/// annotation_processor = "annotation-processor/src/main/java"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ErrdocConfig {
	/// Relative path to the properties file defining canonical error
	/// messages.
	#[serde(default = "default_definitions")]
	pub definitions: PathBuf,
	/// Relative path to the markdown reference document that is rewritten.
	#[serde(default = "default_document")]
	pub document: PathBuf,
	/// File extension (without the leading dot) of scanned source files.
	#[serde(default = "default_extension")]
	pub extension: String,
	/// Source directory roots for the two scanned components.
	#[serde(default)]
	pub components: ComponentsConfig,
}

/// Source directory roots for the runtime and annotation-processor
/// components.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentsConfig {
	/// Root of the runtime component's source tree.
	#[serde(default = "default_runtime_dir")]
	pub runtime: PathBuf,
	/// Root of the annotation processor's source tree.
	#[serde(default = "default_annotation_processor_dir")]
	pub annotation_processor: PathBuf,
}

impl Default for ComponentsConfig {
	fn default() -> Self {
		Self {
			runtime: default_runtime_dir(),
			annotation_processor: default_annotation_processor_dir(),
		}
	}
}

impl Default for ErrdocConfig {
	fn default() -> Self {
		Self {
			definitions: default_definitions(),
			document: default_document(),
			extension: default_extension(),
			components: ComponentsConfig::default(),
		}
	}
}

fn default_definitions() -> PathBuf {
	PathBuf::from("framework/src/main/resources/org/fulib/fx/lang/error.properties")
}

fn default_document() -> PathBuf {
	PathBuf::from("ERROR_CODES.md")
}

fn default_extension() -> String {
	"java".to_string()
}

fn default_runtime_dir() -> PathBuf {
	PathBuf::from("framework/src/main/java")
}

fn default_annotation_processor_dir() -> PathBuf {
	PathBuf::from("annotation-processor/src/main/java")
}

impl ErrdocConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns the defaults if no config file exists.
	pub fn load(root: &Path) -> ErrdocResult<ErrdocConfig> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(ErrdocConfig::default());
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: ErrdocConfig =
			toml::from_str(&content).map_err(|e| ErrdocError::ConfigParse(e.to_string()))?;

		Ok(config)
	}
}
