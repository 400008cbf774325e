//! File system template source
//!
//! Loads form templates from an application template root with security checks

use crate::source::TemplateSource;
use crate::{TemplateError, TemplateResult};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// File system template source
///
/// Resolves template names against a root directory. Names containing `..`
/// or an absolute root are rejected, so only files inside the root can be
/// reached. Loaded contents are cached for the life of the source.
#[derive(Debug)]
pub struct FileSystemTemplateSource {
	/// Base directory for templates
	base_dir: PathBuf,
	/// Cache of loaded templates
	cache: RwLock<HashMap<String, String>>,
	/// Whether to use caching
	use_cache: bool,
}

impl FileSystemTemplateSource {
	/// Create a new file system template source
	///
	/// # Example
	///
	/// ```rust,no_run
	/// use reinhardt_form_templates::FileSystemTemplateSource;
	/// use std::path::Path;
	///
	/// let source = FileSystemTemplateSource::new(Path::new("/app/templates/forms"));
	/// ```
	pub fn new(base_dir: &Path) -> Self {
		Self {
			base_dir: base_dir.to_path_buf(),
			cache: RwLock::new(HashMap::new()),
			use_cache: true,
		}
	}

	/// Create a source that re-reads files on every load
	pub fn new_without_cache(base_dir: &Path) -> Self {
		Self {
			base_dir: base_dir.to_path_buf(),
			cache: RwLock::new(HashMap::new()),
			use_cache: false,
		}
	}

	/// Get the base directory
	pub fn base_dir(&self) -> &Path {
		&self.base_dir
	}

	/// Validate path and resolve it below the base directory
	fn resolve_path(&self, name: &str) -> TemplateResult<PathBuf> {
		let template_path = Path::new(name);
		for component in template_path.components() {
			match component {
				Component::ParentDir => {
					return Err(TemplateError::TemplateNotFound(format!(
						"Directory traversal attempt detected in: {}",
						name
					)));
				}
				Component::RootDir | Component::Prefix(_) => {
					return Err(TemplateError::TemplateNotFound(format!(
						"Absolute path not allowed: {}",
						name
					)));
				}
				_ => {}
			}
		}

		let full_path = self.base_dir.join(template_path);

		// Symlinks may still point outside the root
		if let (Ok(canonical_full), Ok(canonical_base)) =
			(full_path.canonicalize(), self.base_dir.canonicalize())
		{
			if !canonical_full.starts_with(&canonical_base) {
				return Err(TemplateError::TemplateNotFound(format!(
					"Path escapes base directory: {}",
					name
				)));
			}
		}

		Ok(full_path)
	}
}

impl TemplateSource for FileSystemTemplateSource {
	fn exists(&self, name: &str) -> bool {
		if self.use_cache && self.cache.read().contains_key(name) {
			return true;
		}
		self.resolve_path(name)
			.map(|path| path.is_file())
			.unwrap_or(false)
	}

	fn load(&self, name: &str) -> TemplateResult<String> {
		if self.use_cache {
			if let Some(content) = self.cache.read().get(name) {
				return Ok(content.clone());
			}
		}

		let full_path = self.resolve_path(name)?;
		if !full_path.is_file() {
			return Err(TemplateError::TemplateNotFound(name.to_string()));
		}

		let content = fs::read_to_string(&full_path)?;
		tracing::debug!(template = %name, path = %full_path.display(), "loaded form template");

		if self.use_cache {
			self.cache
				.write()
				.insert(name.to_string(), content.clone());
		}

		Ok(content)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::fs;
	use tempfile::TempDir;

	fn create_template(dir: &Path, name: &str, content: &str) {
		let file_path = dir.join(name);
		if let Some(parent) = file_path.parent() {
			fs::create_dir_all(parent).unwrap();
		}
		fs::write(file_path, content).unwrap();
	}

	#[rstest]
	fn test_load_template() {
		let temp_dir = TempDir::new().unwrap();
		create_template(temp_dir.path(), "inputs/string_input.html", "<input />");

		let source = FileSystemTemplateSource::new(temp_dir.path());

		assert!(source.exists("inputs/string_input.html"));
		assert_eq!(source.load("inputs/string_input.html").unwrap(), "<input />");
	}

	#[rstest]
	fn test_missing_template() {
		let temp_dir = TempDir::new().unwrap();
		let source = FileSystemTemplateSource::new(temp_dir.path());

		assert!(!source.exists("inputs/string_input.html"));
		assert!(matches!(
			source.load("inputs/string_input.html"),
			Err(TemplateError::TemplateNotFound(_))
		));
	}

	#[rstest]
	fn test_directory_is_not_a_template() {
		let temp_dir = TempDir::new().unwrap();
		fs::create_dir_all(temp_dir.path().join("inputs")).unwrap();
		let source = FileSystemTemplateSource::new(temp_dir.path());

		assert!(!source.exists("inputs"));
	}

	#[rstest]
	#[case("../etc/passwd")]
	#[case("inputs/../../secret.html")]
	#[case("/etc/passwd")]
	fn test_escaping_names_rejected(#[case] name: &str) {
		let temp_dir = TempDir::new().unwrap();
		let source = FileSystemTemplateSource::new(temp_dir.path());

		assert!(!source.exists(name));
		assert!(source.load(name).is_err());
	}

	#[rstest]
	fn test_cached_content_survives_file_removal() {
		let temp_dir = TempDir::new().unwrap();
		create_template(temp_dir.path(), "fieldset.html", "cached");
		let source = FileSystemTemplateSource::new(temp_dir.path());

		assert_eq!(source.load("fieldset.html").unwrap(), "cached");
		fs::remove_file(temp_dir.path().join("fieldset.html")).unwrap();

		assert!(source.exists("fieldset.html"));
		assert_eq!(source.load("fieldset.html").unwrap(), "cached");
	}

	#[rstest]
	fn test_without_cache_rereads() {
		let temp_dir = TempDir::new().unwrap();
		create_template(temp_dir.path(), "fieldset.html", "first");
		let source = FileSystemTemplateSource::new_without_cache(temp_dir.path());

		assert_eq!(source.load("fieldset.html").unwrap(), "first");
		create_template(temp_dir.path(), "fieldset.html", "second");
		assert_eq!(source.load("fieldset.html").unwrap(), "second");
	}
}
