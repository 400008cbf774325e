//! Form builder configuration
//!
//! One [`FormBuilderConfig`] is built at startup (in code, or from a TOML
//! file) and handed by reference to every builder. Nothing in this crate
//! keeps configuration in global state.
//!
//! ```toml
//! all_fields_required_by_default = false
//! label_str_method = "titleize"
//! inline_errors = "list"
//! template_root = "templates/forms"
//!
//! [[buttons]]
//! name = "save_draft"
//! kind = "submit"
//! label = "Save draft"
//! ```

use crate::buttons::ButtonSpec;
use crate::error::FormBuilderResult;
use crate::inflector;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How a field name becomes label text when no explicit label or translation exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStrategy {
	/// `author_id` → `Author`, `published_at` → `Published at`
	#[default]
	Humanize,
	/// `published_at` → `Published At`
	Titleize,
	/// The field name as written
	Verbatim,
}

impl LabelStrategy {
	/// Apply the strategy to a field name
	pub fn apply(&self, field: &str) -> String {
		match self {
			LabelStrategy::Humanize => inflector::humanize(field),
			LabelStrategy::Titleize => inflector::titleize(field),
			LabelStrategy::Verbatim => field.to_string(),
		}
	}
}

/// How inline errors are presented under an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineErrors {
	/// All messages joined into one sentence
	#[default]
	Sentence,
	/// One list item per message
	List,
	/// Only the first message
	First,
	/// Errors are not rendered inline
	None,
}

impl InlineErrors {
	/// Name handed to templates
	pub fn as_str(&self) -> &'static str {
		match self {
			InlineErrors::Sentence => "sentence",
			InlineErrors::List => "list",
			InlineErrors::First => "first",
			InlineErrors::None => "none",
		}
	}
}

/// One of the parts rendered inside an input wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlinePart {
	/// The label and control
	Input,
	/// The hint paragraph
	Hints,
	/// The inline errors
	Errors,
}

fn default_label_methods() -> Vec<String> {
	[
		"to_label",
		"display_name",
		"full_name",
		"name",
		"title",
		"username",
		"login",
		"value",
		"to_s",
	]
	.iter()
	.map(|s| s.to_string())
	.collect()
}

fn default_file_methods() -> Vec<String> {
	["file", "public_filename", "filename"]
		.iter()
		.map(|s| s.to_string())
		.collect()
}

/// Process-wide form builder settings.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::{FormBuilderConfig, LabelStrategy};
///
/// let config = FormBuilderConfig::default()
///     .with_default_required(false)
///     .with_label_strategy(LabelStrategy::Titleize);
///
/// assert!(!config.all_fields_required_by_default);
/// assert_eq!(config.collection_value_method, "id");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormBuilderConfig {
	/// Required flag used when neither the caller nor validations decide
	pub all_fields_required_by_default: bool,
	/// Label text strategy for field names
	pub label_str_method: LabelStrategy,
	/// Accessors tried in order to label a record in a collection
	pub collection_label_methods: Vec<String>,
	/// Accessor used for a record's option value
	pub collection_value_method: String,
	/// Probes that mark an attribute value as an uploaded file
	pub file_methods: Vec<String>,
	/// Application template root layered above the built-in templates
	pub template_root: Option<PathBuf>,
	/// Look labels and hints up through the translator by default
	pub i18n_lookups_by_default: bool,
	/// Scope prefix for translation keys
	pub i18n_scope: String,
	/// Markup appended to required labels (not escaped)
	pub required_string: String,
	/// Markup appended to optional labels (not escaped)
	pub optional_string: String,
	/// Inline error presentation
	pub inline_errors: InlineErrors,
	/// Order of the parts inside an input wrapper
	pub inline_order: Vec<InlinePart>,
	/// Add a blank option to selects unless the input says otherwise
	pub include_blank_for_select_by_default: bool,
	/// Extra buttons registered by name
	pub buttons: Vec<ButtonSpec>,
}

impl Default for FormBuilderConfig {
	fn default() -> Self {
		Self {
			all_fields_required_by_default: true,
			label_str_method: LabelStrategy::Humanize,
			collection_label_methods: default_label_methods(),
			collection_value_method: "id".to_string(),
			file_methods: default_file_methods(),
			template_root: None,
			i18n_lookups_by_default: false,
			i18n_scope: "formtastic".to_string(),
			required_string: r#"<abbr title="required">*</abbr>"#.to_string(),
			optional_string: String::new(),
			inline_errors: InlineErrors::Sentence,
			inline_order: vec![InlinePart::Input, InlinePart::Hints, InlinePart::Errors],
			include_blank_for_select_by_default: true,
			buttons: Vec::new(),
		}
	}
}

impl FormBuilderConfig {
	/// Parse configuration from TOML text; missing keys take their defaults
	pub fn from_toml_str(text: &str) -> FormBuilderResult<Self> {
		Ok(toml::from_str(text)?)
	}

	/// Read and parse a TOML configuration file
	pub fn from_toml_file(path: &Path) -> FormBuilderResult<Self> {
		let text = fs::read_to_string(path)?;
		Self::from_toml_str(&text)
	}

	pub fn with_default_required(mut self, required: bool) -> Self {
		self.all_fields_required_by_default = required;
		self
	}

	pub fn with_label_strategy(mut self, strategy: LabelStrategy) -> Self {
		self.label_str_method = strategy;
		self
	}

	pub fn with_collection_label_methods<I, S>(mut self, methods: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.collection_label_methods = methods.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_file_methods<I, S>(mut self, methods: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.file_methods = methods.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_template_root(mut self, root: impl Into<PathBuf>) -> Self {
		self.template_root = Some(root.into());
		self
	}

	pub fn with_i18n_lookups(mut self, enabled: bool) -> Self {
		self.i18n_lookups_by_default = enabled;
		self
	}

	pub fn with_inline_errors(mut self, mode: InlineErrors) -> Self {
		self.inline_errors = mode;
		self
	}

	pub fn with_inline_order(mut self, order: Vec<InlinePart>) -> Self {
		self.inline_order = order;
		self
	}

	pub fn with_required_string(mut self, markup: impl Into<String>) -> Self {
		self.required_string = markup.into();
		self
	}

	pub fn with_button(mut self, button: ButtonSpec) -> Self {
		self.buttons.push(button);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::buttons::ButtonKind;
	use rstest::rstest;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[rstest]
	fn test_defaults() {
		let config = FormBuilderConfig::default();

		assert!(config.all_fields_required_by_default);
		assert_eq!(config.label_str_method, LabelStrategy::Humanize);
		assert_eq!(config.collection_label_methods.first().unwrap(), "to_label");
		assert_eq!(config.collection_label_methods.last().unwrap(), "to_s");
		assert_eq!(config.file_methods, vec!["file", "public_filename", "filename"]);
		assert_eq!(config.i18n_scope, "formtastic");
		assert!(config.template_root.is_none());
	}

	#[rstest]
	fn test_from_toml_partial_overrides() {
		let config = FormBuilderConfig::from_toml_str(
			r#"
all_fields_required_by_default = false
label_str_method = "titleize"
inline_errors = "list"
inline_order = ["errors", "input", "hints"]
template_root = "templates/forms"

[[buttons]]
name = "save_draft"
kind = "submit"
label = "Save draft"
"#,
		)
		.unwrap();

		assert!(!config.all_fields_required_by_default);
		assert_eq!(config.label_str_method, LabelStrategy::Titleize);
		assert_eq!(config.inline_errors, InlineErrors::List);
		assert_eq!(config.inline_order[0], InlinePart::Errors);
		assert_eq!(
			config.template_root.as_deref(),
			Some(Path::new("templates/forms"))
		);
		assert_eq!(config.buttons.len(), 1);
		assert_eq!(config.buttons[0].kind, ButtonKind::Submit);
		// Untouched keys keep their defaults
		assert_eq!(config.collection_value_method, "id");
	}

	#[rstest]
	fn test_from_toml_rejects_unknown_strategy() {
		let result = FormBuilderConfig::from_toml_str(r#"label_str_method = "shout""#);
		assert!(result.is_err());
	}

	#[rstest]
	fn test_from_toml_file() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "include_blank_for_select_by_default = false").unwrap();

		let config = FormBuilderConfig::from_toml_file(file.path()).unwrap();
		assert!(!config.include_blank_for_select_by_default);
	}

	#[rstest]
	#[case(LabelStrategy::Humanize, "published_at", "Published at")]
	#[case(LabelStrategy::Titleize, "published_at", "Published At")]
	#[case(LabelStrategy::Verbatim, "published_at", "published_at")]
	fn test_label_strategy(
		#[case] strategy: LabelStrategy,
		#[case] field: &str,
		#[case] expected: &str,
	) {
		assert_eq!(strategy.apply(field), expected);
	}
}
