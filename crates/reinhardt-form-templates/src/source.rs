//! Template sources
//!
//! A [`TemplateSource`] answers two questions for the dispatcher and the
//! renderer: does a template with this name exist, and what is its text.

use crate::{TemplateError, TemplateResult};
use std::fmt;
use std::sync::Arc;

/// A read-only provider of template text keyed by template name.
///
/// Names are relative, `/`-separated paths such as `inputs/string_input.html`.
pub trait TemplateSource: Send + Sync {
	/// Whether a template with this name can be loaded.
	fn exists(&self, name: &str) -> bool;

	/// Load the template text.
	fn load(&self, name: &str) -> TemplateResult<String>;
}

impl<T: TemplateSource + ?Sized> TemplateSource for Arc<T> {
	fn exists(&self, name: &str) -> bool {
		(**self).exists(name)
	}

	fn load(&self, name: &str) -> TemplateResult<String> {
		(**self).load(name)
	}
}

const BUILTIN: &[(&str, &str)] = &[
	("form.html", include_str!("../templates/form.html")),
	("fieldset.html", include_str!("../templates/fieldset.html")),
	("errors.html", include_str!("../templates/errors.html")),
	(
		"buttons/button.html",
		include_str!("../templates/buttons/button.html"),
	),
	(
		"inputs/wrapper.html",
		include_str!("../templates/inputs/wrapper.html"),
	),
	(
		"inputs/stringish_input.html",
		include_str!("../templates/inputs/stringish_input.html"),
	),
	(
		"inputs/text_input.html",
		include_str!("../templates/inputs/text_input.html"),
	),
	(
		"inputs/select_input.html",
		include_str!("../templates/inputs/select_input.html"),
	),
	(
		"inputs/radio_input.html",
		include_str!("../templates/inputs/radio_input.html"),
	),
	(
		"inputs/check_boxes_input.html",
		include_str!("../templates/inputs/check_boxes_input.html"),
	),
	(
		"inputs/boolean_input.html",
		include_str!("../templates/inputs/boolean_input.html"),
	),
	(
		"inputs/hidden_input.html",
		include_str!("../templates/inputs/hidden_input.html"),
	),
	(
		"inputs/file_input.html",
		include_str!("../templates/inputs/file_input.html"),
	),
];

/// The templates shipped with this crate.
///
/// # Examples
///
/// ```
/// use reinhardt_form_templates::{BuiltinTemplates, TemplateSource};
///
/// let builtin = BuiltinTemplates;
/// assert!(builtin.exists("inputs/wrapper.html"));
/// assert!(!builtin.exists("inputs/binary_input.html"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
	/// Names of every built-in template.
	pub fn names() -> impl Iterator<Item = &'static str> {
		BUILTIN.iter().map(|(name, _)| *name)
	}

	fn get(name: &str) -> Option<&'static str> {
		BUILTIN
			.iter()
			.find(|(candidate, _)| *candidate == name)
			.map(|(_, content)| *content)
	}
}

impl TemplateSource for BuiltinTemplates {
	fn exists(&self, name: &str) -> bool {
		Self::get(name).is_some()
	}

	fn load(&self, name: &str) -> TemplateResult<String> {
		Self::get(name)
			.map(str::to_string)
			.ok_or_else(|| TemplateError::TemplateNotFound(name.to_string()))
	}
}

/// Consults several sources in order; the first source that has a template wins.
///
/// The usual stack is an application template root followed by
/// [`BuiltinTemplates`], so applications override individual templates by
/// dropping a file with the same name into their root.
#[derive(Clone, Default)]
pub struct LayeredTemplateSource {
	layers: Vec<Arc<dyn TemplateSource>>,
}

impl LayeredTemplateSource {
	/// Create an empty layered source
	pub fn new() -> Self {
		Self { layers: Vec::new() }
	}

	/// Append a layer with lower priority than the existing ones
	pub fn with_layer(mut self, layer: Arc<dyn TemplateSource>) -> Self {
		self.layers.push(layer);
		self
	}

	/// Number of layers
	pub fn len(&self) -> usize {
		self.layers.len()
	}

	/// Whether no layers have been added
	pub fn is_empty(&self) -> bool {
		self.layers.is_empty()
	}
}

impl fmt::Debug for LayeredTemplateSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LayeredTemplateSource")
			.field("layers", &self.layers.len())
			.finish()
	}
}

impl TemplateSource for LayeredTemplateSource {
	fn exists(&self, name: &str) -> bool {
		self.layers.iter().any(|layer| layer.exists(name))
	}

	fn load(&self, name: &str) -> TemplateResult<String> {
		for layer in &self.layers {
			if layer.exists(name) {
				return layer.load(name);
			}
		}
		Err(TemplateError::TemplateNotFound(name.to_string()))
	}
}
