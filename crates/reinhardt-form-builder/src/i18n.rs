//! Localization of form text
//!
//! The builder asks a [`Translator`] for every piece of user-facing text it
//! generates (labels, hints, the yes/no pair, button captions), always with
//! a default so an empty catalog still produces readable markup.

use std::collections::HashMap;

/// Looks up localized text.
pub trait Translator: Send + Sync {
	/// Translate `key` within `scope`, falling back to `default`.
	///
	/// The full lookup key is `{scope}.{key}`; an empty scope uses `key` alone.
	fn translate(&self, key: &str, default: &str, scope: &str) -> String;
}

/// Always returns the default text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTranslator;

impl Translator for NullTranslator {
	fn translate(&self, _key: &str, default: &str, _scope: &str) -> String {
		default.to_string()
	}
}

/// Replace `%{name}` placeholders with values.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::i18n::interpolate;
///
/// assert_eq!(interpolate("Create %{model}", &[("model", "Post")]), "Create Post");
/// ```
pub fn interpolate(text: &str, values: &[(&str, &str)]) -> String {
	let mut result = text.to_string();
	for (name, value) in values {
		result = result.replace(&format!("%{{{}}}", name), value);
	}
	result
}

/// A message catalog for one locale keyed by fully scoped keys.
///
/// # Example
/// ```
/// use reinhardt_form_builder::i18n::{CatalogTranslator, Translator};
///
/// let mut catalog = CatalogTranslator::new("fr");
/// catalog.add_translation("formtastic.yes", "Oui");
/// catalog.add_translation("formtastic.labels.post.title", "Titre");
///
/// assert_eq!(catalog.translate("yes", "Yes", "formtastic"), "Oui");
/// assert_eq!(catalog.translate("no", "No", "formtastic"), "No");
/// assert_eq!(catalog.translate("labels.post.title", "Title", "formtastic"), "Titre");
/// ```
#[derive(Debug, Clone)]
pub struct CatalogTranslator {
	locale: String,
	messages: HashMap<String, String>,
}

impl CatalogTranslator {
	/// Create an empty catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a translation under a fully scoped key
	pub fn add_translation(&mut self, key: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(key.into(), translation.into());
	}

	/// Builder-style [`add_translation`](Self::add_translation)
	pub fn with_translation(mut self, key: impl Into<String>, translation: impl Into<String>) -> Self {
		self.add_translation(key, translation);
		self
	}

	/// Get a translation by fully scoped key
	pub fn get(&self, key: &str) -> Option<&String> {
		self.messages.get(key)
	}

	/// Number of translations
	pub fn len(&self) -> usize {
		self.messages.len()
	}

	/// Whether the catalog has no translations
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}

impl Translator for CatalogTranslator {
	fn translate(&self, key: &str, default: &str, scope: &str) -> String {
		let full_key = if scope.is_empty() {
			key.to_string()
		} else {
			format!("{}.{}", scope, key)
		};
		match self.messages.get(&full_key) {
			Some(text) => text.clone(),
			None => {
				tracing::trace!(locale = %self.locale, key = %full_key, "translation missing, using default");
				default.to_string()
			}
		}
	}
}
