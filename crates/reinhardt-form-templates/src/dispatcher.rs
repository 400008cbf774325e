//! Template dispatch
//!
//! The dispatcher turns an ordered list of candidate template names into the
//! first one that exists and renders it.
//!
//! ## Name cache
//!
//! Each distinct candidate list is resolved once. The answer is kept for the
//! life of the dispatcher and never invalidated, which assumes the template
//! set does not change after startup. Two threads resolving the same list
//! for the first time may both consult the source and both insert; they
//! compute the same answer, so the second insert is a no-op in effect.
//!
//! When no candidate exists the first candidate is returned anyway, leaving
//! the renderer to report [`TemplateError::TemplateNotFound`](crate::TemplateError).

use crate::fs_loader::FileSystemTemplateSource;
use crate::renderer::{TemplateRenderer, TeraRenderer};
use crate::source::{BuiltinTemplates, LayeredTemplateSource, TemplateSource};
use crate::TemplateResult;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Resolves candidate template names and renders the winner.
///
/// # Examples
///
/// ```
/// use reinhardt_form_templates::TemplateDispatcher;
///
/// let dispatcher = TemplateDispatcher::builtin();
/// let candidates = vec![
///     "inputs/post/string_input.html".to_string(),
///     "inputs/string_input.html".to_string(),
///     "inputs/stringish_input.html".to_string(),
/// ];
///
/// assert_eq!(dispatcher.resolve(&candidates), "inputs/stringish_input.html");
/// assert_eq!(dispatcher.cached_entries(), 1);
/// ```
pub struct TemplateDispatcher {
	source: Arc<dyn TemplateSource>,
	renderer: Arc<dyn TemplateRenderer>,
	cache: RwLock<HashMap<Vec<String>, String>>,
}

impl TemplateDispatcher {
	/// Dispatcher over `source`, rendering with a [`TeraRenderer`] on the same source
	pub fn new(source: Arc<dyn TemplateSource>) -> Self {
		let renderer = Arc::new(TeraRenderer::new(Arc::clone(&source)));
		Self::with_renderer(source, renderer)
	}

	/// Dispatcher with a custom renderer
	pub fn with_renderer(
		source: Arc<dyn TemplateSource>,
		renderer: Arc<dyn TemplateRenderer>,
	) -> Self {
		Self {
			source,
			renderer,
			cache: RwLock::new(HashMap::new()),
		}
	}

	/// Dispatcher over the built-in templates only
	pub fn builtin() -> Self {
		Self::new(Arc::new(BuiltinTemplates))
	}

	/// Dispatcher over an optional template root layered above the built-ins
	pub fn from_root(root: Option<&Path>) -> Self {
		match root {
			Some(root) => {
				let layered = LayeredTemplateSource::new()
					.with_layer(Arc::new(FileSystemTemplateSource::new(root)))
					.with_layer(Arc::new(BuiltinTemplates));
				Self::new(Arc::new(layered))
			}
			None => Self::builtin(),
		}
	}

	/// Resolve the first existing candidate, memoized per candidate list
	pub fn resolve(&self, candidates: &[String]) -> String {
		if let Some(found) = self.cache.read().get(candidates) {
			tracing::trace!(template = %found, "template name cache hit");
			return found.clone();
		}

		let resolved = match candidates.iter().find(|name| self.source.exists(name)) {
			Some(name) => name.clone(),
			None => {
				let fallback = candidates.first().cloned().unwrap_or_default();
				tracing::warn!(
					candidates = ?candidates,
					fallback = %fallback,
					"no candidate template exists, deferring to renderer"
				);
				fallback
			}
		};

		tracing::debug!(template = %resolved, "template name cache fill");
		self.cache
			.write()
			.insert(candidates.to_vec(), resolved.clone());
		resolved
	}

	/// Resolve and render
	pub fn render(&self, candidates: &[String], locals: &Value) -> TemplateResult<String> {
		let template = self.resolve(candidates);
		self.renderer.render(&template, locals)
	}

	/// Resolve and render with pre-rendered content
	pub fn render_with_layout(
		&self,
		candidates: &[String],
		locals: &Value,
		content: &str,
	) -> TemplateResult<String> {
		let template = self.resolve(candidates);
		self.renderer.render_with_layout(&template, locals, content)
	}

	/// Render a single, known template name
	pub fn render_template(&self, template: &str, locals: &Value) -> TemplateResult<String> {
		self.render(&[template.to_string()], locals)
	}

	/// Render a single, known layout template with pre-rendered content
	pub fn render_layout(
		&self,
		template: &str,
		locals: &Value,
		content: &str,
	) -> TemplateResult<String> {
		self.render_with_layout(&[template.to_string()], locals, content)
	}

	/// Number of memoized candidate lists
	pub fn cached_entries(&self) -> usize {
		self.cache.read().len()
	}
}

impl fmt::Debug for TemplateDispatcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TemplateDispatcher")
			.field("cached_entries", &self.cached_entries())
			.finish_non_exhaustive()
	}
}

impl Default for TemplateDispatcher {
	fn default() -> Self {
		Self::builtin()
	}
}
