//! Tera-based form template renderer
//!
//! Templates are pulled from a [`TemplateSource`] the first time they are
//! rendered and kept compiled for the life of the renderer. Names ending in
//! `.html` are autoescaped by Tera; pre-rendered markup handed to a layout
//! arrives as `content` and must be emitted with the `safe` filter.

use crate::source::TemplateSource;
use crate::TemplateResult;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tera::{Context, Tera};

/// Renders a named template with a locals bag.
pub trait TemplateRenderer: Send + Sync {
	/// Render `template` with `locals` (a JSON object).
	fn render(&self, template: &str, locals: &Value) -> TemplateResult<String>;

	/// Render `template` with `locals` plus pre-rendered `content`.
	///
	/// The content is exposed to the template as the `content` variable.
	fn render_with_layout(
		&self,
		template: &str,
		locals: &Value,
		content: &str,
	) -> TemplateResult<String> {
		let mut map = match locals {
			Value::Object(map) => map.clone(),
			Value::Null => Map::new(),
			other => {
				let mut map = Map::new();
				map.insert("locals".to_string(), other.clone());
				map
			}
		};
		map.insert("content".to_string(), Value::String(content.to_string()));
		self.render(template, &Value::Object(map))
	}
}

/// Tera-backed [`TemplateRenderer`]
///
/// # Examples
///
/// ```
/// use reinhardt_form_templates::{BuiltinTemplates, TemplateRenderer, TeraRenderer};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let renderer = TeraRenderer::new(Arc::new(BuiltinTemplates));
/// let html = renderer
///     .render("errors.html", &json!({ "errors": ["Title can't be blank"] }))
///     .unwrap();
/// assert!(html.contains("<li>Title can&#x27;t be blank</li>"));
/// ```
pub struct TeraRenderer {
	source: Arc<dyn TemplateSource>,
	tera: RwLock<Tera>,
}

impl TeraRenderer {
	/// Creates a renderer that loads templates from `source` on demand
	pub fn new(source: Arc<dyn TemplateSource>) -> Self {
		Self {
			source,
			tera: RwLock::new(Tera::default()),
		}
	}

	/// Whether `template` has already been compiled
	pub fn is_compiled(&self, template: &str) -> bool {
		self.tera
			.read()
			.get_template_names()
			.any(|name| name == template)
	}

	fn ensure_compiled(&self, template: &str) -> TemplateResult<()> {
		if self.is_compiled(template) {
			return Ok(());
		}

		let content = self.source.load(template)?;
		let mut tera = self.tera.write();
		// Another thread may have compiled it while we were loading
		if !tera.get_template_names().any(|name| name == template) {
			tera.add_raw_template(template, &content)?;
			tracing::debug!(template = %template, "compiled form template");
		}
		Ok(())
	}
}

impl fmt::Debug for TeraRenderer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TeraRenderer").finish_non_exhaustive()
	}
}

impl TemplateRenderer for TeraRenderer {
	fn render(&self, template: &str, locals: &Value) -> TemplateResult<String> {
		self.ensure_compiled(template)?;
		let context = Context::from_serialize(locals)?;
		let html = self.tera.read().render(template, &context)?;
		Ok(html)
	}
}
