//! The `<form>` wrapper around a builder

use crate::builder::SemanticFormBuilder;
use crate::collection::display_value;
use crate::error::FormBuilderResult;
use crate::options::HtmlAttributes;
use crate::schema::RecordSource;
use serde_json::json;

/// Wraps builder output in `<form class="formtastic {param_key}">`.
///
/// Persisted records default to `patch`, tunnelled through a hidden
/// `_method` field; everything else posts.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::{FormEnvironment, FormObject, InputOptions};
/// use serde_json::Value;
///
/// struct Post;
///
/// impl FormObject for Post {
///     fn model_name(&self) -> &str {
///         "Post"
///     }
///
///     fn is_new_record(&self) -> Option<bool> {
///         Some(true)
///     }
///
///     fn value_of(&self, _field: &str) -> Option<Value> {
///         None
///     }
/// }
///
/// let env = FormEnvironment::default();
/// let post = Post;
/// let html = env
///     .form(&post, "/posts")
///     .render(|f| f.input("title", InputOptions::new()))
///     .unwrap();
///
/// assert!(html.starts_with(r#"<form class="formtastic post" id="new_post""#));
/// assert!(html.contains(r#"method="post""#));
/// ```
pub struct SemanticForm<'a> {
	builder: SemanticFormBuilder<'a>,
	action: String,
	method: Option<String>,
	id: Option<String>,
	class: Option<String>,
	html: HtmlAttributes,
}

impl<'a> SemanticForm<'a> {
	pub fn new(builder: SemanticFormBuilder<'a>, action: &str) -> Self {
		Self {
			builder,
			action: action.to_string(),
			method: None,
			id: None,
			class: None,
			html: HtmlAttributes::new(),
		}
	}

	/// HTTP method; anything but `get` and `post` is sent as a `_method` override
	pub fn method(mut self, method: &str) -> Self {
		self.method = Some(method.to_ascii_lowercase());
		self
	}

	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Extra class appended after `formtastic {param_key}`
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	pub fn html(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.html.insert(name.into(), value.into());
		self
	}

	pub fn with_records(mut self, records: &'a dyn RecordSource) -> Self {
		self.builder = self.builder.with_records(records);
		self
	}

	pub fn builder(&self) -> &SemanticFormBuilder<'a> {
		&self.builder
	}

	/// `new_post`, `edit_post_42`, or the bare param key for non-persistent objects
	pub fn dom_id(&self) -> String {
		let object = self.builder.object();
		let param_key = object.param_key();
		match object.is_new_record() {
			Some(true) => format!("new_{}", param_key),
			Some(false) => match object.id() {
				Some(id) => format!("edit_{}_{}", param_key, display_value(&id)),
				None => format!("edit_{}", param_key),
			},
			None => param_key,
		}
	}

	fn http_method(&self) -> String {
		match &self.method {
			Some(method) => method.clone(),
			None if self.builder.object().is_new_record() == Some(false) => "patch".to_string(),
			None => "post".to_string(),
		}
	}

	/// Render `content` with the builder and wrap it in the form tag
	pub fn render<F>(&self, content: F) -> FormBuilderResult<String>
	where
		F: FnOnce(&SemanticFormBuilder<'a>) -> FormBuilderResult<String>,
	{
		let inner = content(&self.builder)?;

		let method = self.http_method();
		let (form_method, tunnelled) = match method.as_str() {
			"get" | "post" => (method.clone(), None),
			_ => ("post".to_string(), Some(method.clone())),
		};
		let mut class = format!("formtastic {}", self.builder.object().param_key());
		if let Some(extra) = &self.class {
			class.push(' ');
			class.push_str(extra);
		}

		let locals = json!({
			"class": class,
			"id": self.id.clone().unwrap_or_else(|| self.dom_id()),
			"action": self.action,
			"method": form_method,
			"http_method": tunnelled,
			"attrs": self.html,
		});
		tracing::debug!(form = %self.dom_id(), method = %method, "rendering form");
		Ok(self
			.builder
			.environment()
			.templates()
			.render_layout("form.html", &locals, &inner)?)
	}
}
