//! The semantic form builder
//!
//! [`FormEnvironment`] holds what is fixed at startup: configuration, the
//! template dispatcher, the translator and the button table. A
//! [`SemanticFormBuilder`] borrows it for one model object and renders
//! inputs, fieldsets and buttons as semantic `fieldset`/`ol`/`li` markup.
//!
//! ```
//! use reinhardt_form_builder::{FormEnvironment, FormObject, InputOptions};
//! use serde_json::{Value, json};
//!
//! struct Post;
//!
//! impl FormObject for Post {
//!     fn model_name(&self) -> &str {
//!         "Post"
//!     }
//!
//!     fn value_of(&self, field: &str) -> Option<Value> {
//!         (field == "title").then(|| json!("Hello"))
//!     }
//! }
//!
//! let env = FormEnvironment::default();
//! let post = Post;
//! let html = env.builder(&post).input("title", InputOptions::new()).unwrap();
//!
//! assert!(html.contains(r#"<li class="string input required" id="post_title_input">"#));
//! assert!(html.contains(r#"name="post[title]""#));
//! assert!(html.contains(r#"value="Hello""#));
//! ```

use crate::buttons::{ButtonKind, ButtonRegistry};
use crate::collection::display_value;
use crate::config::{FormBuilderConfig, InlineErrors};
use crate::descriptor::FieldDescriptor;
use crate::error::{FormBuilderError, FormBuilderResult};
use crate::fieldset::{format_legend, to_sentence};
use crate::form::SemanticForm;
use crate::i18n::{NullTranslator, Translator, interpolate};
use crate::inflector::humanize;
use crate::options::{ButtonOptions, InputOptions, InputsOptions};
use crate::resolver::{InputTypeResolver, sanitized_object_name};
use crate::schema::{Cardinality, Column, FormObject, RecordSource};
use reinhardt_form_templates::TemplateDispatcher;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Bookkeeping columns never offered as default inputs
const NON_CONTENT_COLUMNS: &[&str] = &[
	"created_at",
	"updated_at",
	"created_on",
	"updated_on",
	"lock_version",
	"version",
];

/// Startup-time state shared by every form rendered in the application.
pub struct FormEnvironment {
	config: FormBuilderConfig,
	templates: Arc<TemplateDispatcher>,
	translator: Arc<dyn Translator>,
	buttons: ButtonRegistry,
}

impl FormEnvironment {
	/// Environment with built-in templates layered under `config.template_root`
	/// and a [`NullTranslator`]
	pub fn new(config: FormBuilderConfig) -> Self {
		let templates = Arc::new(TemplateDispatcher::from_root(
			config.template_root.as_deref(),
		));
		let buttons = ButtonRegistry::from_config(&config);
		Self {
			config,
			templates,
			translator: Arc::new(NullTranslator),
			buttons,
		}
	}

	pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
		self.translator = translator;
		self
	}

	/// Share an existing dispatcher (and its name cache)
	pub fn with_templates(mut self, templates: Arc<TemplateDispatcher>) -> Self {
		self.templates = templates;
		self
	}

	pub fn config(&self) -> &FormBuilderConfig {
		&self.config
	}

	pub fn templates(&self) -> &TemplateDispatcher {
		&self.templates
	}

	pub fn translator(&self) -> &dyn Translator {
		self.translator.as_ref()
	}

	pub fn buttons(&self) -> &ButtonRegistry {
		&self.buttons
	}

	/// Builder for `object`, named after its param key
	pub fn builder<'a>(&'a self, object: &'a dyn FormObject) -> SemanticFormBuilder<'a> {
		SemanticFormBuilder::new(self, object)
	}

	/// Form wrapper for `object` posting to `action`
	pub fn form<'a>(&'a self, object: &'a dyn FormObject, action: &str) -> SemanticForm<'a> {
		SemanticForm::new(self.builder(object), action)
	}
}

impl Default for FormEnvironment {
	fn default() -> Self {
		Self::new(FormBuilderConfig::default())
	}
}

impl fmt::Debug for FormEnvironment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormEnvironment")
			.field("config", &self.config)
			.field("templates", &self.templates)
			.field("buttons", &self.buttons)
			.finish_non_exhaustive()
	}
}

/// What an `inputs` fieldset contains.
pub enum InputsContent<'c> {
	/// The object's default fields
	Default,
	/// These fields, each with default options
	Fields(Vec<String>),
	/// Markup rendered by the caller
	Rendered(String),
	/// A closure that renders without a builder
	Block(Box<dyn FnOnce() -> FormBuilderResult<String> + 'c>),
	/// A closure handed the builder; for nested fieldsets, the child builder
	BuilderBlock(Box<dyn Fn(&SemanticFormBuilder<'_>) -> FormBuilderResult<String> + 'c>),
}

impl<'c> InputsContent<'c> {
	pub fn fields<I, S>(fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		InputsContent::Fields(fields.into_iter().map(Into::into).collect())
	}

	pub fn block<F>(block: F) -> Self
	where
		F: FnOnce() -> FormBuilderResult<String> + 'c,
	{
		InputsContent::Block(Box::new(block))
	}

	pub fn with_builder<F>(block: F) -> Self
	where
		F: Fn(&SemanticFormBuilder<'_>) -> FormBuilderResult<String> + 'c,
	{
		InputsContent::BuilderBlock(Box::new(block))
	}
}

/// What a `buttons` fieldset contains.
pub enum ButtonsContent<'c> {
	/// The commit button alone
	Default,
	/// Registered buttons by name
	Names(Vec<String>),
	/// Markup rendered by the caller
	Rendered(String),
	Block(Box<dyn FnOnce(&SemanticFormBuilder<'_>) -> FormBuilderResult<String> + 'c>),
}

impl<'c> ButtonsContent<'c> {
	pub fn names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		ButtonsContent::Names(names.into_iter().map(Into::into).collect())
	}

	pub fn block<F>(block: F) -> Self
	where
		F: FnOnce(&SemanticFormBuilder<'_>) -> FormBuilderResult<String> + 'c,
	{
		ButtonsContent::Block(Box::new(block))
	}
}

/// Renders inputs for one model object.
pub struct SemanticFormBuilder<'a> {
	env: &'a FormEnvironment,
	object: &'a dyn FormObject,
	object_name: String,
	records: Option<&'a dyn RecordSource>,
	/// Running child index per association, advanced once per nested item
	nested_child_index: RefCell<HashMap<String, usize>>,
}

impl<'a> SemanticFormBuilder<'a> {
	pub fn new(env: &'a FormEnvironment, object: &'a dyn FormObject) -> Self {
		Self {
			env,
			object,
			object_name: object.param_key(),
			records: None,
			nested_child_index: RefCell::new(HashMap::new()),
		}
	}

	/// Override the parameter name inputs are nested under
	pub fn with_object_name(mut self, object_name: impl Into<String>) -> Self {
		self.object_name = object_name.into();
		self
	}

	/// Load association collections from `records`
	pub fn with_records(mut self, records: &'a dyn RecordSource) -> Self {
		self.records = Some(records);
		self
	}

	pub fn object_name(&self) -> &str {
		&self.object_name
	}

	pub fn object(&self) -> &'a dyn FormObject {
		self.object
	}

	pub fn environment(&self) -> &'a FormEnvironment {
		self.env
	}

	fn resolver(&self) -> InputTypeResolver<'a> {
		let resolver = InputTypeResolver::new(&self.env.config, self.env.translator.as_ref());
		match self.records {
			Some(records) => resolver.with_records(records),
			None => resolver,
		}
	}

	/// Resolve `field` without rendering it
	pub fn describe(&self, field: &str, options: InputOptions) -> FormBuilderResult<FieldDescriptor> {
		self.resolver()
			.resolve(self.object, &self.object_name, field, options)
	}

	/// Render one input wrapped in its `<li>`
	pub fn input(&self, field: &str, options: InputOptions) -> FormBuilderResult<String> {
		let descriptor = self.describe(field, options)?;
		self.render_descriptor(&descriptor)
	}

	/// Render an already resolved input
	pub fn render_descriptor(&self, field: &FieldDescriptor) -> FormBuilderResult<String> {
		let candidates = field.kind.template_candidates(&self.object.param_key());
		let control = self
			.env
			.templates
			.render(&candidates, &json!({ "field": self.field_locals(field) }))?;
		let wrapped = self.env.templates.render_layout(
			"inputs/wrapper.html",
			&self.wrapper_locals(field),
			&control,
		)?;
		Ok(wrapped)
	}

	fn field_locals(&self, field: &FieldDescriptor) -> Value {
		let config = &self.env.config;
		let marker = if field.required {
			&config.required_string
		} else {
			&config.optional_string
		};
		let choices: Vec<Value> = field
			.collection
			.iter()
			.flatten()
			.map(|choice| {
				let value = display_value(&choice.value);
				let mut suffix = sanitized_object_name(&value.to_lowercase());
				if suffix.is_empty() {
					suffix = "blank".to_string();
				}
				json!({
					"label": choice.label,
					"dom_id": format!("{}_{}", field.dom_id, suffix),
					"selected": field.is_selected(choice),
					"value": value,
				})
			})
			.collect();

		json!({
			"name": field.name,
			"method": field.method,
			"kind": field.kind.as_str(),
			"html_type": field.kind.html_type(),
			"input_name": field.input_name,
			"dom_id": field.dom_id,
			"label": field.label,
			"marker": marker,
			"required": field.required,
			"value": field.value_text(),
			"checked": field.is_checked(),
			"checked_value": "1",
			"unchecked_value": "0",
			"choices": choices,
			"multiple": field.multiple,
			"include_blank": field.include_blank,
			"prompt": field.prompt,
			"input_html": field.input_html,
			"label_html": field.label_html,
		})
	}

	fn wrapper_locals(&self, field: &FieldDescriptor) -> Value {
		let config = &self.env.config;
		let mut attrs = field.wrapper_html.clone();

		let mut class = format!(
			"{} input {}",
			field.kind,
			if field.required { "required" } else { "optional" }
		);
		if !field.errors.is_empty() {
			class.push_str(" error");
		}
		if let Some(extra) = attrs.shift_remove("class") {
			class.push(' ');
			class.push_str(&extra);
		}
		let id = attrs
			.shift_remove("id")
			.unwrap_or_else(|| format!("{}_input", field.dom_id));

		let errors_text = match config.inline_errors {
			InlineErrors::Sentence => Some(to_sentence(&field.errors)),
			InlineErrors::First => field.errors.first().cloned(),
			InlineErrors::List | InlineErrors::None => None,
		}
		.filter(|text| !text.is_empty());
		let errors: &[String] = match config.inline_errors {
			InlineErrors::None => &[],
			_ => &field.errors,
		};

		json!({
			"wrapper": { "class": class, "id": id, "attrs": attrs },
			"inline_order": config.inline_order,
			"hint": field.hint,
			"errors": errors,
			"errors_mode": config.inline_errors.as_str(),
			"errors_text": errors_text,
		})
	}

	/// Fields rendered when `inputs` is given none: to-one associations,
	/// then content columns
	pub fn default_fields(&self) -> Vec<String> {
		let mut fields: Vec<String> = self
			.object
			.associations()
			.into_iter()
			.filter(|association| association.cardinality == Cardinality::One)
			.map(|association| association.name)
			.collect();
		fields.extend(
			self.object
				.columns()
				.into_iter()
				.filter(is_content_column)
				.map(|column| column.name),
		);
		fields
	}

	fn render_fields(&self, fields: &[String]) -> FormBuilderResult<String> {
		fields
			.iter()
			.map(|field| self.input(field, InputOptions::new()))
			.collect()
	}

	/// Render a fieldset of inputs.
	///
	/// With `for_association` set, one fieldset is rendered per child object
	/// through a nested builder; the content must then be fields, the default,
	/// or a closure taking the builder.
	pub fn inputs(
		&self,
		options: InputsOptions,
		content: InputsContent<'_>,
	) -> FormBuilderResult<String> {
		if let Some(association) = options.for_association.clone() {
			return self.nested_inputs(&association, &options, content);
		}

		let rendered = match content {
			InputsContent::Default => self.render_fields(&self.default_fields())?,
			InputsContent::Fields(fields) => self.render_fields(&fields)?,
			InputsContent::Rendered(markup) => markup,
			InputsContent::Block(block) => block()?,
			InputsContent::BuilderBlock(block) => block(self)?,
		};
		self.field_set("inputs", &options, options.name.clone(), &rendered)
	}

	fn nested_inputs(
		&self,
		association: &str,
		options: &InputsOptions,
		content: InputsContent<'_>,
	) -> FormBuilderResult<String> {
		if matches!(
			content,
			InputsContent::Block(_) | InputsContent::Rendered(_)
		) {
			return Err(FormBuilderError::InvalidArgument(format!(
				"inputs for association `{}` need content that receives the nested builder",
				association
			)));
		}

		let object: &'a dyn FormObject = self.object;
		let children = object.children(association);
		let mut rendered = String::new();
		for child in &children {
			let index = self.next_child_index(association);
			let builder = self.fields_for(association, *child, index - 1);
			let inner = match &content {
				InputsContent::BuilderBlock(block) => block(&builder)?,
				InputsContent::Fields(fields) => builder.render_fields(fields)?,
				_ => builder.render_fields(&builder.default_fields())?,
			};
			let legend = options
				.name
				.as_deref()
				.map(|legend| format_legend(legend, index));
			let mut item_options = options.clone();
			item_options.id = options.id.as_ref().map(|id| format!("{}_{}", id, index - 1));
			rendered.push_str(&builder.field_set("inputs", &item_options, legend, &inner)?);
		}

		tracing::debug!(
			association = %association,
			count = children.len(),
			"rendered nested fieldsets"
		);
		Ok(rendered)
	}

	/// Advance and return the 1-based counter for `association`
	fn next_child_index(&self, association: &str) -> usize {
		let mut counters = self.nested_child_index.borrow_mut();
		let counter = counters.entry(association.to_string()).or_insert(0);
		*counter += 1;
		*counter
	}

	/// Child builder for item `index` of `association`
	pub fn fields_for(
		&self,
		association: &str,
		child: &'a dyn FormObject,
		index: usize,
	) -> SemanticFormBuilder<'a> {
		SemanticFormBuilder {
			env: self.env,
			object: child,
			object_name: format!("{}[{}_attributes][{}]", self.object_name, association, index),
			records: self.records,
			nested_child_index: RefCell::new(HashMap::new()),
		}
	}

	fn field_set(
		&self,
		base_class: &str,
		options: &InputsOptions,
		legend: Option<String>,
		content: &str,
	) -> FormBuilderResult<String> {
		let class = match &options.class {
			Some(extra) => format!("{} {}", base_class, extra),
			None => base_class.to_string(),
		};
		let locals = json!({
			"class": class,
			"id": options.id,
			"attrs": options.html,
			"legend": legend,
		});
		Ok(self
			.env
			.templates
			.render_layout("fieldset.html", &locals, content)?)
	}

	/// Render a fieldset of buttons
	pub fn buttons(
		&self,
		options: InputsOptions,
		content: ButtonsContent<'_>,
	) -> FormBuilderResult<String> {
		let rendered = match content {
			ButtonsContent::Default => self.commit_button(ButtonOptions::new())?,
			ButtonsContent::Names(names) => names
				.iter()
				.map(|name| self.button(name, ButtonOptions::new()))
				.collect::<FormBuilderResult<String>>()?,
			ButtonsContent::Rendered(markup) => markup,
			ButtonsContent::Block(block) => block(self)?,
		};
		self.field_set("buttons", &options, options.name.clone(), &rendered)
	}

	/// The submit button, captioned `Create Post` / `Update Post` / `Submit Post`
	pub fn commit_button(&self, options: ButtonOptions) -> FormBuilderResult<String> {
		self.button("commit", options)
	}

	/// Render a registered button by name
	pub fn button(&self, name: &str, options: ButtonOptions) -> FormBuilderResult<String> {
		let spec = self.env.buttons.get(name)?;
		let label = match (options.label, &spec.label) {
			(Some(label), _) => label,
			(None, Some(label)) => label.clone(),
			(None, None) if spec.name == "commit" && spec.kind == ButtonKind::Submit => {
				self.commit_label()
			}
			(None, None) => self.env.translator.translate(
				&spec.name,
				&humanize(&spec.name),
				&self.env.config.i18n_scope,
			),
		};
		let wrapper_id = options.wrapper_id.unwrap_or_else(|| {
			format!("{}_{}", sanitized_object_name(&self.object_name), spec.name)
		});

		tracing::debug!(button = %spec.name, label = %label, "rendering button");
		let locals = json!({
			"wrapper_class": format!("{} button", spec.name),
			"wrapper_id": wrapper_id,
			"input_type": spec.kind.input_type(),
			"name": spec.name,
			"label": label,
			"class": options.class.or_else(|| spec.class.clone()),
			"attrs": options.button_html,
		});
		Ok(self
			.env
			.templates
			.render_template("buttons/button.html", &locals)?)
	}

	fn commit_label(&self) -> String {
		let (key, verb) = match self.object.is_new_record() {
			Some(true) => ("create", "Create"),
			Some(false) => ("update", "Update"),
			None => ("submit", "Submit"),
		};
		let model = humanize(&self.object.param_key());
		let text = self.env.translator.translate(
			key,
			&format!("{} %{{model}}", verb),
			&self.env.config.i18n_scope,
		);
		interpolate(&text, &[("model", &model)])
	}

	/// Base errors plus the errors of `fields`, as `<ul class="errors">`.
	///
	/// Renders nothing when there are no messages.
	pub fn semantic_errors(&self, fields: &[&str]) -> FormBuilderResult<String> {
		let resolver = self.resolver();
		let mut messages = Vec::new();
		for field in fields {
			let errors = self.object.errors_on(field);
			if errors.is_empty() {
				continue;
			}
			let label = resolver
				.label_text(self.object, field, &InputOptions::new())
				.unwrap_or_else(|| humanize(field));
			messages.push(format!("{} {}", label, to_sentence(&errors)));
		}
		messages.extend(self.object.errors_on("base"));

		if messages.is_empty() {
			return Ok(String::new());
		}
		Ok(self
			.env
			.templates
			.render_template("errors.html", &json!({ "errors": messages }))?)
	}
}

impl fmt::Debug for SemanticFormBuilder<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SemanticFormBuilder")
			.field("object_name", &self.object_name)
			.field("model", &self.object.model_name())
			.finish_non_exhaustive()
	}
}

fn is_content_column(column: &Column) -> bool {
	!column.primary
		&& column.name != "id"
		&& !column.name.ends_with("_id")
		&& !column.name.ends_with("_count")
		&& !NON_CONTENT_COLUMNS.contains(&column.name.as_str())
}
