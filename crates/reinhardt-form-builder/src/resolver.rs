//! Input-type resolution
//!
//! Given a model object and a field name, the resolver decides which widget
//! to render and assembles the [`FieldDescriptor`] describing it.
//!
//! ## Kind inference
//!
//! First match wins:
//!
//! 1. an explicit kind in the options
//! 2. column metadata: `time_zone` strings, `_id` integers (select),
//!    timestamps (datetime), numbers (numeric), `password` strings, and
//!    otherwise the column type itself
//! 3. no column: associations (select), file attachments (file), `password`
//!    names, and finally a plain string input
//!
//! ## Required
//!
//! Explicit option, then presence validations (matched against the field
//! name without a trailing `_id`), then the configured default.

use crate::collection::{Choice, Collection, boolean_collection, time_zone_collection};
use crate::config::FormBuilderConfig;
use crate::descriptor::FieldDescriptor;
use crate::error::{FormBuilderError, FormBuilderResult};
use crate::i18n::Translator;
use crate::inflector::{model_name_for_foreign_key, pluralize, singularize};
use crate::kind::InputKind;
use crate::options::{InputOptions, LabelOption};
use crate::schema::{Association, Cardinality, ColumnType, FormObject, RecordSource};
use regex::Regex;
use std::sync::LazyLock;

static UNSAFE_ID_CHARS: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\]\[|[^-a-zA-Z0-9:.]").expect("UNSAFE_ID_CHARS: invalid regex pattern")
});

/// DOM-safe form of a parameter object name (`post[comments_attributes][0]` → `post_comments_attributes_0`).
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::resolver::sanitized_object_name;
///
/// assert_eq!(sanitized_object_name("post"), "post");
/// assert_eq!(
///     sanitized_object_name("post[comments_attributes][0]"),
///     "post_comments_attributes_0"
/// );
/// ```
pub fn sanitized_object_name(object_name: &str) -> String {
	let replaced = UNSAFE_ID_CHARS.replace_all(object_name, "_");
	replaced.trim_end_matches('_').to_string()
}

/// Name of the attribute an association input submits.
///
/// To-one associations submit `{field}_id`; to-many associations submit the
/// pluralized `{singular}_id`.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::resolver::association_input_name;
/// use reinhardt_form_builder::Association;
///
/// let author = Association::one("author", "Author");
/// let authors = Association::many("authors", "Author");
///
/// assert_eq!(association_input_name("author", Some(&author)), "author_id");
/// assert_eq!(association_input_name("authors", Some(&authors)), "author_ids");
/// assert_eq!(association_input_name("category_id", None), "category_id");
/// ```
pub fn association_input_name(field: &str, association: Option<&Association>) -> String {
	match association.map(|a| a.cardinality) {
		Some(Cardinality::One) => format!("{}_id", field),
		Some(Cardinality::Many) => pluralize(&format!("{}_id", singularize(field))),
		None => field.to_string(),
	}
}

/// Builds [`FieldDescriptor`]s from model metadata and per-call options.
pub struct InputTypeResolver<'a> {
	config: &'a FormBuilderConfig,
	translator: &'a dyn Translator,
	records: Option<&'a dyn RecordSource>,
}

impl<'a> InputTypeResolver<'a> {
	pub fn new(config: &'a FormBuilderConfig, translator: &'a dyn Translator) -> Self {
		Self {
			config,
			translator,
			records: None,
		}
	}

	/// Use `records` to load association collections
	pub fn with_records(mut self, records: &'a dyn RecordSource) -> Self {
		self.records = Some(records);
		self
	}

	pub fn config(&self) -> &FormBuilderConfig {
		self.config
	}

	/// Infer the widget kind for `field`
	pub fn default_input_type(
		&self,
		object: &dyn FormObject,
		field: &str,
		options: &InputOptions,
	) -> InputKind {
		let (kind, reason) = self.infer_kind(object, field, options);
		tracing::debug!(field = %field, kind = %kind, reason = reason, "resolved input kind");
		kind
	}

	fn infer_kind(
		&self,
		object: &dyn FormObject,
		field: &str,
		options: &InputOptions,
	) -> (InputKind, &'static str) {
		if let Some(kind) = &options.kind {
			return (kind.clone(), "explicit");
		}

		if let Some(column) = object.column_for(field) {
			let column_type = &column.column_type;
			if *column_type == ColumnType::String && field.contains("time_zone") {
				return (InputKind::TimeZone, "time zone column");
			}
			if *column_type == ColumnType::Integer && field.ends_with("_id") {
				return (InputKind::Select, "foreign key column");
			}
			if *column_type == ColumnType::Timestamp {
				return (InputKind::Datetime, "timestamp column");
			}
			if column_type.is_numeric() {
				return (InputKind::Numeric, "numeric column");
			}
			if *column_type == ColumnType::String && field.contains("password") {
				return (InputKind::Password, "password column");
			}
			return (InputKind::from_column_type(column_type), "column type");
		}

		if object.association_for(field).is_some() {
			return (InputKind::Select, "association");
		}
		if let Some(attachment) = object.attachment(field) {
			if self
				.config
				.file_methods
				.iter()
				.any(|probe| attachment.responds_to(probe))
			{
				return (InputKind::File, "file attachment");
			}
		}
		if field.contains("password") {
			return (InputKind::Password, "password name");
		}
		(InputKind::String, "fallback")
	}

	/// Decide whether `field` is required
	pub fn is_required(
		&self,
		object: &dyn FormObject,
		field: &str,
		options: &InputOptions,
	) -> bool {
		if let Some(required) = options.required {
			return required;
		}
		match object.presence_validations() {
			Some(validated) => {
				let attribute = field.strip_suffix("_id").unwrap_or(field);
				validated.iter().any(|name| name == attribute)
			}
			None => self.config.all_fields_required_by_default,
		}
	}

	/// Option collection for a collection kind.
	///
	/// An explicit collection always wins over the yes/no labels.
	pub fn resolve_collection(
		&self,
		object: &dyn FormObject,
		field: &str,
		kind: &InputKind,
		options: &mut InputOptions,
	) -> FormBuilderResult<Vec<Choice>> {
		let label_methods = match &options.label_method {
			Some(method) => vec![method.clone()],
			None => self.config.collection_label_methods.clone(),
		};
		let value_method = options
			.value_method
			.clone()
			.unwrap_or_else(|| self.config.collection_value_method.clone());

		if let Some(collection) = options.collection.take() {
			return Ok(collection.into_choices(&label_methods, &value_method));
		}

		if *kind == InputKind::TimeZone {
			return Ok(time_zone_collection(&options.priority_zones));
		}

		if let Some(association) = object.association_for(field) {
			let records = self.records.and_then(|source| source.all(&association.target));
			return Ok(match records {
				Some(records) => Collection::Records(records)
					.into_choices(&label_methods, &value_method),
				None => {
					tracing::warn!(
						field = %field,
						target = %association.target,
						"no records available for association, rendering an empty collection"
					);
					Vec::new()
				}
			});
		}

		if field.ends_with("_id") {
			// Legacy inference: the model is named after the foreign key
			let model = model_name_for_foreign_key(field);
			let records = self
				.records
				.and_then(|source| source.all(&model))
				.ok_or(FormBuilderError::ModelNotFound(model))?;
			return Ok(Collection::Records(records)
				.into_choices(&label_methods, &value_method));
		}

		let scope = self.config.i18n_scope.as_str();
		let true_label = options
			.true_label
			.clone()
			.unwrap_or_else(|| self.translator.translate("yes", "Yes", scope));
		let false_label = options
			.false_label
			.clone()
			.unwrap_or_else(|| self.translator.translate("no", "No", scope));
		Ok(boolean_collection(true_label, false_label))
	}

	/// Label text, `None` when suppressed
	pub fn label_text(
		&self,
		object: &dyn FormObject,
		field: &str,
		options: &InputOptions,
	) -> Option<String> {
		match &options.label {
			Some(LabelOption::Text(text)) => return Some(text.clone()),
			Some(LabelOption::Hidden) => return None,
			None => {}
		}
		let fallback = self.config.label_str_method.apply(field);
		if self.config.i18n_lookups_by_default {
			let key = format!("labels.{}.{}", object.param_key(), field);
			Some(
				self.translator
					.translate(&key, &fallback, &self.config.i18n_scope),
			)
		} else {
			Some(fallback)
		}
	}

	/// Hint text, if any
	pub fn hint_text(
		&self,
		object: &dyn FormObject,
		field: &str,
		options: &InputOptions,
	) -> Option<String> {
		if let Some(hint) = &options.hint {
			return Some(hint.clone());
		}
		if !self.config.i18n_lookups_by_default {
			return None;
		}
		let key = format!("hints.{}.{}", object.param_key(), field);
		let hint = self.translator.translate(&key, "", &self.config.i18n_scope);
		(!hint.is_empty()).then_some(hint)
	}

	fn errors_for(object: &dyn FormObject, field: &str, method: &str) -> Vec<String> {
		let mut names = vec![field];
		if method != field {
			names.push(method);
		}
		if let Some(stripped) = field.strip_suffix("_id") {
			names.push(stripped);
		}

		let mut errors: Vec<String> = Vec::new();
		for name in names {
			for message in object.errors_on(name) {
				if !errors.contains(&message) {
					errors.push(message);
				}
			}
		}
		errors
	}

	/// Build the full descriptor for `field` rendered under `object_name`
	pub fn resolve(
		&self,
		object: &dyn FormObject,
		object_name: &str,
		field: &str,
		mut options: InputOptions,
	) -> FormBuilderResult<FieldDescriptor> {
		let kind = self.default_input_type(object, field, &options);
		let required = self.is_required(object, field, &options);
		let association = object.association_for(field);

		let (method, collection) = if kind.uses_collection() {
			let choices = self.resolve_collection(object, field, &kind, &mut options)?;
			(
				association_input_name(field, association.as_ref()),
				Some(choices),
			)
		} else {
			(field.to_string(), None)
		};

		let multiple = kind == InputKind::CheckBoxes
			|| options.multiple.unwrap_or_else(|| {
				kind == InputKind::Select && association.as_ref().is_some_and(Association::is_many)
			});
		let include_blank = matches!(kind, InputKind::Select | InputKind::TimeZone)
			&& !multiple
			&& options
				.include_blank
				.unwrap_or(self.config.include_blank_for_select_by_default);

		let mut input_html = std::mem::take(&mut options.input_html);
		if kind.family() == Some("stringish") {
			if let Some(limit) = object.column_for(field).and_then(|c| c.limit) {
				input_html
					.entry("maxlength".to_string())
					.or_insert_with(|| limit.to_string());
			}
		}
		if required && !input_html.contains_key("required") {
			input_html.insert("aria-required".to_string(), "true".to_string());
		}

		let input_name = if multiple {
			format!("{}[{}][]", object_name, method)
		} else {
			format!("{}[{}]", object_name, method)
		};
		let dom_id = format!("{}_{}", sanitized_object_name(object_name), method);
		let value = object.value_of(&method).or_else(|| object.value_of(field));

		Ok(FieldDescriptor {
			name: field.to_string(),
			label: self.label_text(object, field, &options),
			hint: self.hint_text(object, field, &options),
			errors: Self::errors_for(object, field, &method),
			method,
			input_name,
			dom_id,
			kind,
			required,
			value,
			collection,
			include_blank,
			prompt: options.prompt.take(),
			multiple,
			input_html,
			label_html: std::mem::take(&mut options.label_html),
			wrapper_html: std::mem::take(&mut options.wrapper_html),
		})
	}
}
