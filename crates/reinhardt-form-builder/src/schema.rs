//! Model metadata the form builder reads
//!
//! The host ORM exposes its reflection through [`FormObject`]. Every
//! capability is optional: a method returning `None` means the object does
//! not offer that kind of metadata, and the resolver falls back accordingly.
//! All methods take `&self`; building a form never mutates the model.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Declared type of a database column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
	String,
	Text,
	Integer,
	Float,
	Decimal,
	Date,
	Datetime,
	Timestamp,
	Time,
	Boolean,
	Binary,
	/// Any other adapter-specific type, carried by name
	Other(String),
}

impl ColumnType {
	/// The type name as the schema reports it
	pub fn as_str(&self) -> &str {
		match self {
			ColumnType::String => "string",
			ColumnType::Text => "text",
			ColumnType::Integer => "integer",
			ColumnType::Float => "float",
			ColumnType::Decimal => "decimal",
			ColumnType::Date => "date",
			ColumnType::Datetime => "datetime",
			ColumnType::Timestamp => "timestamp",
			ColumnType::Time => "time",
			ColumnType::Boolean => "boolean",
			ColumnType::Binary => "binary",
			ColumnType::Other(name) => name,
		}
	}

	/// Whether the column holds a number
	pub fn is_numeric(&self) -> bool {
		matches!(
			self,
			ColumnType::Integer | ColumnType::Float | ColumnType::Decimal
		)
	}
}

impl fmt::Display for ColumnType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Column metadata for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub column_type: ColumnType,
	/// Maximum length for string columns
	pub limit: Option<u32>,
	pub primary: bool,
}

impl Column {
	pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
		Self {
			name: name.into(),
			column_type,
			limit: None,
			primary: false,
		}
	}

	pub fn with_limit(mut self, limit: u32) -> Self {
		self.limit = Some(limit);
		self
	}

	pub fn primary_key(mut self) -> Self {
		self.primary = true;
		self
	}
}

/// Relationship cardinality from the owning model's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
	/// belongs-to / has-one
	One,
	/// has-many / many-to-many
	Many,
}

/// Association reflection for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
	pub name: String,
	pub cardinality: Cardinality,
	/// Model name of the associated records, e.g. `Author`
	pub target: String,
}

impl Association {
	pub fn one(name: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			cardinality: Cardinality::One,
			target: target.into(),
		}
	}

	pub fn many(name: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			cardinality: Cardinality::Many,
			target: target.into(),
		}
	}

	pub fn is_many(&self) -> bool {
		self.cardinality == Cardinality::Many
	}
}

/// An attribute value that may be an uploaded file.
pub trait Attachment {
	/// Whether the value answers the named probe (`file`, `public_filename`, ...)
	fn responds_to(&self, probe: &str) -> bool;
}

/// A model instance as the form builder sees it.
pub trait FormObject {
	/// Model name, e.g. `Post` or `BlogPost`
	fn model_name(&self) -> &str;

	/// Key used in parameter names and DOM ids (`blog_post`)
	fn param_key(&self) -> String {
		crate::inflector::underscore(self.model_name())
	}

	/// Whether the record has not been saved yet, `None` for objects without persistence
	fn is_new_record(&self) -> Option<bool> {
		None
	}

	/// Primary key, used for `edit_post_42` style form ids
	fn id(&self) -> Option<Value> {
		None
	}

	/// Current value of an attribute
	fn value_of(&self, field: &str) -> Option<Value>;

	/// Column metadata, when the model is table-backed
	fn column_for(&self, _field: &str) -> Option<Column> {
		None
	}

	/// All columns, used to pick default inputs
	fn columns(&self) -> Vec<Column> {
		Vec::new()
	}

	/// Association reflection for an attribute
	fn association_for(&self, _field: &str) -> Option<Association> {
		None
	}

	/// All associations, used to pick default inputs
	fn associations(&self) -> Vec<Association> {
		Vec::new()
	}

	/// Fields carrying a presence validation, `None` when the model declares no validation metadata
	fn presence_validations(&self) -> Option<Vec<String>> {
		None
	}

	/// File-like view of an attribute value
	fn attachment(&self, _field: &str) -> Option<&dyn Attachment> {
		None
	}

	/// Validation messages for an attribute (`base` for object-level errors)
	fn errors_on(&self, _field: &str) -> Vec<String> {
		Vec::new()
	}

	/// Nested child objects of an association, for nested fieldsets
	fn children(&self, _association: &str) -> Vec<&dyn FormObject> {
		Vec::new()
	}
}

/// A row returned when building an option collection from records.
///
/// `Display` stands in for the `to_s` label accessor.
pub trait Record: fmt::Display {
	/// Read a named accessor (`id`, `name`, `to_label`, ...)
	fn accessor(&self, name: &str) -> Option<Value>;
}

/// Loads every record of a model, the ORM's `all()` query.
pub trait RecordSource {
	/// `None` when `model` does not name a known model
	fn all(&self, model: &str) -> Option<Vec<Box<dyn Record>>>;
}
