//! Input kinds and their template names

use crate::error::FormBuilderError;
use crate::schema::ColumnType;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The widget used to render a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputKind {
	String,
	Text,
	Password,
	Email,
	Url,
	Phone,
	Search,
	Numeric,
	Select,
	Radio,
	CheckBoxes,
	Boolean,
	Date,
	Datetime,
	Time,
	TimeZone,
	Hidden,
	File,
	/// An application-defined kind rendered by its own template
	Custom(String),
}

impl InputKind {
	pub fn as_str(&self) -> &str {
		match self {
			InputKind::String => "string",
			InputKind::Text => "text",
			InputKind::Password => "password",
			InputKind::Email => "email",
			InputKind::Url => "url",
			InputKind::Phone => "phone",
			InputKind::Search => "search",
			InputKind::Numeric => "numeric",
			InputKind::Select => "select",
			InputKind::Radio => "radio",
			InputKind::CheckBoxes => "check_boxes",
			InputKind::Boolean => "boolean",
			InputKind::Date => "date",
			InputKind::Datetime => "datetime",
			InputKind::Time => "time",
			InputKind::TimeZone => "time_zone",
			InputKind::Hidden => "hidden",
			InputKind::File => "file",
			InputKind::Custom(name) => name,
		}
	}

	/// Kind named after a column type, used when no heuristic applies
	pub fn from_column_type(column_type: &ColumnType) -> Self {
		match column_type {
			ColumnType::String => InputKind::String,
			ColumnType::Text => InputKind::Text,
			ColumnType::Boolean => InputKind::Boolean,
			ColumnType::Date => InputKind::Date,
			ColumnType::Datetime | ColumnType::Timestamp => InputKind::Datetime,
			ColumnType::Time => InputKind::Time,
			ColumnType::Integer | ColumnType::Float | ColumnType::Decimal => InputKind::Numeric,
			other => InputKind::Custom(other.as_str().to_string()),
		}
	}

	/// Kinds that render an option collection
	pub fn uses_collection(&self) -> bool {
		matches!(
			self,
			InputKind::Select | InputKind::Radio | InputKind::CheckBoxes | InputKind::TimeZone
		)
	}

	/// Shared template family, if the kind has no template of its own
	pub fn family(&self) -> Option<&'static str> {
		match self {
			InputKind::String
			| InputKind::Password
			| InputKind::Email
			| InputKind::Url
			| InputKind::Phone
			| InputKind::Search
			| InputKind::Numeric
			| InputKind::Date
			| InputKind::Datetime
			| InputKind::Time => Some("stringish"),
			InputKind::TimeZone => Some("select"),
			_ => None,
		}
	}

	/// `type` attribute for kinds rendered as a plain `<input>`
	pub fn html_type(&self) -> &'static str {
		match self {
			InputKind::Password => "password",
			InputKind::Email => "email",
			InputKind::Url => "url",
			InputKind::Phone => "tel",
			InputKind::Search => "search",
			InputKind::Numeric => "number",
			InputKind::Date => "date",
			InputKind::Datetime => "datetime-local",
			InputKind::Time => "time",
			InputKind::Hidden => "hidden",
			InputKind::File => "file",
			InputKind::Boolean => "checkbox",
			_ => "text",
		}
	}

	/// Ordered template candidates for this kind on a model with `param_key`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_builder::InputKind;
	///
	/// assert_eq!(
	///     InputKind::Email.template_candidates("post"),
	///     vec![
	///         "inputs/post/email_input.html",
	///         "inputs/email_input.html",
	///         "inputs/stringish_input.html",
	///     ]
	/// );
	/// ```
	pub fn template_candidates(&self, param_key: &str) -> Vec<String> {
		let mut candidates = vec![
			format!("inputs/{}/{}_input.html", param_key, self.as_str()),
			format!("inputs/{}_input.html", self.as_str()),
		];
		if let Some(family) = self.family() {
			let name = format!("inputs/{}_input.html", family);
			if !candidates.contains(&name) {
				candidates.push(name);
			}
		}
		candidates
	}
}

impl fmt::Display for InputKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for InputKind {
	type Err = FormBuilderError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let kind = match s {
			"string" => InputKind::String,
			"text" => InputKind::Text,
			"password" => InputKind::Password,
			"email" => InputKind::Email,
			"url" => InputKind::Url,
			"phone" => InputKind::Phone,
			"search" => InputKind::Search,
			"numeric" | "number" => InputKind::Numeric,
			"select" => InputKind::Select,
			"radio" => InputKind::Radio,
			"check_boxes" => InputKind::CheckBoxes,
			"boolean" => InputKind::Boolean,
			"date" => InputKind::Date,
			"datetime" => InputKind::Datetime,
			"time" => InputKind::Time,
			"time_zone" => InputKind::TimeZone,
			"hidden" => InputKind::Hidden,
			"file" => InputKind::File,
			"" => return Err(FormBuilderError::UnknownInputKind(s.to_string())),
			other if other
				.chars()
				.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') =>
			{
				InputKind::Custom(other.to_string())
			}
			other => return Err(FormBuilderError::UnknownInputKind(other.to_string())),
		};
		Ok(kind)
	}
}

impl Serialize for InputKind {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}
