//! The resolved description of one input

use crate::collection::{Choice, display_value};
use crate::kind::InputKind;
use crate::options::HtmlAttributes;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use serde_json::Value;

/// Everything needed to render one input, built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
	/// Attribute name as requested (`authors`)
	pub name: String,
	/// Attribute the input submits (`author_ids`)
	pub method: String,
	/// HTML `name` attribute (`post[author_ids][]`)
	pub input_name: String,
	/// DOM id of the control (`post_author_ids`)
	pub dom_id: String,
	pub kind: InputKind,
	pub required: bool,
	/// `None` when the label is suppressed
	pub label: Option<String>,
	pub hint: Option<String>,
	pub errors: Vec<String>,
	pub value: Option<Value>,
	/// Options for collection kinds, `None` for everything else
	pub collection: Option<Vec<Choice>>,
	pub include_blank: bool,
	pub prompt: Option<String>,
	pub multiple: bool,
	pub input_html: HtmlAttributes,
	pub label_html: HtmlAttributes,
	pub wrapper_html: HtmlAttributes,
}

impl FieldDescriptor {
	/// Whether the choice matches the current value (or one of several values)
	pub fn is_selected(&self, choice: &Choice) -> bool {
		let wanted = display_value(&choice.value);
		match &self.value {
			None | Some(Value::Null) => false,
			Some(Value::Array(values)) => values.iter().any(|v| display_value(v) == wanted),
			Some(value) => display_value(value) == wanted,
		}
	}

	/// Whether a boolean input should render checked
	pub fn is_checked(&self) -> bool {
		match &self.value {
			Some(Value::Bool(b)) => *b,
			Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
			Some(Value::String(s)) => matches!(s.as_str(), "1" | "true" | "t" | "on" | "yes"),
			_ => false,
		}
	}

	/// Current value as it should appear in the control's `value` attribute.
	///
	/// Temporal kinds are normalized to the formats HTML date and time
	/// controls expect; anything unparseable is passed through as text.
	pub fn value_text(&self) -> Option<String> {
		let value = self.value.as_ref()?;
		if value.is_null() {
			return None;
		}
		let text = display_value(value);
		let formatted = match self.kind {
			InputKind::Date => parse_date(&text).map(|d| d.format("%Y-%m-%d").to_string()),
			InputKind::Datetime => {
				parse_datetime(&text).map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
			}
			InputKind::Time => parse_time(&text).map(|t| t.format("%H:%M").to_string()),
			_ => None,
		};
		Some(formatted.unwrap_or(text))
	}
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
	if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
		return Some(dt.naive_local());
	}
	["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
		.iter()
		.find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

fn parse_date(text: &str) -> Option<NaiveDate> {
	NaiveDate::parse_from_str(text, "%Y-%m-%d")
		.ok()
		.or_else(|| parse_datetime(text).map(|dt| dt.date()))
}

fn parse_time(text: &str) -> Option<NaiveTime> {
	["%H:%M:%S%.f", "%H:%M"]
		.iter()
		.find_map(|format| NaiveTime::parse_from_str(text, format).ok())
		.or_else(|| parse_datetime(text).map(|dt| dt.time()))
}
