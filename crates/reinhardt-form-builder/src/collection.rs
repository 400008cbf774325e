//! Option collections for select, radio and check box inputs
//!
//! Whatever the source (explicit pairs, a map, bare values, or records from
//! the ORM) the result is an ordered `Vec<Choice>` in source order. Nothing
//! is sorted or deduplicated.

use crate::schema::Record;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// One option: the text shown and the value submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
	pub label: String,
	pub value: Value,
}

impl Choice {
	pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
		}
	}

	/// Choice for a bare collection entry.
	///
	/// Strings and numbers label themselves; a two-element array is a
	/// `[label, value]` pair.
	pub fn from_value(entry: &Value) -> Self {
		match entry {
			Value::Array(items) if items.len() >= 2 => Choice {
				label: display_value(&items[0]),
				value: items[1].clone(),
			},
			Value::Array(items) if items.len() == 1 => Choice {
				label: display_value(&items[0]),
				value: items[0].clone(),
			},
			other => Choice {
				label: display_value(other),
				value: other.clone(),
			},
		}
	}
}

/// Text form of a JSON value as it appears in markup.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::collection::display_value;
/// use serde_json::json;
///
/// assert_eq!(display_value(&json!("draft")), "draft");
/// assert_eq!(display_value(&json!(42)), "42");
/// assert_eq!(display_value(&json!(true)), "true");
/// assert_eq!(display_value(&json!(null)), "");
/// ```
pub fn display_value(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		other => other.to_string(),
	}
}

/// Explicit collection handed to an input.
pub enum Collection {
	/// `(label, value)` pairs, used as given
	Pairs(Vec<(String, Value)>),
	/// Label → value map, converted to pairs in insertion order
	Map(IndexMap<String, Value>),
	/// Bare values (strings, numbers, `[label, value]` arrays)
	Values(Vec<Value>),
	/// Records labelled through accessor lookup
	Records(Vec<Box<dyn Record>>),
}

impl Collection {
	/// Build a collection of `(label, value)` pairs
	pub fn pairs<L, V, I>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (L, V)>,
		L: Into<String>,
		V: Into<Value>,
	{
		Collection::Pairs(
			pairs
				.into_iter()
				.map(|(label, value)| (label.into(), value.into()))
				.collect(),
		)
	}

	/// Build a collection of bare values
	pub fn values<V, I>(values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		Collection::Values(values.into_iter().map(Into::into).collect())
	}

	/// Convert to choices
	///
	/// `label_methods` is the accessor priority list for records; the first
	/// entry is usually an explicit `label_method` when the caller gave one.
	pub fn into_choices(self, label_methods: &[String], value_method: &str) -> Vec<Choice> {
		match self {
			Collection::Pairs(pairs) => pairs
				.into_iter()
				.map(|(label, value)| Choice { label, value })
				.collect(),
			Collection::Map(map) => map
				.into_iter()
				.map(|(label, value)| Choice { label, value })
				.collect(),
			Collection::Values(values) => values.iter().map(Choice::from_value).collect(),
			Collection::Records(records) => records
				.iter()
				.map(|record| record_choice(record.as_ref(), label_methods, value_method))
				.collect(),
		}
	}
}

impl fmt::Debug for Collection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Collection::Pairs(pairs) => f.debug_tuple("Pairs").field(pairs).finish(),
			Collection::Map(map) => f.debug_tuple("Map").field(map).finish(),
			Collection::Values(values) => f.debug_tuple("Values").field(values).finish(),
			Collection::Records(records) => f
				.debug_tuple("Records")
				.field(&records.len())
				.finish(),
		}
	}
}

impl<L: Into<String>, V: Into<Value>> FromIterator<(L, V)> for Collection {
	fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
		Collection::pairs(iter)
	}
}

/// Label for a record: the first accessor in `label_methods` it answers.
///
/// `to_s` is the record's `Display` form and always answers, so it also
/// serves as the fallback when nothing in the list matches.
pub fn detect_label(record: &dyn Record, label_methods: &[String]) -> String {
	for method in label_methods {
		if method == "to_s" {
			return record.to_string();
		}
		if let Some(value) = record.accessor(method) {
			return display_value(&value);
		}
	}
	record.to_string()
}

fn record_choice(record: &dyn Record, label_methods: &[String], value_method: &str) -> Choice {
	Choice {
		label: detect_label(record, label_methods),
		value: record.accessor(value_method).unwrap_or(Value::Null),
	}
}

/// The synthesized yes/no pair for boolean fields.
pub fn boolean_collection(true_label: impl Into<String>, false_label: impl Into<String>) -> Vec<Choice> {
	vec![
		Choice::new(true_label, true),
		Choice::new(false_label, false),
	]
}

/// Every IANA time zone, with `priority` zones listed first.
pub fn time_zone_collection(priority: &[String]) -> Vec<Choice> {
	let mut choices: Vec<Choice> = priority
		.iter()
		.map(|zone| Choice::new(zone.clone(), zone.clone()))
		.collect();
	choices.extend(
		chrono_tz::TZ_VARIANTS
			.iter()
			.map(|tz| tz.name())
			.filter(|name| !priority.iter().any(|p| p == name))
			.map(|name| Choice::new(name, name)),
	);
	choices
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	struct Author {
		id: i64,
		name: Option<&'static str>,
		login: &'static str,
	}

	impl fmt::Display for Author {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			write!(f, "#<Author {}>", self.id)
		}
	}

	impl Record for Author {
		fn accessor(&self, name: &str) -> Option<Value> {
			match name {
				"id" => Some(json!(self.id)),
				"name" => self.name.map(|n| json!(n)),
				"login" => Some(json!(self.login)),
				_ => None,
			}
		}
	}

	fn label_methods() -> Vec<String> {
		crate::FormBuilderConfig::default().collection_label_methods
	}

	#[rstest]
	fn test_pairs_pass_through_unchanged() {
		let pairs = vec![
			("Draft".to_string(), json!("draft")),
			("Published".to_string(), json!("published")),
		];
		let choices = Collection::Pairs(pairs.clone()).into_choices(&label_methods(), "id");

		let back: Vec<(String, Value)> = choices.into_iter().map(|c| (c.label, c.value)).collect();
		assert_eq!(back, pairs);
	}

	#[rstest]
	fn test_map_preserves_insertion_order() {
		let mut map = IndexMap::new();
		map.insert("Zebra".to_string(), json!(3));
		map.insert("Apple".to_string(), json!(1));
		map.insert("Mango".to_string(), json!(2));

		let choices = Collection::Map(map).into_choices(&label_methods(), "id");
		let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
		assert_eq!(labels, vec!["Zebra", "Apple", "Mango"]);
	}

	#[rstest]
	#[case(json!("red"), "red", json!("red"))]
	#[case(json!(7), "7", json!(7))]
	#[case(json!(["Large", "l"]), "Large", json!("l"))]
	fn test_values_pass_through(#[case] entry: Value, #[case] label: &str, #[case] value: Value) {
		let choices = Collection::Values(vec![entry]).into_choices(&label_methods(), "id");
		assert_eq!(choices, vec![Choice::new(label, value)]);
	}

	#[rstest]
	fn test_records_use_first_answering_label_method() {
		let records: Vec<Box<dyn Record>> = vec![
			Box::new(Author { id: 1, name: Some("Ada"), login: "ada" }),
			Box::new(Author { id: 2, name: None, login: "grace" }),
		];

		let choices = Collection::Records(records).into_choices(&label_methods(), "id");
		assert_eq!(
			choices,
			vec![Choice::new("Ada", 1), Choice::new("grace", 2)]
		);
	}

	#[rstest]
	fn test_records_fall_back_to_display() {
		let author = Author { id: 5, name: None, login: "x" };
		let methods = vec!["full_name".to_string()];
		assert_eq!(detect_label(&author, &methods), "#<Author 5>");
	}

	#[rstest]
	fn test_missing_value_accessor_is_null() {
		let records: Vec<Box<dyn Record>> =
			vec![Box::new(Author { id: 1, name: Some("Ada"), login: "ada" })];
		let choices = Collection::Records(records).into_choices(&label_methods(), "uuid");
		assert_eq!(choices[0].value, Value::Null);
	}

	#[rstest]
	fn test_boolean_collection() {
		assert_eq!(
			boolean_collection("Yes", "No"),
			vec![Choice::new("Yes", true), Choice::new("No", false)]
		);
	}

	#[rstest]
	fn test_time_zone_priority_first_without_duplicates() {
		let priority = vec!["Europe/Berlin".to_string()];
		let choices = time_zone_collection(&priority);

		assert_eq!(choices[0].label, "Europe/Berlin");
		let berlin = choices.iter().filter(|c| c.label == "Europe/Berlin").count();
		assert_eq!(berlin, 1);
		assert!(choices.iter().any(|c| c.label == "Asia/Tokyo"));
	}

	#[rstest]
	fn test_collect_into_pairs() {
		let collection: Collection = vec![("One", 1), ("Two", 2)].into_iter().collect();
		assert!(matches!(collection, Collection::Pairs(ref p) if p.len() == 2));
	}
}
