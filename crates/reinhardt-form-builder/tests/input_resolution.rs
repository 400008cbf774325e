//! Input-type resolution against model metadata

use reinhardt_form_builder::{
	Association, Attachment, Choice, Collection, Column, ColumnType, FormBuilderConfig, FormBuilderError,
	FormEnvironment, FormObject, InputKind, InputOptions, Record, RecordSource,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::fmt;

struct Author {
	id: i64,
	name: &'static str,
}

impl fmt::Display for Author {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Author #{}", self.id)
	}
}

impl Record for Author {
	fn accessor(&self, name: &str) -> Option<Value> {
		match name {
			"id" => Some(json!(self.id)),
			"name" => Some(json!(self.name)),
			_ => None,
		}
	}
}

struct Library;

impl RecordSource for Library {
	fn all(&self, model: &str) -> Option<Vec<Box<dyn Record>>> {
		match model {
			"Author" => Some(vec![
				Box::new(Author { id: 1, name: "Ada" }) as Box<dyn Record>,
				Box::new(Author { id: 2, name: "Grace" }),
			]),
			_ => None,
		}
	}
}

struct Upload {
	answers: &'static [&'static str],
}

impl Attachment for Upload {
	fn responds_to(&self, probe: &str) -> bool {
		self.answers.contains(&probe)
	}
}

static COVER: Upload = Upload {
	answers: &["public_filename"],
};
static SCAN: Upload = Upload { answers: &["path"] };
static PLAIN: Upload = Upload { answers: &[] };

struct Post {
	validations: Option<Vec<String>>,
}

impl FormObject for Post {
	fn model_name(&self) -> &str {
		"Post"
	}

	fn value_of(&self, field: &str) -> Option<Value> {
		match field {
			"author_ids" => Some(json!([2])),
			_ => None,
		}
	}

	fn column_for(&self, field: &str) -> Option<Column> {
		let column_type = match field {
			"title" | "password_digest" | "home_time_zone" => ColumnType::String,
			"views" | "category_id" | "editor_id" => ColumnType::Integer,
			"rating" => ColumnType::Float,
			"price" => ColumnType::Decimal,
			"published_at" => ColumnType::Timestamp,
			"published_on" => ColumnType::Date,
			"featured" => ColumnType::Boolean,
			"body" => ColumnType::Text,
			_ => return None,
		};
		Some(Column::new(field, column_type))
	}

	fn association_for(&self, field: &str) -> Option<Association> {
		match field {
			"authors" => Some(Association::many("authors", "Author")),
			"editor" => Some(Association::one("editor", "Author")),
			"publisher" => Some(Association::one("publisher", "Publisher")),
			_ => None,
		}
	}

	fn attachment(&self, field: &str) -> Option<&dyn Attachment> {
		match field {
			"cover" => Some(&COVER),
			"scan" => Some(&SCAN),
			"notes" | "password_hint" => Some(&PLAIN),
			_ => None,
		}
	}

	fn presence_validations(&self) -> Option<Vec<String>> {
		self.validations.clone()
	}
}

#[fixture]
fn env() -> FormEnvironment {
	FormEnvironment::default()
}

#[fixture]
fn post() -> Post {
	Post { validations: None }
}

#[rstest]
#[case("views", InputKind::Numeric)]
#[case("rating", InputKind::Numeric)]
#[case("price", InputKind::Numeric)]
#[case("password_digest", InputKind::Password)]
#[case("home_time_zone", InputKind::TimeZone)]
#[case("category_id", InputKind::Select)]
#[case("published_at", InputKind::Datetime)]
#[case("published_on", InputKind::Date)]
#[case("featured", InputKind::Boolean)]
#[case("body", InputKind::Text)]
#[case("title", InputKind::String)]
#[case("authors", InputKind::Select)]
#[case("new_password", InputKind::Password)]
#[case("nickname", InputKind::String)]
#[case("cover", InputKind::File)]
#[case("notes", InputKind::String)]
#[case("password_hint", InputKind::Password)]
#[case("scan", InputKind::String)]
fn test_kind_inference(
	env: FormEnvironment,
	post: Post,
	#[case] field: &str,
	#[case] expected: InputKind,
) {
	let library = Library;
	let builder = env.builder(&post).with_records(&library);
	let options = InputOptions::new().collection(Collection::values(["a"]));
	let descriptor = builder.describe(field, options).unwrap();
	assert_eq!(descriptor.kind, expected);
}

#[rstest]
#[case("scan", InputKind::File)]
#[case("cover", InputKind::String)]
fn test_configured_file_methods(#[case] field: &str, #[case] expected: InputKind) {
	let env = FormEnvironment::new(FormBuilderConfig::default().with_file_methods(["path"]));
	let post = Post { validations: None };
	let descriptor = env.builder(&post).describe(field, InputOptions::new()).unwrap();
	assert_eq!(descriptor.kind, expected);
}

#[rstest]
fn test_explicit_kind_wins(env: FormEnvironment, post: Post) {
	let descriptor = env
		.builder(&post)
		.describe("views", InputOptions::new().as_kind(InputKind::Hidden))
		.unwrap();
	assert_eq!(descriptor.kind, InputKind::Hidden);
}

#[rstest]
fn test_to_many_association_submits_ids(env: FormEnvironment, post: Post) {
	let library = Library;
	let descriptor = env
		.builder(&post)
		.with_records(&library)
		.describe("authors", InputOptions::new())
		.unwrap();

	assert_eq!(descriptor.method, "author_ids");
	assert_eq!(descriptor.input_name, "post[author_ids][]");
	assert!(descriptor.multiple);
	assert!(!descriptor.include_blank);
	assert_eq!(
		descriptor.collection,
		Some(vec![Choice::new("Ada", 1), Choice::new("Grace", 2)])
	);
	assert!(descriptor.is_selected(&Choice::new("Grace", 2)));
}

#[rstest]
fn test_to_one_association_submits_id(env: FormEnvironment, post: Post) {
	let library = Library;
	let descriptor = env
		.builder(&post)
		.with_records(&library)
		.describe("editor", InputOptions::new())
		.unwrap();

	assert_eq!(descriptor.input_name, "post[editor_id]");
	assert!(descriptor.include_blank);
}

#[rstest]
fn test_label_method_override(env: FormEnvironment, post: Post) {
	let library = Library;
	let descriptor = env
		.builder(&post)
		.with_records(&library)
		.describe("editor", InputOptions::new().label_method("to_s"))
		.unwrap();

	let labels: Vec<String> = descriptor
		.collection
		.unwrap()
		.into_iter()
		.map(|choice| choice.label)
		.collect();
	assert_eq!(labels, vec!["Author #1", "Author #2"]);
}

#[rstest]
fn test_association_without_records_is_empty(env: FormEnvironment, post: Post) {
	let library = Library;
	let descriptor = env
		.builder(&post)
		.with_records(&library)
		.describe("publisher", InputOptions::new())
		.unwrap();
	assert_eq!(descriptor.collection, Some(Vec::new()));
}

#[rstest]
fn test_legacy_foreign_key_with_unknown_model(env: FormEnvironment, post: Post) {
	let library = Library;
	let result = env
		.builder(&post)
		.with_records(&library)
		.describe("category_id", InputOptions::new());

	match result {
		Err(FormBuilderError::ModelNotFound(model)) => assert_eq!(model, "Category"),
		other => panic!("expected ModelNotFound, got {:?}", other),
	}
}

#[rstest]
// explicit option beats validations and the default
#[case(Some(false), Some(vec!["title"]), true, false)]
#[case(Some(true), Some(vec![]), false, true)]
// validations beat the default
#[case(None, Some(vec!["title"]), false, true)]
#[case(None, Some(vec!["body"]), true, false)]
// default applies without validation metadata
#[case(None, None, true, true)]
#[case(None, None, false, false)]
fn test_required_precedence(
	#[case] explicit: Option<bool>,
	#[case] validations: Option<Vec<&str>>,
	#[case] default_required: bool,
	#[case] expected: bool,
) {
	let env = FormEnvironment::new(FormBuilderConfig::default().with_default_required(default_required));
	let post = Post {
		validations: validations.map(|names| names.into_iter().map(String::from).collect()),
	};
	let mut options = InputOptions::new();
	if let Some(required) = explicit {
		options = options.required(required);
	}

	let descriptor = env.builder(&post).describe("title", options).unwrap();
	assert_eq!(descriptor.required, expected);
}

#[rstest]
fn test_presence_validation_matches_stripped_foreign_key(env: FormEnvironment) {
	let post = Post {
		validations: Some(vec!["editor".to_string()]),
	};
	let descriptor = env
		.builder(&post)
		.describe(
			"editor_id",
			InputOptions::new().collection(Collection::pairs([("Ada", 1)])),
		)
		.unwrap();
	assert_eq!(descriptor.kind, InputKind::Select);
	assert!(descriptor.required);
}

#[rstest]
fn test_boolean_radio_synthesizes_yes_no(env: FormEnvironment, post: Post) {
	let descriptor = env
		.builder(&post)
		.describe("featured", InputOptions::new().as_kind(InputKind::Radio))
		.unwrap();

	assert_eq!(
		descriptor.collection,
		Some(vec![Choice::new("Yes", true), Choice::new("No", false)])
	);
}

#[rstest]
fn test_boolean_labels_override(env: FormEnvironment, post: Post) {
	let descriptor = env
		.builder(&post)
		.describe(
			"featured",
			InputOptions::new()
				.as_kind(InputKind::Radio)
				.true_label("Shown")
				.false_label("Hidden"),
		)
		.unwrap();

	assert_eq!(
		descriptor.collection,
		Some(vec![Choice::new("Shown", true), Choice::new("Hidden", false)])
	);
}

#[rstest]
fn test_explicit_pairs_pass_through(env: FormEnvironment, post: Post) {
	let pairs = vec![("Draft", json!("d")), ("Live", json!("l")), ("Draft", json!("d2"))];
	let descriptor = env
		.builder(&post)
		.describe(
			"status",
			InputOptions::new()
				.as_kind(InputKind::Select)
				.true_label("ignored")
				.collection(Collection::pairs(pairs.clone())),
		)
		.unwrap();

	let expected: Vec<Choice> = pairs
		.into_iter()
		.map(|(label, value)| Choice::new(label, value))
		.collect();
	assert_eq!(descriptor.collection, Some(expected));
}

#[rstest]
fn test_time_zone_priority(env: FormEnvironment, post: Post) {
	let descriptor = env
		.builder(&post)
		.describe(
			"home_time_zone",
			InputOptions::new().priority_zones(["Europe/Paris"]),
		)
		.unwrap();

	let choices = descriptor.collection.unwrap();
	assert_eq!(choices[0], Choice::new("Europe/Paris", "Europe/Paris"));
	assert_eq!(
		choices
			.iter()
			.filter(|choice| choice.label == "Europe/Paris")
			.count(),
		1
	);
	assert!(choices.iter().any(|choice| choice.label == "America/New_York"));
}
