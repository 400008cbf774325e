//! End-to-end rendering through the template dispatcher

use reinhardt_form_builder::{
	ButtonKind, ButtonOptions, ButtonSpec, ButtonsContent, CatalogTranslator, Collection,
	FormBuilderConfig, FormEnvironment, FormObject, InputKind, InputOptions, InputsContent,
	InputsOptions,
};
use reinhardt_form_templates::{
	BuiltinTemplates, TemplateDispatcher, TemplateError, TemplateResult, TemplateSource,
};
use rstest::rstest;
use serde_json::{Value, json};
use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Task {
	items: Vec<Item>,
}

struct Item {
	name: &'static str,
}

impl FormObject for Item {
	fn model_name(&self) -> &str {
		"Item"
	}

	fn value_of(&self, field: &str) -> Option<Value> {
		(field == "name").then(|| json!(self.name))
	}
}

impl FormObject for Task {
	fn model_name(&self) -> &str {
		"Task"
	}

	fn is_new_record(&self) -> Option<bool> {
		Some(true)
	}

	fn value_of(&self, field: &str) -> Option<Value> {
		match field {
			"title" => Some(json!("Write docs")),
			"priority" => Some(json!("high")),
			_ => None,
		}
	}

	fn children(&self, association: &str) -> Vec<&dyn FormObject> {
		match association {
			"items" => self.items.iter().map(|i| i as &dyn FormObject).collect(),
			_ => Vec::new(),
		}
	}
}

fn task() -> Task {
	Task {
		items: vec![Item { name: "one" }, Item { name: "two" }, Item { name: "three" }],
	}
}

/// Counts existence checks made against the built-in templates
struct CountingSource {
	checks: AtomicUsize,
}

impl TemplateSource for CountingSource {
	fn exists(&self, name: &str) -> bool {
		self.checks.fetch_add(1, Ordering::SeqCst);
		BuiltinTemplates.exists(name)
	}

	fn load(&self, name: &str) -> TemplateResult<String> {
		BuiltinTemplates.load(name)
	}
}

#[rstest]
fn test_nested_legends_number_items_in_order() {
	let env = FormEnvironment::default();
	let task = task();
	let html = env
		.builder(&task)
		.inputs(
			InputsOptions::new().name("Item #%i").for_association("items"),
			InputsContent::fields(["name"]),
		)
		.unwrap();

	let first = html.find("Item #1").unwrap();
	let second = html.find("Item #2").unwrap();
	let third = html.find("Item #3").unwrap();
	assert!(first < second && second < third);
	assert!(html.contains(r#"name="task[items_attributes][2][name]""#));
	assert!(html.contains(r#"value="three""#));
}

#[rstest]
fn test_repeated_candidates_check_existence_once() {
	let source = Arc::new(CountingSource {
		checks: AtomicUsize::new(0),
	});
	let dispatcher = Arc::new(TemplateDispatcher::new(source.clone()));
	let env = FormEnvironment::default().with_templates(dispatcher);
	let task = task();
	let builder = env.builder(&task);

	builder.input("title", InputOptions::new()).unwrap();
	let after_first = source.checks.load(Ordering::SeqCst);
	assert!(after_first > 0);

	for _ in 0..5 {
		builder.input("title", InputOptions::new()).unwrap();
	}
	assert_eq!(source.checks.load(Ordering::SeqCst), after_first);
}

#[rstest]
fn test_select_marks_current_value() {
	let env = FormEnvironment::default();
	let task = task();
	let html = env
		.builder(&task)
		.input(
			"priority",
			InputOptions::new()
				.as_kind(InputKind::Select)
				.collection(Collection::pairs([("Low", "low"), ("High", "high")])),
		)
		.unwrap();

	assert!(html.contains(r#"<select id="task_priority" name="task[priority]""#));
	assert!(html.contains(r#"<option value=""></option>"#));
	assert!(html.contains(r#"<option value="high" selected="selected">High</option>"#));
	assert!(html.contains(r#"<option value="low">Low</option>"#));
}

#[rstest]
fn test_radio_choices_get_their_own_ids() {
	let env = FormEnvironment::default();
	let task = task();
	let html = env
		.builder(&task)
		.input(
			"priority",
			InputOptions::new()
				.as_kind(InputKind::Radio)
				.collection(Collection::values(["low", "high"])),
		)
		.unwrap();

	assert!(html.contains(r#"id="task_priority_low""#));
	assert!(html.contains(r#"id="task_priority_high""#));
	assert!(html.contains(r#"value="high" checked="checked""#));
}

#[rstest]
fn test_html_attributes_keep_insertion_order() {
	let env = FormEnvironment::default();
	let task = task();
	let html = env
		.builder(&task)
		.input(
			"title",
			InputOptions::new()
				.input_html("rows", "5")
				.input_html("cols", "3"),
		)
		.unwrap();

	assert!(html.contains(r#"rows="5" cols="3""#));
}

#[rstest]
fn test_translated_labels_and_commit() {
	let mut catalog = CatalogTranslator::new("fr");
	catalog.add_translation("formtastic.labels.task.title", "Titre");
	catalog.add_translation("formtastic.create", "Créer %{model}");
	let env = FormEnvironment::new(FormBuilderConfig::default().with_i18n_lookups(true))
		.with_translator(Arc::new(catalog));
	let task = task();
	let builder = env.builder(&task);

	let input = builder.input("title", InputOptions::new()).unwrap();
	assert!(input.contains(">Titre<abbr"));

	let button = builder.commit_button(ButtonOptions::new()).unwrap();
	assert!(button.contains(r#"value="Créer Task""#));
}

#[rstest]
fn test_configured_buttons() {
	let config = FormBuilderConfig::default()
		.with_button(ButtonSpec::new("preview", ButtonKind::Button).with_class("secondary"));
	let env = FormEnvironment::new(config);
	let task = task();
	let html = env
		.builder(&task)
		.buttons(
			InputsOptions::new().class("actions"),
			ButtonsContent::names(["commit", "preview", "reset"]),
		)
		.unwrap();

	assert!(html.starts_with(r#"<fieldset class="buttons actions">"#));
	assert!(html.contains(r#"value="Create Task""#));
	assert!(html.contains(r#"type="button" name="preview" value="Preview" class="secondary""#));
	assert!(html.contains(r#"type="reset" name="reset" value="Reset""#));
}

#[rstest]
fn test_template_root_overrides_builtin() {
	let dir = tempfile::tempdir().unwrap();
	fs::create_dir_all(dir.path().join("inputs/task")).unwrap();
	fs::write(
		dir.path().join("inputs/task/string_input.html"),
		r#"<span data-field="{{ field.method }}"></span>"#,
	)
	.unwrap();

	let env = FormEnvironment::new(FormBuilderConfig::default().with_template_root(dir.path()));
	let task = task();
	let builder = env.builder(&task);

	let title = builder.input("title", InputOptions::new()).unwrap();
	assert!(title.contains(r#"<span data-field="title"></span>"#));

	let notes = builder
		.input("notes", InputOptions::new().as_kind(InputKind::Text))
		.unwrap();
	assert!(notes.contains("<textarea"));
}

#[rstest]
fn test_missing_template_surfaces_not_found() {
	let env = FormEnvironment::default();
	let task = task();
	let result = env.builder(&task).input(
		"color",
		InputOptions::new().as_kind(InputKind::Custom("color_wheel".to_string())),
	);

	match result {
		Err(reinhardt_form_builder::FormBuilderError::Template(TemplateError::TemplateNotFound(
			name,
		))) => assert_eq!(name, "inputs/task/color_wheel_input.html"),
		other => panic!("expected TemplateNotFound, got {:?}", other),
	}
}

#[rstest]
fn test_full_form() {
	let env = FormEnvironment::default();
	let task = task();
	let html = env
		.form(&task, "/tasks")
		.render(|f| {
			let mut out = f.inputs(
				InputsOptions::new().name("Basics"),
				InputsContent::fields(["title"]),
			)?;
			out.push_str(&f.buttons(InputsOptions::new(), ButtonsContent::Default)?);
			Ok(out)
		})
		.unwrap();

	assert!(html.starts_with(r#"<form class="formtastic task" id="new_task""#));
	assert!(html.contains(r#"<fieldset class="inputs"><legend><span>Basics</span></legend><ol><li class="string input required" id="task_title_input">"#));
	assert!(html.contains(r#"<fieldset class="buttons"><ol><li class="commit button""#));
	assert!(html.ends_with("</ol></fieldset></form>"));
}
