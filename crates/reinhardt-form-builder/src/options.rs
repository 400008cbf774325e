//! Per-call options for inputs, fieldsets and buttons

use crate::collection::Collection;
use crate::kind::InputKind;
use indexmap::IndexMap;

/// HTML attributes in insertion order.
pub type HtmlAttributes = IndexMap<String, String>;

/// Label override for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOption {
	/// Use this text
	Text(String),
	/// Render no label
	Hidden,
}

/// Options for a single input.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::{InputKind, InputOptions};
///
/// let options = InputOptions::new()
///     .as_kind(InputKind::Text)
///     .required(false)
///     .hint("Markdown is supported")
///     .input_html("rows", "5");
///
/// assert_eq!(options.kind, Some(InputKind::Text));
/// assert_eq!(options.input_html.get("rows").map(String::as_str), Some("5"));
/// ```
#[derive(Debug, Default)]
pub struct InputOptions {
	pub kind: Option<InputKind>,
	pub required: Option<bool>,
	pub label: Option<LabelOption>,
	pub hint: Option<String>,
	pub collection: Option<Collection>,
	pub label_method: Option<String>,
	pub value_method: Option<String>,
	/// Labels for the synthesized boolean collection
	pub true_label: Option<String>,
	pub false_label: Option<String>,
	pub include_blank: Option<bool>,
	pub prompt: Option<String>,
	pub multiple: Option<bool>,
	/// Zones listed first in a time zone select
	pub priority_zones: Vec<String>,
	pub input_html: HtmlAttributes,
	pub label_html: HtmlAttributes,
	pub wrapper_html: HtmlAttributes,
}

impl InputOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn as_kind(mut self, kind: InputKind) -> Self {
		self.kind = Some(kind);
		self
	}

	pub fn required(mut self, required: bool) -> Self {
		self.required = Some(required);
		self
	}

	pub fn label(mut self, text: impl Into<String>) -> Self {
		self.label = Some(LabelOption::Text(text.into()));
		self
	}

	pub fn without_label(mut self) -> Self {
		self.label = Some(LabelOption::Hidden);
		self
	}

	pub fn hint(mut self, text: impl Into<String>) -> Self {
		self.hint = Some(text.into());
		self
	}

	pub fn collection(mut self, collection: Collection) -> Self {
		self.collection = Some(collection);
		self
	}

	pub fn label_method(mut self, method: impl Into<String>) -> Self {
		self.label_method = Some(method.into());
		self
	}

	pub fn value_method(mut self, method: impl Into<String>) -> Self {
		self.value_method = Some(method.into());
		self
	}

	pub fn true_label(mut self, text: impl Into<String>) -> Self {
		self.true_label = Some(text.into());
		self
	}

	pub fn false_label(mut self, text: impl Into<String>) -> Self {
		self.false_label = Some(text.into());
		self
	}

	pub fn include_blank(mut self, include: bool) -> Self {
		self.include_blank = Some(include);
		self
	}

	pub fn prompt(mut self, text: impl Into<String>) -> Self {
		self.prompt = Some(text.into());
		self
	}

	pub fn multiple(mut self, multiple: bool) -> Self {
		self.multiple = Some(multiple);
		self
	}

	pub fn priority_zones<I, S>(mut self, zones: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.priority_zones = zones.into_iter().map(Into::into).collect();
		self
	}

	pub fn input_html(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.input_html.insert(name.into(), value.into());
		self
	}

	pub fn label_html(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.label_html.insert(name.into(), value.into());
		self
	}

	pub fn wrapper_html(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.wrapper_html.insert(name.into(), value.into());
		self
	}
}

/// Options for an `inputs` fieldset.
#[derive(Debug, Clone, Default)]
pub struct InputsOptions {
	/// Legend text; one `%i`/`%d` slot is replaced by the nested item index
	pub name: Option<String>,
	pub id: Option<String>,
	pub class: Option<String>,
	/// Render one fieldset per child of this association
	pub for_association: Option<String>,
	pub html: HtmlAttributes,
}

impl InputsOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn name(mut self, legend: impl Into<String>) -> Self {
		self.name = Some(legend.into());
		self
	}

	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	pub fn for_association(mut self, association: impl Into<String>) -> Self {
		self.for_association = Some(association.into());
		self
	}

	pub fn html(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.html.insert(name.into(), value.into());
		self
	}
}

/// Options for a single button.
#[derive(Debug, Clone, Default)]
pub struct ButtonOptions {
	pub label: Option<String>,
	pub class: Option<String>,
	pub wrapper_id: Option<String>,
	pub button_html: HtmlAttributes,
}

impl ButtonOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn label(mut self, text: impl Into<String>) -> Self {
		self.label = Some(text.into());
		self
	}

	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	pub fn wrapper_id(mut self, id: impl Into<String>) -> Self {
		self.wrapper_id = Some(id.into());
		self
	}

	pub fn button_html(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.button_html.insert(name.into(), value.into());
		self
	}
}
