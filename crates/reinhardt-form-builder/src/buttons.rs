//! Named buttons
//!
//! Buttons are looked up by name in a [`ButtonRegistry`] built once from
//! configuration. `commit` and `reset` are always present; applications add
//! their own through `FormBuilderConfig::buttons`.

use crate::config::FormBuilderConfig;
use crate::error::{FormBuilderError, FormBuilderResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What the button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
	Submit,
	Reset,
	Button,
}

impl ButtonKind {
	/// `type` attribute of the rendered `<input>`
	pub fn input_type(&self) -> &'static str {
		match self {
			ButtonKind::Submit => "submit",
			ButtonKind::Reset => "reset",
			ButtonKind::Button => "button",
		}
	}
}

/// One registered button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSpec {
	pub name: String,
	pub kind: ButtonKind,
	/// Caption; when absent the builder derives one from the name
	#[serde(default)]
	pub label: Option<String>,
	/// CSS class on the `<input>`
	#[serde(default)]
	pub class: Option<String>,
}

impl ButtonSpec {
	pub fn new(name: impl Into<String>, kind: ButtonKind) -> Self {
		Self {
			name: name.into(),
			kind,
			label: None,
			class: None,
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}
}

/// Button name → spec lookup table.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::{ButtonKind, ButtonRegistry, ButtonSpec, FormBuilderConfig};
///
/// let config = FormBuilderConfig::default()
///     .with_button(ButtonSpec::new("preview", ButtonKind::Button));
/// let registry = ButtonRegistry::from_config(&config);
///
/// assert_eq!(registry.get("commit").unwrap().kind, ButtonKind::Submit);
/// assert_eq!(registry.get("preview").unwrap().kind, ButtonKind::Button);
/// assert!(registry.get("explode").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ButtonRegistry {
	buttons: IndexMap<String, ButtonSpec>,
}

impl ButtonRegistry {
	/// Registry holding only `commit` and `reset`
	pub fn new() -> Self {
		let mut registry = Self {
			buttons: IndexMap::new(),
		};
		registry.register(ButtonSpec::new("commit", ButtonKind::Submit));
		registry.register(ButtonSpec::new("reset", ButtonKind::Reset));
		registry
	}

	/// Defaults plus the configured buttons; a configured name replaces a default
	pub fn from_config(config: &FormBuilderConfig) -> Self {
		let mut registry = Self::new();
		for spec in &config.buttons {
			registry.register(spec.clone());
		}
		registry
	}

	/// Add or replace a button
	pub fn register(&mut self, spec: ButtonSpec) {
		self.buttons.insert(spec.name.clone(), spec);
	}

	/// Look a button up by name
	pub fn get(&self, name: &str) -> FormBuilderResult<&ButtonSpec> {
		self.buttons
			.get(name)
			.ok_or_else(|| FormBuilderError::UnknownButton(name.to_string()))
	}

	/// Registered names in registration order
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.buttons.keys().map(String::as_str)
	}
}

impl Default for ButtonRegistry {
	fn default() -> Self {
		Self::new()
	}
}
