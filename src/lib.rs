//! # Reinhardt Semantic Forms
//!
//! Semantic HTML forms for model objects: the builder infers a widget per
//! field from schema, association and validation metadata, and renders
//! `fieldset`/`ol`/`li` markup through overridable Tera templates.
//!
//! ## Feature Flags
//!
//! - `templates` - Template lookup, name caching and rendering
//! - `builder` - The form builder (enables `templates`)
//! - `full` (default) - Everything
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_semantic_forms::prelude::*;
//! use serde_json::Value;
//!
//! struct Signup;
//!
//! impl FormObject for Signup {
//!     fn model_name(&self) -> &str {
//!         "Signup"
//!     }
//!
//!     fn value_of(&self, _field: &str) -> Option<Value> {
//!         None
//!     }
//! }
//!
//! let env = FormEnvironment::default();
//! let signup = Signup;
//! let html = env
//!     .form(&signup, "/signup")
//!     .render(|f| {
//!         let mut html = f.inputs(
//!             InputsOptions::new(),
//!             InputsContent::fields(["email", "password"]),
//!         )?;
//!         html.push_str(&f.buttons(InputsOptions::new(), ButtonsContent::Default)?);
//!         Ok(html)
//!     })
//!     .unwrap();
//!
//! assert!(html.contains(r#"type="password""#));
//! assert!(html.contains(r#"value="Submit Signup""#));
//! ```

#[cfg(feature = "builder")]
pub mod forms;
#[cfg(feature = "templates")]
pub mod templates;

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "builder")]
	pub use reinhardt_form_builder::{
		Association, ButtonOptions, ButtonsContent, Collection, Column, ColumnType,
		FormBuilderConfig, FormBuilderError, FormBuilderResult, FormEnvironment, FormObject,
		InputKind, InputOptions, InputsContent, InputsOptions, Record, RecordSource,
		SemanticForm, SemanticFormBuilder, Translator,
	};
	#[cfg(feature = "templates")]
	pub use reinhardt_form_templates::{TemplateDispatcher, TemplateError, TemplateSource};
}
