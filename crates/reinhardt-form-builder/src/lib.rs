//! Semantic form builder
//!
//! Given a model object that exposes its schema through [`FormObject`], the
//! builder infers a widget for each field, resolves labels, hints, errors and
//! option collections, and renders `fieldset`/`ol`/`li` markup through the
//! templates in `reinhardt-form-templates`.
//!
//! ## Pieces
//!
//! - [`InputTypeResolver`]: field → [`FieldDescriptor`] (kind, name, required,
//!   collection, labels)
//! - [`SemanticFormBuilder`]: renders inputs, nested fieldsets and buttons
//! - [`SemanticForm`]: the surrounding `<form>` tag
//! - [`FormEnvironment`]: configuration, templates, translator and buttons,
//!   built once at startup
//!
//! ## Example
//!
//! ```
//! use reinhardt_form_builder::{
//!     Column, ColumnType, FormEnvironment, FormObject, InputKind, InputOptions,
//! };
//! use serde_json::{Value, json};
//!
//! struct User;
//!
//! impl FormObject for User {
//!     fn model_name(&self) -> &str {
//!         "User"
//!     }
//!
//!     fn value_of(&self, field: &str) -> Option<Value> {
//!         (field == "age").then(|| json!(30))
//!     }
//!
//!     fn column_for(&self, field: &str) -> Option<Column> {
//!         match field {
//!             "age" => Some(Column::new("age", ColumnType::Integer)),
//!             "password" => Some(Column::new("password", ColumnType::String)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let env = FormEnvironment::default();
//! let user = User;
//! let builder = env.builder(&user);
//!
//! assert_eq!(builder.describe("age", InputOptions::new()).unwrap().kind, InputKind::Numeric);
//! assert_eq!(builder.describe("password", InputOptions::new()).unwrap().kind, InputKind::Password);
//! ```

pub mod builder;
pub mod buttons;
pub mod collection;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod fieldset;
pub mod form;
pub mod i18n;
pub mod inflector;
pub mod kind;
pub mod options;
pub mod resolver;
pub mod schema;

pub use builder::{ButtonsContent, FormEnvironment, InputsContent, SemanticFormBuilder};
pub use buttons::{ButtonKind, ButtonRegistry, ButtonSpec};
pub use collection::{Choice, Collection};
pub use config::{FormBuilderConfig, InlineErrors, InlinePart, LabelStrategy};
pub use descriptor::FieldDescriptor;
pub use error::{FormBuilderError, FormBuilderResult};
pub use form::SemanticForm;
pub use i18n::{CatalogTranslator, NullTranslator, Translator};
pub use kind::InputKind;
pub use options::{ButtonOptions, HtmlAttributes, InputOptions, InputsOptions, LabelOption};
pub use resolver::InputTypeResolver;
pub use schema::{
	Association, Attachment, Cardinality, Column, ColumnType, FormObject, Record, RecordSource,
};
