//! Semantic form builder
//!
//! This module provides access to the form builder: input type inference,
//! option collections, labels and hints, nested fieldsets and buttons.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_semantic_forms::forms::{FormBuilderConfig, FormEnvironment, LabelStrategy};
//!
//! let config = FormBuilderConfig::from_toml_str(
//!     r#"
//! all_fields_required_by_default = false
//! label_str_method = "titleize"
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.label_str_method, LabelStrategy::Titleize);
//! let env = FormEnvironment::new(config);
//! assert!(!env.config().all_fields_required_by_default);
//! ```

pub use reinhardt_form_builder::*;
