//! Form templates
//!
//! Built-in templates, application template roots layered above them, and
//! the dispatcher that memoizes which candidate template wins.

pub use reinhardt_form_templates::*;
