//! Template lookup and rendering for semantic form markup
//!
//! This crate is the rendering half of the semantic form builder:
//! - [`TemplateSource`]: where template text comes from (built-ins, an
//!   application template root, or a layered stack of both)
//! - [`TemplateDispatcher`]: picks the first existing template from an ordered
//!   candidate list, memoizing the answer per list
//! - [`TemplateRenderer`]: renders a template with a locals bag, optionally
//!   wrapping pre-rendered content (Tera by default)
//!
//! # Overriding templates
//!
//! Point [`TemplateDispatcher::from_root`] at a directory and drop in a file
//! with the same relative name as a built-in (for example
//! `inputs/stringish_input.html`), or a more specific name the form builder
//! asks for first (`inputs/post/string_input.html`).

pub mod dispatcher;
pub mod error;
pub mod fs_loader;
pub mod renderer;
pub mod source;

pub use dispatcher::TemplateDispatcher;
pub use error::{TemplateError, TemplateResult};
pub use fs_loader::FileSystemTemplateSource;
pub use renderer::{TemplateRenderer, TeraRenderer};
pub use source::{BuiltinTemplates, LayeredTemplateSource, TemplateSource};
