//! Error types for the form builder.

use reinhardt_form_templates::TemplateError;
use thiserror::Error;

/// Errors that can occur while resolving or rendering form inputs.
///
/// Missing metadata is never an error; the resolver falls back instead. The
/// variants here cover misuse by the caller and failures of the services the
/// builder calls into.
#[derive(Debug, Error)]
pub enum FormBuilderError {
	/// The caller combined options that cannot be honoured together.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// A model name inferred by convention did not resolve to a known model.
	#[error("Model not found: {0}")]
	ModelNotFound(String),

	/// No button with this name is registered.
	#[error("Unknown button: {0}")]
	UnknownButton(String),

	/// A string did not name an input kind.
	#[error("Unknown input kind: {0}")]
	UnknownInputKind(String),

	/// Configuration could not be parsed.
	#[error("Configuration error: {0}")]
	Config(#[from] toml::de::Error),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Template lookup or rendering failed.
	#[error(transparent)]
	Template(#[from] TemplateError),
}

/// Result type alias for form builder operations.
pub type FormBuilderResult<T> = Result<T, FormBuilderError>;
