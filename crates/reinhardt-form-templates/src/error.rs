//! Error types for template lookup and rendering.

use thiserror::Error;

/// Errors that can occur while locating or rendering a form template.
#[derive(Debug, Error)]
pub enum TemplateError {
	/// No source could provide the named template.
	#[error("Template not found: {0}")]
	TemplateNotFound(String),

	/// The template engine rejected or failed to render a template.
	#[error("Render error: {0}")]
	Render(String),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl From<tera::Error> for TemplateError {
	fn from(error: tera::Error) -> Self {
		// Tera nests the useful message in the source chain
		let mut message = error.to_string();
		let mut source = std::error::Error::source(&error);
		while let Some(inner) = source {
			message.push_str(": ");
			message.push_str(&inner.to_string());
			source = inner.source();
		}
		TemplateError::Render(message)
	}
}

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_template_not_found_message() {
		let error = TemplateError::TemplateNotFound("inputs/post/binary_input.html".to_string());
		assert_eq!(
			error.to_string(),
			"Template not found: inputs/post/binary_input.html"
		);
	}

	#[rstest]
	fn test_io_error_conversion() {
		let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
		let error: TemplateError = io.into();
		assert!(matches!(error, TemplateError::Io(_)));
		assert!(error.to_string().starts_with("IO error:"));
	}
}
