//! Miette-based error diagnostics for CLI error presentation.
//!
//! The struct fields are read by miette's derive macros at render time.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
///
/// Displays the configuration file content with a labeled span pointing
/// to the problematic location, along with an optional help message.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(propedge::config))]
pub struct ConfigError {
    pub message: String,

    #[source_code]
    pub src: miette::NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    /// Create a new configuration error pointing at `offset..offset + len`.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        name: impl AsRef<str>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: miette::NamedSource::new(name, src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Build a diagnostic from a TOML parse failure, if it carries a span.
    #[must_use]
    pub fn from_toml(name: impl AsRef<str>, src: &str, err: &toml::de::Error) -> Option<Self> {
        let span = err.span()?;
        Some(Self::new(
            err.message().to_string(),
            name,
            src,
            span.start,
            span.end.saturating_sub(span.start).max(1),
        ))
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_errors_carry_a_span() {
        let src = "[scan]\nthreshold = \n";
        let err = toml::from_str::<toml::Value>(src).unwrap_err();
        let diagnostic = ConfigError::from_toml("propedge.toml", src, &err).unwrap();
        assert!(!diagnostic.message.is_empty());
        assert!(diagnostic.span.offset() <= src.len());
    }
}
