//! Diagnostics reported back to the caller instead of hard failures

use std::fmt;

use serde::Serialize;

use crate::Error;

/// Diagnostic severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A user-visible problem, optionally tied to an attribute path
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn with_attribute(mut self, path: impl Into<String>) -> Self {
        self.attribute = Some(path.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        match &self.attribute {
            Some(path) => write!(f, "{}: {} ({}): {}", severity, self.summary, path, self.detail),
            None => write!(f, "{}: {}: {}", severity, self.summary, self.detail),
        }
    }
}

impl From<&Error> for Diagnostic {
    fn from(err: &Error) -> Self {
        let summary = match err {
            Error::Marshal(_) => "Failed to marshal manifest",
            Error::Decode { .. } => "Failed to decode configuration",
            Error::Schema(_) => "Invalid data source schema",
            Error::UnknownDataSource(_) => "Unknown data source",
            Error::Config(_) => "Invalid configuration",
        };
        Diagnostic::error(summary, err.to_string())
    }
}

/// Whether any diagnostic is an error
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}
