//! Structured error types shared across radii crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`RadiiError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (orders, dimensions, offending values).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for radii.
///
/// Only [`RadiiError::Domain`] and [`RadiiError::Space`] can come out of the
/// projection and existence routines; both signal a caller bug. The absence
/// of a certificate is never an error: it is reported as an empty interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum RadiiError {
    /// Violated mathematical preconditions (negative or non-finite bounds).
    #[error("domain error: {0}")]
    Domain(ErrorInfo),
    /// Incompatible or mismatched sequence spaces.
    #[error("space error: {0}")]
    Space(ErrorInfo),
    /// Newton driver failures.
    #[error("newton error: {0}")]
    Newton(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl RadiiError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            RadiiError::Domain(info)
            | RadiiError::Space(info)
            | RadiiError::Newton(info)
            | RadiiError::Serde(info) => info,
        }
    }

    /// Shorthand for a [`RadiiError::Space`] without context.
    pub fn space(code: &str, message: impl Into<String>) -> Self {
        RadiiError::Space(ErrorInfo::new(code, message))
    }

    /// Returns true when the error reports invalid mathematical inputs.
    pub fn is_domain(&self) -> bool {
        matches!(self, RadiiError::Domain(_))
    }
}
