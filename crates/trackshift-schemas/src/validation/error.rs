//! Structured validation failure entries

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// A single schema violation inside a candidate object.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// JSON pointer to the offending location inside the candidate
    pub path: String,
    /// The schema keyword that was violated, e.g. `required` or `type`
    pub keyword: String,
    /// Human-readable description of the violation
    pub message: String,
    /// Keyword-specific details, `null` when the keyword carries none
    pub params: Value,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "`{}` violated at '{}': {}", self.keyword, path, self.message)
    }
}

impl ValidationIssue {
    /// Create an issue without keyword-specific details.
    pub fn new<P, K, M>(path: P, keyword: K, message: M) -> Self
    where
        P: Into<String>,
        K: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            keyword: keyword.into(),
            message: message.into(),
            params: Value::Null,
        }
    }

    /// Attach keyword-specific details.
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }
}
