use std::fmt;

use serde::Serialize;
use smol_str::SmolStr;

use crate::node::Location;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    MissingRequiredField { field: SmolStr },
}

/// Non-fatal finding attached to an otherwise successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(flatten)]
    pub kind: DiagnosticKind,
    pub pointer: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn missing_required_field(field: &str, location: &Location) -> Self {
        Self {
            kind: DiagnosticKind::MissingRequiredField {
                field: SmolStr::new(field),
            },
            pointer: location.clone(),
            message: format!("`{field}` is a required property of {location}"),
        }
    }

    /// Field name for missing-field diagnostics.
    pub fn field(&self) -> Option<&str> {
        match &self.kind {
            DiagnosticKind::MissingRequiredField { field } => Some(field.as_str()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
