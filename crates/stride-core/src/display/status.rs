//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying one-line operation outcomes, with an
/// optional follow-up hint on the next line.
#[derive(Debug, Clone)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
    pub hint: Option<String>,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
            hint: None,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
            hint: None,
        }
    }

    /// Attach a hint telling the user what to do next.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)?;
        if let Some(hint) = &self.hint {
            writeln!(f, "Hint: {hint}")?;
        }
        Ok(())
    }
}
