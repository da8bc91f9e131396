use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Suggestion,
}

/// A single finding from the validator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level
    pub level: DiagnosticLevel,

    /// The rule that generated this diagnostic
    pub rule: String,

    /// Path into the definition where the issue was found
    /// (e.g. "children[1].props.class")
    pub field: String,

    /// Human-readable message
    pub message: String,

    /// Optional hint for fixing the issue
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn error(rule: impl Into<String>, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            rule: rule.into(),
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn warning(rule: impl Into<String>, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            rule: rule.into(),
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn suggestion(rule: impl Into<String>, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Suggestion,
            rule: rule.into(),
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// The validator's answer for one definition.
///
/// `is_valid` is false exactly when `errors` is non-empty; warnings and
/// suggestions are advisory and never block generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub suggestions: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut suggestions = Vec::new();

        for diagnostic in diagnostics {
            match diagnostic.level {
                DiagnosticLevel::Error => errors.push(diagnostic),
                DiagnosticLevel::Warning => warnings.push(diagnostic),
                DiagnosticLevel::Suggestion => suggestions.push(diagnostic),
            }
        }

        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_partition() {
        let report = ValidationReport::from_diagnostics(vec![
            Diagnostic::error("structure", "type", "missing"),
            Diagnostic::warning("react-class-prop", "props.class", "use className"),
            Diagnostic::suggestion("memoization", "", "consider React.memo"),
        ]);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.suggestions.len(), 1);
    }

    #[test]
    fn test_warnings_do_not_invalidate() {
        let report = ValidationReport::from_diagnostics(vec![Diagnostic::warning(
            "react-class-prop",
            "props.class",
            "use className",
        )]);
        assert!(report.is_valid);
    }
}
