//! Diagnostics reported by colour file validation.

use std::fmt;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single validation finding about one colour entry.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code, e.g. "tint::validate::invalid-length".
    pub code: String,
    pub message: String,
    /// Name of the colour entry the finding is about.
    pub colour: Option<String>,
    /// Suggested fix.
    pub help: Option<String>,
}

impl Diagnostic {
    fn with_severity(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            colour: None,
            help: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, code, message)
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, code, message)
    }

    /// Attach the colour name this diagnostic refers to.
    pub fn for_colour(mut self, name: impl Into<String>) -> Self {
        self.colour = Some(name.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

/// Diagnostics collected from a validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn error(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.push(Diagnostic::error(code, message));
    }

    pub fn warning(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.push(Diagnostic::warning(code, message));
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// True when nothing at all was reported.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Diagnostics ordered errors first, then by colour name.
    pub fn sorted(&self) -> Vec<&Diagnostic> {
        let mut sorted: Vec<&Diagnostic> = self.diagnostics.iter().collect();
        sorted.sort_by(|a, b| b.severity.cmp(&a.severity).then_with(|| a.colour.cmp(&b.colour)));
        sorted
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == severity).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ValidationResult::new();
        assert!(result.is_ok());
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.warning_count(), 0);
    }

    #[test]
    fn test_error_diagnostic() {
        let mut result = ValidationResult::new();
        result.error("tint::test", "colour 'brand' is unusable");

        assert!(result.has_errors());
        assert!(!result.has_warnings());
        assert!(!result.is_ok());
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_warning_diagnostic() {
        let mut result = ValidationResult::new();
        result.warning("tint::test", "colour 'red' shadows a built-in");

        assert!(!result.has_errors());
        assert!(result.has_warnings());
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_merge() {
        let mut a = ValidationResult::new();
        a.error("tint::a", "error a");

        let mut b = ValidationResult::new();
        b.warning("tint::b", "warning b");

        a.merge(b);
        assert_eq!(a.error_count(), 1);
        assert_eq!(a.warning_count(), 1);
        assert_eq!(a.iter().count(), 2);
    }

    #[test]
    fn test_diagnostic_with_help() {
        let d = Diagnostic::warning("tint::test", "shadowed")
            .with_help("Rename the colour to keep the built-in");
        assert_eq!(d.help.as_deref(), Some("Rename the colour to keep the built-in"));
        assert_eq!(d.severity.to_string(), "warning");
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::error("tint::validate::invalid-length", "bad value").for_colour("brand");
        assert_eq!(d.to_string(), "error[tint::validate::invalid-length]: bad value");
        assert_eq!(d.colour.as_deref(), Some("brand"));
        assert!(d.is_error());
    }

    #[test]
    fn test_sorted_puts_errors_first() {
        let mut result = ValidationResult::new();
        result.push(Diagnostic::warning("tint::w", "w").for_colour("a"));
        result.push(Diagnostic::error("tint::e", "e").for_colour("z"));
        result.push(Diagnostic::error("tint::e", "e").for_colour("b"));

        let colours: Vec<_> = result.sorted().iter().map(|d| d.colour.clone().unwrap()).collect();
        assert_eq!(colours, ["b", "z", "a"]);
    }
}
