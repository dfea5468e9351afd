//! ember_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! The parser reports problems as `(message, token)` pairs through the
//! [`Reporter`] trait. This crate defines that trait, the catalogue of known
//! messages with their stable codes, and two reporters: one that collects
//! [`Issue`]s for programmatic use and one that writes human-readable lines.

mod reporter;

pub use reporter::{CollectingReporter, PrettyReporter, Reporter};

use ember_scanner::Token;
use serde::Serialize;
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A known diagnostic message with its code and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticMessage {
    /// Stable numeric code, e.g. 1100.
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// A single reported problem, in report order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub severity: DiagnosticCategory,
    /// Catalogue code for `message`, or 0 when it has none.
    pub code: u32,
    pub message: String,
    /// The token the problem was reported against.
    pub token: Token,
}

impl Issue {
    pub fn new(severity: DiagnosticCategory, message: &str, token: &Token) -> Self {
        Self {
            severity,
            code: messages::code_for(message),
            message: message.to_string(),
            token: token.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticCategory::Error
    }
}

impl fmt::Display for Issue {
    /// `[line N] Error at 'lexeme': message`, the same line `PrettyReporter`
    /// writes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        reporter::write_report(f, self.severity, &self.message, &self.token)
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;
    use ember_scanner::{UNEXPECTED_CHARACTER, UNTERMINATED_STRING};

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const UNEXPECTED_CHARACTER_FOUND: DiagnosticMessage = diag!(1001, Error, UNEXPECTED_CHARACTER);
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, Error, UNTERMINATED_STRING);

    // ========================================================================
    // Parser errors (1100-1199)
    // ========================================================================
    pub const EXPECTED_EXPRESSION: DiagnosticMessage = diag!(1100, Error, "Expected expression.");
    pub const EXPECTED_SEMICOLON_AFTER_VALUE: DiagnosticMessage = diag!(1101, Error, "Expected ';' after value.");
    pub const EXPECTED_SEMICOLON_AFTER_EXPRESSION: DiagnosticMessage = diag!(1102, Error, "Expected ';' after expression.");
    pub const EXPECTED_END_OF_INPUT: DiagnosticMessage = diag!(1103, Error, "Expected end of input.");
    pub const INVALID_NUMBER_LITERAL: DiagnosticMessage = diag!(1104, Error, "Invalid number literal.");
    pub const EXPRESSION_NESTS_TOO_DEEPLY: DiagnosticMessage = diag!(1105, Error, "Expression nests too deeply.");

    const ALL: &[DiagnosticMessage] = &[
        UNEXPECTED_CHARACTER_FOUND,
        UNTERMINATED_STRING_LITERAL,
        EXPECTED_EXPRESSION,
        EXPECTED_SEMICOLON_AFTER_VALUE,
        EXPECTED_SEMICOLON_AFTER_EXPRESSION,
        EXPECTED_END_OF_INPUT,
        INVALID_NUMBER_LITERAL,
        EXPRESSION_NESTS_TOO_DEEPLY,
    ];

    /// Find the catalogue entry whose text is exactly `message`.
    pub fn lookup(message: &str) -> Option<&'static DiagnosticMessage> {
        ALL.iter().find(|d| d.message == message)
    }

    /// The code for `message`, or 0 for text outside the catalogue.
    pub fn code_for(message: &str) -> u32 {
        lookup(message).map_or(0, |d| d.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_ast::SyntaxKind;

    #[test]
    fn test_catalogue_lookup() {
        assert_eq!(messages::code_for("Expected expression."), 1100);
        assert_eq!(messages::code_for("Unterminated string"), 1002);
        assert_eq!(messages::code_for("Something else"), 0);
        let entry = messages::lookup("Expected end of input.").unwrap();
        assert_eq!(entry.category, DiagnosticCategory::Error);
    }

    #[test]
    fn test_issue_serializes_token_and_severity() {
        let token = Token::new(SyntaxKind::SemicolonToken, ";", 4, 1, 2);
        let issue = Issue::new(DiagnosticCategory::Error, "Expected expression.", &token);
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["code"], 1100);
        assert_eq!(json["token"]["kind"], "SemicolonToken");
        assert_eq!(json["token"]["line"], 2);
        assert_eq!(issue.to_string(), "[line 2] Error at ';': Expected expression.");
    }
}
