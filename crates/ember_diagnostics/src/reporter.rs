//! Reporters receive the diagnostics produced while parsing.

use std::fmt;
use std::io;

use ember_scanner::Token;
use log::warn;

use crate::{DiagnosticCategory, Issue};

/// Destination for diagnostics.
///
/// The parser never tracks its own error flag: whether a parse failed is
/// always answered by [`Reporter::had_error`].
pub trait Reporter {
    /// Record an error against `token`.
    fn error(&mut self, message: &str, token: &Token);

    /// Record a warning against `token`. Warnings never count as errors.
    fn warn(&mut self, message: &str, token: &Token);

    /// Number of errors recorded so far.
    fn error_count(&self) -> usize;

    fn had_error(&self) -> bool {
        self.error_count() > 0
    }
}

/// Render one diagnostic line:
///
/// - `[line 3] Error at 'x': message` for ordinary tokens,
/// - `[line 3] Error at end of file: message` for the end-of-input token,
/// - `[line 3] Error: message` for scanner error tokens.
pub(crate) fn write_report(
    out: &mut dyn fmt::Write,
    severity: DiagnosticCategory,
    message: &str,
    token: &Token,
) -> fmt::Result {
    let label = match severity {
        DiagnosticCategory::Error => "Error",
        DiagnosticCategory::Warning => "Warning",
    };
    write!(out, "[line {}] {}", token.line, label)?;
    if token.is_end_of_input() {
        write!(out, " at end of file")?;
    } else if !token.is_error() {
        write!(out, " at '{}'", token.lexeme)?;
    }
    write!(out, ": {}", message)
}

// ============================================================================
// CollectingReporter
// ============================================================================

/// Keeps every issue in report order for programmatic consumption.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    issues: Vec<Issue>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    pub fn warning_count(&self) -> usize {
        self.issues.iter().filter(|i| !i.is_error()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }
}

impl Reporter for CollectingReporter {
    fn error(&mut self, message: &str, token: &Token) {
        self.issues
            .push(Issue::new(DiagnosticCategory::Error, message, token));
    }

    fn warn(&mut self, message: &str, token: &Token) {
        self.issues
            .push(Issue::new(DiagnosticCategory::Warning, message, token));
    }

    fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_error()).count()
    }
}

// ============================================================================
// PrettyReporter
// ============================================================================

/// Writes one human-readable line per diagnostic to `out`.
pub struct PrettyReporter<W: io::Write> {
    out: W,
    errors: usize,
    warnings: usize,
}

impl PrettyReporter<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: io::Write> PrettyReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            errors: 0,
            warnings: 0,
        }
    }

    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, severity: DiagnosticCategory, message: &str, token: &Token) {
        let mut line = String::new();
        // Writing into a String cannot fail.
        let _ = write_report(&mut line, severity, message, token);
        if let Err(err) = writeln!(self.out, "{}", line) {
            warn!("failed to write diagnostic: {}", err);
        }
    }
}

impl<W: io::Write> Reporter for PrettyReporter<W> {
    fn error(&mut self, message: &str, token: &Token) {
        self.errors += 1;
        self.emit(DiagnosticCategory::Error, message, token);
    }

    fn warn(&mut self, message: &str, token: &Token) {
        self.warnings += 1;
        self.emit(DiagnosticCategory::Warning, message, token);
    }

    fn error_count(&self) -> usize {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_ast::SyntaxKind;

    fn token(kind: SyntaxKind, lexeme: &str, line: u32) -> Token {
        Token::new(kind, lexeme, 0, lexeme.chars().count() as u32, line)
    }

    fn pretty(report: impl FnOnce(&mut PrettyReporter<Vec<u8>>)) -> String {
        let mut reporter = PrettyReporter::new(Vec::new());
        report(&mut reporter);
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_pretty_error_formats() {
        let out = pretty(|r| {
            r.error("Expected expression.", &token(SyntaxKind::SemicolonToken, ";", 1));
            r.error("Expected ';' after value.", &token(SyntaxKind::EndOfInputToken, "", 3));
            r.error("Unexpected character", &token(SyntaxKind::ErrorToken, "Unexpected character", 2));
        });
        assert_eq!(
            out,
            "[line 1] Error at ';': Expected expression.\n\
             [line 3] Error at end of file: Expected ';' after value.\n\
             [line 2] Error: Unexpected character\n"
        );
    }

    #[test]
    fn test_pretty_warning_does_not_count_as_error() {
        let mut reporter = PrettyReporter::new(Vec::new());
        reporter.warn("Unused value.", &token(SyntaxKind::NumericLiteral, "1", 4));
        assert!(!reporter.had_error());
        assert_eq!(reporter.warning_count(), 1);
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "[line 4] Warning at '1': Unused value.\n");
    }

    #[test]
    fn test_collecting_reporter_keeps_order() {
        let mut reporter = CollectingReporter::new();
        assert!(!reporter.had_error());
        reporter.warn("first", &token(SyntaxKind::Identifier, "a", 1));
        reporter.error("Expected expression.", &token(SyntaxKind::Identifier, "b", 2));
        reporter.error("Expected end of input.", &token(SyntaxKind::Identifier, "c", 3));

        assert!(reporter.had_error());
        assert_eq!(reporter.error_count(), 2);
        assert_eq!(reporter.warning_count(), 1);
        let messages: Vec<&str> = reporter.issues().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "Expected expression.", "Expected end of input."]);
        assert_eq!(reporter.issues()[1].code, 1100);
        assert_eq!(reporter.issues()[0].code, 0);
    }
}
