//! Source-snippet rendering of issues through miette.

use std::fmt;

use ember_core::LineMap;
use ember_diagnostics::{DiagnosticCategory, Issue};
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceCode, SourceSpan};

/// One issue attached to its source file.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct SourceDiagnostic {
    message: String,
    code: u32,
    severity: miette::Severity,
    label: String,
    span: SourceSpan,
    src: NamedSource<String>,
}

impl SourceDiagnostic {
    pub fn new(file_name: &str, source: &str, line_map: &LineMap, issue: &Issue) -> Self {
        let token = &issue.token;
        let range = line_map.byte_range(token.span());
        let label = if token.is_end_of_input() {
            "end of file".to_string()
        } else if token.is_error() {
            "here".to_string()
        } else {
            format!("at '{}'", token.lexeme)
        };
        let severity = match issue.severity {
            DiagnosticCategory::Error => miette::Severity::Error,
            DiagnosticCategory::Warning => miette::Severity::Warning,
        };

        Self {
            message: issue.message.clone(),
            code: issue.code,
            severity,
            label,
            span: SourceSpan::from(range),
            src: NamedSource::new(file_name, source.to_string()),
        }
    }
}

impl Diagnostic for SourceDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.code == 0 {
            None
        } else {
            Some(Box::new(format!("E{:04}", self.code)))
        }
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(self.severity)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label.clone()),
            self.span,
        ))))
    }
}

/// Render every issue of one file as miette graphical reports.
pub fn render_issues(file_name: &str, source: &str, issues: &[Issue], color: bool) -> String {
    let theme = if color {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let handler = GraphicalReportHandler::new_themed(theme);
    let line_map = LineMap::new(source);

    let mut out = String::new();
    for issue in issues {
        let diagnostic = SourceDiagnostic::new(file_name, source, &line_map, issue);
        if let Err(err) = handler.render_report(&mut out, &diagnostic) {
            log::warn!("failed to render diagnostic: {}", err);
        }
    }
    out
}
