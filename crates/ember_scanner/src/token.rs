//! Token information produced by the scanner.

use ember_ast::syntax_kind::SyntaxKind;
use ember_core::text::TextSpan;
use serde::Serialize;

/// A scanned token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The kind of token.
    pub kind: SyntaxKind,
    /// The source text of the token, or the message for an `ErrorToken`.
    pub lexeme: String,
    /// Start offset in the source, in characters.
    pub start: u32,
    /// Length of the scanned span, in characters.
    pub length: u32,
    /// 1-based line the scanner was on when the token was finished.
    pub line: u32,
}

impl Token {
    pub fn new(kind: SyntaxKind, lexeme: impl Into<String>, start: u32, length: u32, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            start,
            length,
            line,
        }
    }

    /// The source span this token covers.
    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.start, self.length)
    }

    /// One past the last character of this token.
    pub fn end(&self) -> u32 {
        self.start + self.length
    }

    pub fn is_error(&self) -> bool {
        self.kind == SyntaxKind::ErrorToken
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == SyntaxKind::EndOfInputToken
    }
}
