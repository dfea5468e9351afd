//! Operators that can appear in prefix and infix expressions.

use serde::Serialize;

use crate::syntax_kind::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    Bang,
    Minus,
    Plus,
    Slash,
    Star,
    BangEqual,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
}

impl OperatorKind {
    /// Map an operator token to its operator, or None for any other token.
    pub fn from_syntax_kind(kind: SyntaxKind) -> Option<OperatorKind> {
        let op = match kind {
            SyntaxKind::ExclamationToken => OperatorKind::Bang,
            SyntaxKind::MinusToken => OperatorKind::Minus,
            SyntaxKind::PlusToken => OperatorKind::Plus,
            SyntaxKind::SlashToken => OperatorKind::Slash,
            SyntaxKind::AsteriskToken => OperatorKind::Star,
            SyntaxKind::ExclamationEqualsToken => OperatorKind::BangEqual,
            SyntaxKind::EqualsEqualsToken => OperatorKind::EqualEqual,
            SyntaxKind::GreaterThanToken => OperatorKind::Greater,
            SyntaxKind::GreaterThanEqualsToken => OperatorKind::GreaterEqual,
            SyntaxKind::LessThanToken => OperatorKind::Less,
            SyntaxKind::LessThanEqualsToken => OperatorKind::LessEqual,
            _ => return None,
        };
        Some(op)
    }

    /// The token this operator is written as.
    pub fn syntax_kind(self) -> SyntaxKind {
        match self {
            OperatorKind::Bang => SyntaxKind::ExclamationToken,
            OperatorKind::Minus => SyntaxKind::MinusToken,
            OperatorKind::Plus => SyntaxKind::PlusToken,
            OperatorKind::Slash => SyntaxKind::SlashToken,
            OperatorKind::Star => SyntaxKind::AsteriskToken,
            OperatorKind::BangEqual => SyntaxKind::ExclamationEqualsToken,
            OperatorKind::EqualEqual => SyntaxKind::EqualsEqualsToken,
            OperatorKind::Greater => SyntaxKind::GreaterThanToken,
            OperatorKind::GreaterEqual => SyntaxKind::GreaterThanEqualsToken,
            OperatorKind::Less => SyntaxKind::LessThanToken,
            OperatorKind::LessEqual => SyntaxKind::LessThanEqualsToken,
        }
    }

    /// The name used by the AST printer, e.g. `plus` or `bang_equal`.
    pub fn name(self) -> &'static str {
        match self {
            OperatorKind::Bang => "bang",
            OperatorKind::Minus => "minus",
            OperatorKind::Plus => "plus",
            OperatorKind::Slash => "slash",
            OperatorKind::Star => "star",
            OperatorKind::BangEqual => "bang_equal",
            OperatorKind::EqualEqual => "equal_equal",
            OperatorKind::Greater => "greater",
            OperatorKind::GreaterEqual => "greater_equal",
            OperatorKind::Less => "less",
            OperatorKind::LessEqual => "less_equal",
        }
    }

    /// The source text of the operator.
    pub fn text(self) -> &'static str {
        self.syntax_kind().punctuation_text().unwrap_or("?")
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
