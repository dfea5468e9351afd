//! SyntaxKind enum - every token kind the Ember scanner can produce.

use serde::Serialize;

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum SyntaxKind {
    // ========================================================================
    // Single-character punctuation
    // ========================================================================
    OpenParenToken = 0,
    CloseParenToken = 1,
    OpenBraceToken = 2,
    CloseBraceToken = 3,
    CommaToken = 4,
    DotToken = 5,
    MinusToken = 6,
    PlusToken = 7,
    SemicolonToken = 8,
    SlashToken = 9,
    AsteriskToken = 10,

    // ========================================================================
    // One or two character operators
    // ========================================================================
    ExclamationToken = 11,
    ExclamationEqualsToken = 12,
    EqualsToken = 13,
    EqualsEqualsToken = 14,
    GreaterThanToken = 15,
    GreaterThanEqualsToken = 16,
    LessThanToken = 17,
    LessThanEqualsToken = 18,

    // ========================================================================
    // Literals
    // ========================================================================
    Identifier = 19,
    StringLiteral = 20,
    NumericLiteral = 21,

    // ========================================================================
    // Keywords
    // ========================================================================
    ClassKeyword = 22,
    ElseKeyword = 23,
    FalseKeyword = 24,
    FnKeyword = 25,
    ForKeyword = 26,
    IfKeyword = 27,
    NullKeyword = 28,
    PrintKeyword = 29,
    ReturnKeyword = 30,
    SuperKeyword = 31,
    ThisKeyword = 32,
    TrueKeyword = 33,
    VarKeyword = 34,
    WhileKeyword = 35,

    // ========================================================================
    // Scanner signals
    // ========================================================================
    /// A scanning failure; the token's lexeme holds the message.
    ErrorToken = 36,
    EndOfInputToken = 37,
}

impl SyntaxKind {
    /// Whether this kind represents a keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        let v = self as u8;
        v >= SyntaxKind::ClassKeyword as u8 && v <= SyntaxKind::WhileKeyword as u8
    }

    /// Keywords that open a statement; recovery stops in front of them.
    pub fn starts_statement(self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassKeyword
                | SyntaxKind::FnKeyword
                | SyntaxKind::VarKeyword
                | SyntaxKind::ForKeyword
                | SyntaxKind::IfKeyword
                | SyntaxKind::WhileKeyword
                | SyntaxKind::PrintKeyword
                | SyntaxKind::ReturnKeyword
        )
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::ClassKeyword => Some("class"),
            SyntaxKind::ElseKeyword => Some("else"),
            SyntaxKind::FalseKeyword => Some("false"),
            SyntaxKind::FnKeyword => Some("fn"),
            SyntaxKind::ForKeyword => Some("for"),
            SyntaxKind::IfKeyword => Some("if"),
            SyntaxKind::NullKeyword => Some("null"),
            SyntaxKind::PrintKeyword => Some("print"),
            SyntaxKind::ReturnKeyword => Some("return"),
            SyntaxKind::SuperKeyword => Some("super"),
            SyntaxKind::ThisKeyword => Some("this"),
            SyntaxKind::TrueKeyword => Some("true"),
            SyntaxKind::VarKeyword => Some("var"),
            SyntaxKind::WhileKeyword => Some("while"),
            _ => None,
        }
    }

    /// Look up a keyword SyntaxKind from text.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        match text {
            "class" => Some(SyntaxKind::ClassKeyword),
            "else" => Some(SyntaxKind::ElseKeyword),
            "false" => Some(SyntaxKind::FalseKeyword),
            "fn" => Some(SyntaxKind::FnKeyword),
            "for" => Some(SyntaxKind::ForKeyword),
            "if" => Some(SyntaxKind::IfKeyword),
            "null" => Some(SyntaxKind::NullKeyword),
            "print" => Some(SyntaxKind::PrintKeyword),
            "return" => Some(SyntaxKind::ReturnKeyword),
            "super" => Some(SyntaxKind::SuperKeyword),
            "this" => Some(SyntaxKind::ThisKeyword),
            "true" => Some(SyntaxKind::TrueKeyword),
            "var" => Some(SyntaxKind::VarKeyword),
            "while" => Some(SyntaxKind::WhileKeyword),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::DotToken => Some("."),
            SyntaxKind::MinusToken => Some("-"),
            SyntaxKind::PlusToken => Some("+"),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::SlashToken => Some("/"),
            SyntaxKind::AsteriskToken => Some("*"),
            SyntaxKind::ExclamationToken => Some("!"),
            SyntaxKind::ExclamationEqualsToken => Some("!="),
            SyntaxKind::EqualsToken => Some("="),
            SyntaxKind::EqualsEqualsToken => Some("=="),
            SyntaxKind::GreaterThanToken => Some(">"),
            SyntaxKind::GreaterThanEqualsToken => Some(">="),
            SyntaxKind::LessThanToken => Some("<"),
            SyntaxKind::LessThanEqualsToken => Some("<="),
            _ => None,
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_round_trips() {
        for text in [
            "class", "else", "false", "fn", "for", "if", "null", "print", "return", "super",
            "this", "true", "var", "while",
        ] {
            let kind = SyntaxKind::from_keyword(text).unwrap();
            assert!(kind.is_keyword());
            assert_eq!(kind.keyword_text(), Some(text));
        }
        assert_eq!(SyntaxKind::from_keyword("and"), None);
        assert_eq!(SyntaxKind::from_keyword("Print"), None);
    }

    #[test]
    fn test_classification() {
        assert!(!SyntaxKind::ErrorToken.is_keyword());
        assert!(SyntaxKind::PrintKeyword.starts_statement());
        assert!(!SyntaxKind::ElseKeyword.starts_statement());
    }
}
