//! Operator precedence for binary operators.

use ember_ast::syntax_kind::SyntaxKind;

/// Binary precedence levels, from lowest to highest binding. Every level is
/// left-associative; unary operators bind tighter than all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    Equality = 0,
    Comparison = 1,
    Term = 2,
    Factor = 3,
}

impl OperatorPrecedence {
    /// The loosest-binding level; where expression parsing starts.
    pub const LOWEST: OperatorPrecedence = OperatorPrecedence::Equality;

    /// Operator tokens accepted at this level.
    pub fn operators(self) -> &'static [SyntaxKind] {
        match self {
            OperatorPrecedence::Equality => &[
                SyntaxKind::ExclamationEqualsToken,
                SyntaxKind::EqualsEqualsToken,
            ],
            OperatorPrecedence::Comparison => &[
                SyntaxKind::GreaterThanToken,
                SyntaxKind::GreaterThanEqualsToken,
                SyntaxKind::LessThanToken,
                SyntaxKind::LessThanEqualsToken,
            ],
            OperatorPrecedence::Term => &[SyntaxKind::MinusToken, SyntaxKind::PlusToken],
            OperatorPrecedence::Factor => &[SyntaxKind::SlashToken, SyntaxKind::AsteriskToken],
        }
    }

    /// The next tighter binary level, or `None` when operands are unary
    /// expressions.
    pub fn tighter(self) -> Option<OperatorPrecedence> {
        match self {
            OperatorPrecedence::Equality => Some(OperatorPrecedence::Comparison),
            OperatorPrecedence::Comparison => Some(OperatorPrecedence::Term),
            OperatorPrecedence::Term => Some(OperatorPrecedence::Factor),
            OperatorPrecedence::Factor => None,
        }
    }
}

/// Prefix operator tokens.
pub const UNARY_OPERATORS: &[SyntaxKind] = &[SyntaxKind::ExclamationToken, SyntaxKind::MinusToken];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(OperatorPrecedence::Equality < OperatorPrecedence::Comparison);
        assert!(OperatorPrecedence::Term < OperatorPrecedence::Factor);
        assert_eq!(OperatorPrecedence::Factor.tighter(), None);
    }

    #[test]
    fn test_every_binary_operator_has_one_level() {
        let mut seen = Vec::new();
        let mut level = Some(OperatorPrecedence::LOWEST);
        while let Some(prec) = level {
            for kind in prec.operators() {
                assert!(!seen.contains(kind), "{} listed twice", kind);
                seen.push(*kind);
            }
            level = prec.tighter();
        }
        assert_eq!(seen.len(), 10);
        assert!(!seen.contains(&SyntaxKind::ExclamationToken));
    }
}
