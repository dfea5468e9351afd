//! AST node definitions for Ember.
//!
//! Both node families are closed sum types: consumers match on them instead
//! of implementing a visitor. Children are boxed and exclusively owned by
//! their parent, and a [`Module`] owns its statements in source order.

use serde::Serialize;

use crate::operator::OperatorKind;

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Expression {
    /// A binary operation such as `a + b`.
    Infix {
        left: Box<Expression>,
        operator: OperatorKind,
        right: Box<Expression>,
    },
    /// A unary operation such as `-a` or `!a`.
    Prefix {
        operator: OperatorKind,
        right: Box<Expression>,
    },
    BoolLiteral(bool),
    /// `null`. Also produced as the placeholder for an expression that
    /// failed to parse, so it is only meaningful when parsing succeeded.
    NullLiteral,
    NumberLiteral(f64),
    /// The text between the quotes, with no escape processing.
    StringLiteral(String),
}

impl Expression {
    pub fn infix(left: Expression, operator: OperatorKind, right: Expression) -> Self {
        Expression::Infix {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn prefix(operator: OperatorKind, right: Expression) -> Self {
        Expression::Prefix {
            operator,
            right: Box::new(right),
        }
    }

    pub fn number(value: f64) -> Self {
        Expression::NumberLiteral(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral(value.into())
    }

    /// Number of nodes in this tree, including itself.
    pub fn node_count(&self) -> usize {
        match self {
            Expression::Infix { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Expression::Prefix { right, .. } => 1 + right.node_count(),
            _ => 1,
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "expression", rename_all = "snake_case")]
pub enum Statement {
    /// `print <expression>;`
    Print(Expression),
    /// `<expression>;`
    Expression(Expression),
}

impl Statement {
    pub fn expression(&self) -> &Expression {
        match self {
            Statement::Print(expr) | Statement::Expression(expr) => expr,
        }
    }
}

// ============================================================================
// Module
// ============================================================================

/// A parsed source unit: its statements in source order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Module {
    pub statements: Vec<Statement>,
}

impl Module {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count() {
        let expr = Expression::infix(
            Expression::number(1.0),
            OperatorKind::Plus,
            Expression::prefix(OperatorKind::Minus, Expression::number(2.0)),
        );
        assert_eq!(expr.node_count(), 4);
    }

    #[test]
    fn test_statement_expression_accessor() {
        let stmt = Statement::Print(Expression::BoolLiteral(true));
        assert_eq!(stmt.expression(), &Expression::BoolLiteral(true));
    }

    #[test]
    fn test_serialize_shape() {
        let module = Module::new(vec![Statement::Print(Expression::infix(
            Expression::number(1.0),
            OperatorKind::Plus,
            Expression::string("hi"),
        ))]);
        let json = serde_json::to_value(&module).unwrap();
        assert_eq!(json["statements"][0]["type"], "print");
        let expr = &json["statements"][0]["expression"];
        assert_eq!(expr["type"], "infix");
        assert_eq!(expr["value"]["operator"], "plus");
        assert_eq!(expr["value"]["right"]["type"], "string_literal");
        assert_eq!(expr["value"]["right"]["value"], "hi");
    }
}
