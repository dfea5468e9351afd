//! The Ember parser implementation.
//!
//! A recursive descent parser that pulls tokens from the scanner one at a
//! time and builds a [`Module`]. Syntax errors put the parser into panic
//! mode: the first error is reported, later ones are suppressed, and the
//! module loop resynchronizes at the next statement boundary so that one
//! pass reports as many independent errors as possible.

use ember_ast::node::*;
use ember_ast::operator::OperatorKind;
use ember_ast::syntax_kind::SyntaxKind;
use ember_diagnostics::messages;
use ember_diagnostics::Reporter;
use ember_scanner::{Scanner, Token};
use log::debug;

use crate::precedence::{OperatorPrecedence, UNARY_OPERATORS};

/// Maximum prefix-operator nesting before the parser gives up on an
/// expression. Binary levels loop instead of recursing and need no limit.
const MAX_RECURSION_DEPTH: u32 = 200;

/// Returned by [`Parser::parse_module`] when the reporter recorded errors.
///
/// The module is still the parser's best effort, but expressions that failed
/// to parse are `NullLiteral` placeholders and must not be trusted.
#[derive(Debug, thiserror::Error)]
#[error("parsing failed with {error_count} error(s)")]
pub struct ParseFailure {
    pub error_count: usize,
    pub module: Module,
}

/// The parser produces a Module AST from Ember source text.
pub struct Parser<'r> {
    scanner: Scanner,
    reporter: &'r mut dyn Reporter,
    /// The most recently consumed token.
    previous: Token,
    /// The lookahead token, not yet consumed.
    current: Token,
    /// Set by the first error since the last synchronization.
    panic_mode: bool,
    /// Tracks prefix-operator nesting to prevent stack overflow.
    recursion_depth: u32,
}

impl<'r> Parser<'r> {
    pub fn new(source_text: &str, reporter: &'r mut dyn Reporter) -> Self {
        // Both cursors start on a synthetic end-of-input token until the
        // first `consume` primes them.
        let placeholder = Token::new(SyntaxKind::EndOfInputToken, "", 0, 0, 1);
        Self {
            scanner: Scanner::new(source_text),
            reporter,
            previous: placeholder.clone(),
            current: placeholder,
            panic_mode: false,
            recursion_depth: 0,
        }
    }

    /// Parse the whole source.
    ///
    /// Always runs to the end of input. Fails when the reporter holds any
    /// error once parsing is done.
    pub fn parse_module(mut self) -> Result<Module, ParseFailure> {
        debug!("parsing module ({} chars)", self.scanner.text_len());

        self.consume();

        let mut statements = Vec::new();
        while !self.current.is_end_of_input() {
            statements.push(self.parse_declaration());

            if self.panic_mode {
                self.synchronize();
            }
        }

        self.consume_expected(
            SyntaxKind::EndOfInputToken,
            messages::EXPECTED_END_OF_INPUT.message,
        );

        let module = Module::new(statements);
        debug!(
            "parsed {} statement(s), {} error(s)",
            module.len(),
            self.reporter.error_count()
        );

        if self.reporter.had_error() {
            Err(ParseFailure {
                error_count: self.reporter.error_count(),
                module,
            })
        } else {
            Ok(module)
        }
    }

    // ========================================================================
    // Token management
    // ========================================================================

    /// Advance to the next token. Scanner error tokens are reported and
    /// skipped, so `current` is never an `ErrorToken`.
    fn consume(&mut self) -> &Token {
        let next = loop {
            let token = self.scanner.scan_token();
            if !token.is_error() {
                break token;
            }
            let message = token.lexeme.clone();
            self.error(&message, Some(token));
        };
        self.previous = std::mem::replace(&mut self.current, next);
        &self.previous
    }

    /// Advance, then check that the consumed token has kind `kind`. A
    /// mismatch is reported against that token, which stays consumed.
    fn consume_expected(&mut self, kind: SyntaxKind, message: &str) -> &Token {
        self.consume();
        if self.previous.kind != kind {
            self.error(message, Some(self.previous.clone()));
        }
        &self.previous
    }

    /// Consume and return the current token if its kind is one of `kinds`.
    fn match_kinds(&mut self, kinds: &[SyntaxKind]) -> Option<&Token> {
        if kinds.contains(&self.current.kind) {
            Some(self.consume())
        } else {
            None
        }
    }

    /// Consume an operator token from `kinds`, if present.
    fn match_operator(&mut self, kinds: &[SyntaxKind]) -> Option<OperatorKind> {
        self.match_kinds(kinds)
            .and_then(|token| OperatorKind::from_syntax_kind(token.kind))
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    /// Report `message` against `token`, or the current token when none is
    /// given, and enter panic mode. Does nothing while already panicking.
    fn error(&mut self, message: &str, token: Option<Token>) {
        if self.panic_mode {
            return;
        }
        let token = token.as_ref().unwrap_or(&self.current);
        self.reporter.error(message, token);
        self.panic_mode = true;
    }

    /// Leave panic mode and skip to a statement boundary: just past a `;`,
    /// in front of a statement keyword, or at end of input.
    fn synchronize(&mut self) {
        self.panic_mode = false;
        debug!("synchronizing at line {}", self.current.line);

        while !self.current.is_end_of_input() {
            if self.previous.kind == SyntaxKind::SemicolonToken {
                return;
            }
            if self.current.kind.starts_statement() {
                return;
            }
            self.consume();
        }
    }

    // ========================================================================
    // Statement parsing
    // ========================================================================

    fn parse_declaration(&mut self) -> Statement {
        // Only statements so far; declarations will branch off here.
        self.parse_statement()
    }

    fn parse_statement(&mut self) -> Statement {
        if self.match_kinds(&[SyntaxKind::PrintKeyword]).is_some() {
            self.parse_print_statement()
        } else {
            self.parse_expression_statement()
        }
    }

    fn parse_print_statement(&mut self) -> Statement {
        let expression = self.parse_expression();
        self.consume_expected(
            SyntaxKind::SemicolonToken,
            messages::EXPECTED_SEMICOLON_AFTER_VALUE.message,
        );
        Statement::Print(expression)
    }

    fn parse_expression_statement(&mut self) -> Statement {
        let expression = self.parse_expression();
        self.consume_expected(
            SyntaxKind::SemicolonToken,
            messages::EXPECTED_SEMICOLON_AFTER_EXPRESSION.message,
        );
        Statement::Expression(expression)
    }

    // ========================================================================
    // Expression parsing
    // ========================================================================

    fn parse_expression(&mut self) -> Expression {
        self.parse_binary_expression(OperatorPrecedence::LOWEST)
    }

    /// Parse a left-associative chain of operators at `precedence`, with
    /// operands parsed at the next tighter level.
    fn parse_binary_expression(&mut self, precedence: OperatorPrecedence) -> Expression {
        let mut left = self.parse_operand(precedence);
        while let Some(operator) = self.match_operator(precedence.operators()) {
            let right = self.parse_operand(precedence);
            left = Expression::infix(left, operator, right);
        }
        left
    }

    fn parse_operand(&mut self, precedence: OperatorPrecedence) -> Expression {
        match precedence.tighter() {
            Some(tighter) => self.parse_binary_expression(tighter),
            None => self.parse_unary_expression(),
        }
    }

    fn parse_unary_expression(&mut self) -> Expression {
        let Some(operator) = self.match_operator(UNARY_OPERATORS) else {
            return self.parse_primary_expression();
        };

        if self.recursion_depth >= MAX_RECURSION_DEPTH {
            self.error(messages::EXPRESSION_NESTS_TOO_DEEPLY.message, None);
            return Expression::NullLiteral;
        }
        self.recursion_depth += 1;
        let right = self.parse_unary_expression();
        self.recursion_depth -= 1;

        Expression::prefix(operator, right)
    }

    fn parse_primary_expression(&mut self) -> Expression {
        match self.current.kind {
            SyntaxKind::FalseKeyword => {
                self.consume();
                Expression::BoolLiteral(false)
            }
            SyntaxKind::TrueKeyword => {
                self.consume();
                Expression::BoolLiteral(true)
            }
            SyntaxKind::NullKeyword => {
                self.consume();
                Expression::NullLiteral
            }
            SyntaxKind::NumericLiteral => {
                self.consume();
                self.parse_number_value()
            }
            SyntaxKind::StringLiteral => {
                let token = self.consume();
                let text = &token.lexeme;
                let value = text
                    .strip_prefix('"')
                    .and_then(|t| t.strip_suffix('"'))
                    .unwrap_or(text);
                Expression::string(value)
            }
            _ => {
                self.error(messages::EXPECTED_EXPRESSION.message, None);
                Expression::NullLiteral
            }
        }
    }

    /// Convert the just-consumed numeric literal.
    fn parse_number_value(&mut self) -> Expression {
        match self.previous.lexeme.parse::<f64>() {
            Ok(value) => Expression::number(value),
            Err(_) => {
                self.error(
                    messages::INVALID_NUMBER_LITERAL.message,
                    Some(self.previous.clone()),
                );
                Expression::NullLiteral
            }
        }
    }
}
