//! The Ember scanner.
//!
//! Converts source text into tokens on demand. The scanner keeps three
//! pieces of state: the start of the token being scanned, the current
//! position, and the current line. It looks at most two characters ahead.

use crate::char_codes::*;
use crate::token::Token;
use ember_ast::syntax_kind::SyntaxKind;
use log::trace;

/// Message carried by the error token for a character no token starts with.
pub const UNEXPECTED_CHARACTER: &str = "Unexpected character";
/// Message carried by the error token for a string missing its closing quote.
pub const UNTERMINATED_STRING: &str = "Unterminated string";

/// The scanner converts Ember source text into tokens.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Start of the token being scanned.
    start: usize,
    /// Current position in the text.
    current: usize,
    /// Line of the current position, 1-based.
    line: u32,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Get the full source text length, in characters.
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Scan the next token.
    ///
    /// Once the end of the text is reached every further call returns an
    /// `EndOfInputToken`.
    pub fn scan_token(&mut self) -> Token {
        self.skip_trivia();
        self.start = self.current;

        if self.is_at_end() {
            return self.make_token(SyntaxKind::EndOfInputToken);
        }

        let ch = self.advance();

        if is_identifier_start(ch) {
            return self.scan_identifier();
        }
        if is_digit(ch) {
            return self.scan_number();
        }

        let kind = match ch {
            '(' => SyntaxKind::OpenParenToken,
            ')' => SyntaxKind::CloseParenToken,
            '{' => SyntaxKind::OpenBraceToken,
            '}' => SyntaxKind::CloseBraceToken,
            ',' => SyntaxKind::CommaToken,
            '.' => SyntaxKind::DotToken,
            '-' => SyntaxKind::MinusToken,
            '+' => SyntaxKind::PlusToken,
            ';' => SyntaxKind::SemicolonToken,
            '/' => SyntaxKind::SlashToken,
            '*' => SyntaxKind::AsteriskToken,

            '!' => self.scan_with_equals(SyntaxKind::ExclamationEqualsToken, SyntaxKind::ExclamationToken),
            '=' => self.scan_with_equals(SyntaxKind::EqualsEqualsToken, SyntaxKind::EqualsToken),
            '<' => self.scan_with_equals(SyntaxKind::LessThanEqualsToken, SyntaxKind::LessThanToken),
            '>' => self.scan_with_equals(SyntaxKind::GreaterThanEqualsToken, SyntaxKind::GreaterThanToken),

            DOUBLE_QUOTE => return self.scan_string(),

            _ => return self.make_error_token(UNEXPECTED_CHARACTER),
        };

        self.make_token(kind)
    }

    // ========================================================================
    // Token construction
    // ========================================================================

    fn make_token(&self, kind: SyntaxKind) -> Token {
        let lexeme: String = self.text[self.start..self.current].iter().collect();
        let token = Token::new(
            kind,
            lexeme,
            self.start as u32,
            (self.current - self.start) as u32,
            self.line,
        );
        trace!("scanned {} '{}' on line {}", token.kind, token.lexeme, token.line);
        token
    }

    /// The lexeme of an error token is its message; start and length still
    /// describe the offending text.
    fn make_error_token(&self, message: &str) -> Token {
        trace!("scan error '{}' on line {}", message, self.line);
        Token::new(
            SyntaxKind::ErrorToken,
            message,
            self.start as u32,
            (self.current - self.start) as u32,
            self.line,
        )
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_with_equals(&mut self, with_equals: SyntaxKind, alone: SyntaxKind) -> SyntaxKind {
        if self.match_char(EQUALS) {
            with_equals
        } else {
            alone
        }
    }

    /// Assumes the opening quote has been consumed.
    fn scan_string(&mut self) -> Token {
        while let Some(ch) = self.peek() {
            if ch == DOUBLE_QUOTE {
                break;
            }
            if ch == LINE_FEED {
                self.line += 1;
            }
            self.current += 1;
        }

        if self.is_at_end() {
            return self.make_error_token(UNTERMINATED_STRING);
        }

        // The closing quote.
        self.current += 1;
        self.make_token(SyntaxKind::StringLiteral)
    }

    /// Assumes the first digit has been consumed.
    fn scan_number(&mut self) -> Token {
        self.scan_digits();

        // A dot only belongs to the number when a digit follows it.
        if self.peek() == Some(DOT) && self.peek_next().map_or(false, is_digit) {
            self.current += 1;
            self.scan_digits();
        }

        self.make_token(SyntaxKind::NumericLiteral)
    }

    fn scan_digits(&mut self) {
        while self.peek().map_or(false, is_digit) {
            self.current += 1;
        }
    }

    /// Assumes the first character has been consumed.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().map_or(false, is_identifier_part) {
            self.current += 1;
        }

        let text: String = self.text[self.start..self.current].iter().collect();
        let kind = SyntaxKind::from_keyword(&text).unwrap_or(SyntaxKind::Identifier);
        self.make_token(kind)
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Skip whitespace, newlines and line comments.
    fn skip_trivia(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                LINE_FEED => {
                    self.line += 1;
                    self.current += 1;
                }
                SLASH if self.peek_next() == Some(SLASH) => {
                    // The newline is left for the next iteration to count.
                    while self.peek().map_or(false, |c| c != LINE_FEED) {
                        self.current += 1;
                    }
                }
                c if is_white_space_single_line(c) => {
                    self.current += 1;
                }
                _ => return,
            }
        }
    }

    /// Look at the character at the current position without advancing.
    #[inline]
    fn peek(&self) -> Option<char> {
        self.text.get(self.current).copied()
    }

    /// Look one character past the current position.
    #[inline]
    fn peek_next(&self) -> Option<char> {
        self.text.get(self.current + 1).copied()
    }

    /// Consume the current character and return it. Callers check
    /// `is_at_end` first.
    #[inline]
    fn advance(&mut self) -> char {
        let ch = self.text[self.current];
        self.current += 1;
        ch
    }

    /// Consume the current character if it is `expected`.
    #[inline]
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.text.len()
    }
}

/// Scan `source` to completion. The last token is always the single
/// `EndOfInputToken`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan_token();
        let done = token.is_end_of_input();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
