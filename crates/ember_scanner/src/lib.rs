//! ember_scanner: Lexer/tokenizer for Ember source code.
//!
//! The scanner is pull-based: every call to [`Scanner::scan_token`] skips
//! whitespace and comments and returns exactly one [`Token`]. Scanning never
//! fails; problems come back as `ErrorToken`s whose lexeme is the message.

mod char_codes;
mod debug;
mod scanner;
mod token;

pub use debug::dump_tokens;
pub use scanner::{tokenize, Scanner, UNEXPECTED_CHARACTER, UNTERMINATED_STRING};
pub use token::Token;
