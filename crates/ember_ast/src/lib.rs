//! ember_ast: Syntax kinds and abstract syntax tree definitions for Ember.
//!
//! The token kinds produced by the scanner and the expression/statement
//! nodes built by the parser both live here, so every later stage shares a
//! single vocabulary.

pub mod node;
pub mod operator;
pub mod syntax_kind;

// Re-export key types
pub use node::*;
pub use operator::OperatorKind;
pub use syntax_kind::SyntaxKind;
