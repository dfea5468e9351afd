//! ember_parser: Recursive descent parser for Ember.
//!
//! Pulls tokens from the scanner on demand and builds a [`Module`],
//! reporting syntax errors through an injected
//! [`Reporter`](ember_diagnostics::Reporter) and recovering at statement
//! boundaries.

mod parser;
mod precedence;

pub use parser::{ParseFailure, Parser};

use ember_ast::node::Module;
use ember_diagnostics::CollectingReporter;

/// Parse `source` with a fresh [`CollectingReporter`] and hand both back.
pub fn parse_source(source: &str) -> (Result<Module, ParseFailure>, CollectingReporter) {
    let mut reporter = CollectingReporter::new();
    let result = Parser::new(source, &mut reporter).parse_module();
    (result, reporter)
}
