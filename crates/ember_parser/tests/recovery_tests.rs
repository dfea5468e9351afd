//! Error reporting and panic-mode recovery tests.

use ember_ast::node::*;
use ember_ast::syntax_kind::SyntaxKind;
use ember_diagnostics::{CollectingReporter, Issue, PrettyReporter, Reporter};
use ember_parser::{parse_source, ParseFailure, Parser};
use ember_printer::print_statement;

/// Helper: parse source text that must fail, returning the failure and the
/// reported issues.
fn parse_err(source: &str) -> (ParseFailure, Vec<Issue>) {
    let (result, reporter) = parse_source(source);
    match result {
        Ok(module) => panic!("expected errors for {:?}, got {:?}", source, module),
        Err(failure) => (failure, reporter.into_issues()),
    }
}

fn messages(issues: &[Issue]) -> Vec<&str> {
    issues.iter().map(|i| i.message.as_str()).collect()
}

#[test]
fn test_recovers_after_missing_operand() {
    let (failure, issues) = parse_err("1 +; print 2;");
    assert_eq!(failure.error_count, 1);
    assert_eq!(messages(&issues), vec!["Expected expression."]);
    assert_eq!(issues[0].token.kind, SyntaxKind::SemicolonToken);

    let module = failure.module;
    assert_eq!(module.len(), 2);
    assert_eq!(module.statements[1], Statement::Print(Expression::number(2.0)));
    // The failed operand is a placeholder.
    assert_eq!(print_statement(&module.statements[0]), "(expression (plus 1 null))");
}

#[test]
fn test_missing_semicolon_after_expression() {
    let (failure, issues) = parse_err("1 2;");
    assert_eq!(messages(&issues), vec!["Expected ';' after expression."]);
    assert_eq!(issues[0].token.lexeme, "2");
    assert_eq!(failure.module.len(), 1);
}

#[test]
fn test_missing_semicolon_at_end_of_input() {
    let (_, issues) = parse_err("print 1");
    assert_eq!(messages(&issues), vec!["Expected ';' after value."]);
    assert!(issues[0].token.is_end_of_input());
    assert_eq!(issues[0].to_string(), "[line 1] Error at end of file: Expected ';' after value.");
}

#[test]
fn test_reports_one_error_per_statement() {
    let (failure, issues) = parse_err("1 +; 2 *; print 3;");
    assert_eq!(failure.error_count, 2);
    assert_eq!(issues.len(), 2);
    assert_eq!(failure.module.len(), 3);
}

#[test]
fn test_panic_mode_suppresses_cascades() {
    // Without suppression the stray tokens would each produce an error.
    let (failure, issues) = parse_err("1 2 3 4 5;");
    assert_eq!(failure.error_count, 1);
    assert_eq!(issues.len(), 1);
}

#[test]
fn test_synchronize_stops_at_statement_keyword() {
    let (failure, issues) = parse_err("1 2 3 print 4;");
    assert_eq!(issues.len(), 1);
    assert_eq!(failure.module.len(), 2);
    assert_eq!(
        failure.module.statements[1],
        Statement::Print(Expression::number(4.0))
    );
}

#[test]
fn test_unparsed_keywords_terminate() {
    let (failure, issues) = parse_err("var x = 1;");
    assert_eq!(messages(&issues), vec!["Expected expression."]);
    assert_eq!(issues[0].token.kind, SyntaxKind::VarKeyword);
    assert_eq!(failure.module.len(), 1);

    let (_, issues) = parse_err("print print print");
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].token.kind, SyntaxKind::PrintKeyword);
    assert!(issues[1].token.is_end_of_input());
}

#[test]
fn test_diagnostics_in_source_order() {
    let (_, issues) = parse_err("1 +;\nprint 2;\n3 *;\n- ;");
    let lines: Vec<u32> = issues.iter().map(|i| i.token.line).collect();
    assert_eq!(lines, vec![1, 3, 4]);
}

// ============================================================================
// Scanner errors
// ============================================================================

#[test]
fn test_scanner_error_is_reported_and_skipped() {
    let (failure, issues) = parse_err("1 @ + 2;");
    assert_eq!(messages(&issues), vec!["Unexpected character"]);
    assert_eq!(issues[0].code, 1001);
    assert!(issues[0].token.is_error());
    assert_eq!(issues[0].token.start, 2);
    // Parsing continued past the bad character.
    assert_eq!(print_statement(&failure.module.statements[0]), "(expression (plus 1 2))");
}

#[test]
fn test_unterminated_string_is_one_error() {
    let (failure, issues) = parse_err("print \"abc");
    assert_eq!(messages(&issues), vec!["Unterminated string"]);
    assert_eq!(issues[0].to_string(), "[line 1] Error: Unterminated string");
    assert_eq!(failure.module.len(), 1);
}

// ============================================================================
// Reporter integration
// ============================================================================

#[test]
fn test_pretty_reporter_output() {
    let mut reporter = PrettyReporter::new(Vec::new());
    let result = Parser::new("1 +; print 2;\nprint 3", &mut reporter).parse_module();
    let failure = result.unwrap_err();
    assert_eq!(failure.error_count, 2);
    assert_eq!(failure.to_string(), "parsing failed with 2 error(s)");

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(
        out,
        "[line 1] Error at ';': Expected expression.\n\
         [line 2] Error at end of file: Expected ';' after value.\n"
    );
}

#[test]
fn test_error_state_comes_from_reporter() {
    // A reporter that already holds an error makes any parse fail.
    let mut reporter = CollectingReporter::new();
    reporter.error(
        "earlier",
        &ember_scanner::Token::new(SyntaxKind::Identifier, "x", 0, 1, 1),
    );
    let result = Parser::new("print 1;", &mut reporter).parse_module();
    assert!(result.is_err());

    // Warnings alone do not.
    let mut reporter = CollectingReporter::new();
    reporter.warn(
        "just a warning",
        &ember_scanner::Token::new(SyntaxKind::Identifier, "x", 0, 1, 1),
    );
    let result = Parser::new("print 1;", &mut reporter).parse_module();
    assert_eq!(result.unwrap().len(), 1);
}
