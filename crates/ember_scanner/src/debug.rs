//! Human-readable token listing, used by `ember tokens`.

use std::fmt::Write;

use crate::scanner::tokenize;

/// Render every token of `source`, one per line.
///
/// The first token on a source line is prefixed with the line number; the
/// following tokens on that line get a `|` marker instead:
///
/// ```text
///    1 PrintKeyword 'print'
///    | NumericLiteral '1'
///    | SemicolonToken ';'
///    2 EndOfInputToken ''
/// ```
pub fn dump_tokens(source: &str) -> String {
    let mut out = String::new();
    let mut line = 0;

    for token in tokenize(source) {
        if token.line != line {
            line = token.line;
            let _ = write!(out, "{:>4} ", line);
        } else {
            out.push_str("   | ");
        }
        let _ = writeln!(out, "{} '{}'", token.kind, token.lexeme);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_marks_repeated_lines() {
        let dump = dump_tokens("print 1;\n2");
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(
            lines,
            vec![
                "   1 PrintKeyword 'print'",
                "   | NumericLiteral '1'",
                "   | SemicolonToken ';'",
                "   2 NumericLiteral '2'",
                "   | EndOfInputToken ''",
            ]
        );
    }

    #[test]
    fn test_dump_empty_source() {
        assert_eq!(dump_tokens(""), "   1 EndOfInputToken ''\n");
    }
}
