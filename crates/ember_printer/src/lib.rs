//! ember_printer: AST to text output.
//!
//! Renders expressions and statements as fully parenthesized prefix forms,
//! e.g. `1 + 2 * 3` becomes `(plus 1 (star 2 3))`. Used by tests and by
//! `ember parse` for manual inspection.

use ember_ast::node::*;

/// The printer converts AST nodes to text.
///
/// Literals print as themselves (strings in double quotes, numbers in their
/// shortest decimal form), operators by their name, and statements as
/// `(print ...)` or `(expression ...)`.
pub struct AstPrinter {
    output: String,
    new_line: &'static str,
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl AstPrinter {
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(256),
            new_line: "\n",
        }
    }

    /// Render one expression tree.
    pub fn print_expression(mut self, expression: &Expression) -> String {
        self.emit_expression(expression);
        self.output
    }

    /// Render one statement.
    pub fn print_statement(mut self, statement: &Statement) -> String {
        self.emit_statement(statement);
        self.output
    }

    /// Render every statement of a module, one per line.
    pub fn print_module(mut self, module: &Module) -> String {
        for statement in &module.statements {
            self.emit_statement(statement);
            self.output.push_str(self.new_line);
        }
        self.output
    }

    // ========================================================================
    // Emit helpers
    // ========================================================================

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn emit_statement(&mut self, statement: &Statement) {
        let head = match statement {
            Statement::Print(_) => "print",
            Statement::Expression(_) => "expression",
        };
        self.write("(");
        self.write(head);
        self.write(" ");
        self.emit_expression(statement.expression());
        self.write(")");
    }

    fn emit_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Infix {
                left,
                operator,
                right,
            } => {
                self.write("(");
                self.write(operator.name());
                self.write(" ");
                self.emit_expression(left);
                self.write(" ");
                self.emit_expression(right);
                self.write(")");
            }
            Expression::Prefix { operator, right } => {
                self.write("(");
                self.write(operator.name());
                self.write(" ");
                self.emit_expression(right);
                self.write(")");
            }
            Expression::BoolLiteral(value) => {
                self.write(if *value { "true" } else { "false" });
            }
            Expression::NullLiteral => self.write("null"),
            Expression::NumberLiteral(value) => {
                let text = value.to_string();
                self.write(&text);
            }
            Expression::StringLiteral(value) => {
                self.write("\"");
                self.write(value);
                self.write("\"");
            }
        }
    }
}

/// Shorthand for `AstPrinter::new().print_expression(expression)`.
pub fn print_expression(expression: &Expression) -> String {
    AstPrinter::new().print_expression(expression)
}

/// Shorthand for `AstPrinter::new().print_statement(statement)`.
pub fn print_statement(statement: &Statement) -> String {
    AstPrinter::new().print_statement(statement)
}
