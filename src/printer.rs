//! Debug printer for the AST.
//!
//! Renders expressions and statements in a fully parenthesized prefix form,
//! e.g. `(* (- 123) (group 45.67))`. The output is canonical: two trees print
//! the same string exactly when they have the same shape, which makes it the
//! form parser tests compare against. The evaluator never uses it.

use crate::{
    ast::{Expr, FunctionDecl, LiteralValue, Stmt},
    util::{num::format_number, stack::ensure_sufficient_stack},
};

/// Prints one expression.
///
/// ## Example
/// ```
/// use treelox::{
///     ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
///     printer::print_expr,
/// };
///
/// let expr = Expr::Binary { left:  Box::new(Expr::Unary { op:    UnaryOperator::Negate,
///                                                         right: Box::new(Expr::Literal { value: 123.0.into() }),
///                                                         line:  1, }),
///                           op:    BinaryOperator::Mul,
///                           right: Box::new(Expr::Grouping { expression: Box::new(Expr::Literal { value: 45.67.into() }) }),
///                           line:  1, };
///
/// assert_eq!(print_expr(&expr), "(* (- 123) (group 45.67))");
/// ```
#[must_use]
pub fn print_expr(expr: &Expr) -> String {
    ensure_sufficient_stack(|| print_expr_inner(expr))
}

fn print_expr_inner(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value } => print_literal(value),
        Expr::Variable { name, .. } => name.clone(),
        Expr::Assign { name, value, .. } => parenthesize("=", &[name.clone(), print_expr(value)]),
        Expr::Unary { op, right, .. } => parenthesize(&op.to_string(), &[print_expr(right)]),
        Expr::Binary { left, op, right, .. } => {
            parenthesize(&op.to_string(), &[print_expr(left), print_expr(right)])
        },
        Expr::Logical { left, op, right, .. } => {
            parenthesize(&op.to_string(), &[print_expr(left), print_expr(right)])
        },
        Expr::Grouping { expression } => parenthesize("group", &[print_expr(expression)]),
        Expr::Call { callee, arguments, .. } => {
            let parts: Vec<String> = std::iter::once(print_expr(callee)).chain(arguments.iter()
                                                                                        .map(print_expr))
                                                                        .collect();
            parenthesize("call", &parts)
        },
    }
}

/// Prints one statement, including nested statements.
#[must_use]
pub fn print_stmt(stmt: &Stmt) -> String {
    ensure_sufficient_stack(|| print_stmt_inner(stmt))
}

fn print_stmt_inner(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expression { expr } => parenthesize(";", &[print_expr(expr)]),
        Stmt::Print { expr } => parenthesize("print", &[print_expr(expr)]),
        Stmt::Var { name,
                    initializer, .. } => {
            let mut parts = vec![name.clone()];
            parts.extend(initializer.iter().map(print_expr));
            parenthesize("var", &parts)
        },
        Stmt::Block { statements } => {
            parenthesize("block", &statements.iter().map(print_stmt).collect::<Vec<_>>())
        },
        Stmt::If { condition,
                   then_branch,
                   else_branch, } => {
            let mut parts = vec![print_expr(condition), print_stmt(then_branch)];
            parts.extend(else_branch.iter().map(|s| print_stmt(s)));
            parenthesize("if", &parts)
        },
        Stmt::While { condition, body } => {
            parenthesize("while", &[print_expr(condition), print_stmt(body)])
        },
        Stmt::Function(decl) => print_function(decl),
    }
}

fn print_function(decl: &FunctionDecl) -> String {
    let mut parts = vec![decl.name.clone(), format!("({})", decl.params.join(" "))];
    parts.extend(decl.body.iter().map(print_stmt));
    parenthesize("fun", &parts)
}

fn print_literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Nil => "nil".to_string(),
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Number(n) => format_number(*n),
        LiteralValue::String(s) => s.clone(),
    }
}

fn parenthesize(name: &str, parts: &[String]) -> String {
    let mut out = format!("({name}");
    for part in parts {
        out.push(' ');
        out.push_str(part);
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::LogicalOperator;

    fn literal(value: impl Into<LiteralValue>) -> Box<Expr> {
        Box::new(Expr::Literal { value: value.into() })
    }

    fn variable(name: &str) -> Box<Expr> {
        Box::new(Expr::Variable { name: name.to_string(),
                                  line: 1, })
    }

    #[test]
    fn prints_logical_and_call_expressions() {
        let expr = Expr::Logical { left:  variable("a"),
                                   op:    LogicalOperator::Or,
                                   right: Box::new(Expr::Call { callee:    variable("f"),
                                                                arguments: vec![*literal(1.0),
                                                                                *literal("s")],
                                                                line:      1, }),
                                   line:  1, };

        assert_eq!(print_expr(&expr), "(or a (call f 1 s))");
    }

    #[test]
    fn prints_literals_like_values() {
        assert_eq!(print_expr(&literal(LiteralValue::Nil)), "nil");
        assert_eq!(print_expr(&literal(false)), "false");
        assert_eq!(print_expr(&literal(2.5)), "2.5");
    }

    #[test]
    fn prints_nested_statements() {
        let stmt = Stmt::If { condition:   *variable("ok"),
                              then_branch: Box::new(Stmt::Print { expr: *literal(1.0) }),
                              else_branch: Some(Box::new(Stmt::Block { statements: vec![
                                  Stmt::Var { name:        "x".to_string(),
                                              initializer: None,
                                              line:        1, },
                              ] })), };

        assert_eq!(print_stmt(&stmt), "(if ok (print 1) (block (var x)))");
    }

    #[test]
    fn prints_function_declarations() {
        let decl = FunctionDecl { name:   "add".to_string(),
                                  params: vec!["a".to_string(), "b".to_string()],
                                  body:   vec![Stmt::Expression { expr: *variable("a") }],
                                  line:   1, };

        assert_eq!(print_stmt(&Stmt::Function(Rc::new(decl))), "(fun add (a b) (; a))");
    }
}
