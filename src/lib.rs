//! # treelox
//!
//! treelox is a tree-walking interpreter for Lox, a small dynamically typed
//! scripting language with C-like syntax. Source text is scanned into tokens,
//! parsed into a syntax tree and executed directly.
//!
//! ```
//! use treelox::{interpreter::evaluator::core::Interpreter, report::ErrorReport, run};
//!
//! let mut interpreter = Interpreter::with_output(Vec::new());
//! let mut report = ErrorReport::silent();
//!
//! run("var greeting = \"hello\"; print greeting + \" world\";",
//!     &mut interpreter,
//!     &mut report).unwrap();
//!
//! assert_eq!(interpreter.output(), b"hello world\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::{
    ast::Stmt,
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse},
    report::{ErrorReport, Reporter},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator and the debug printer.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to the nodes that can fail at runtime.
/// - Keeps literal values apart from runtime values.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating code, with the line they occurred on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Separates user-facing runtime errors from output failures.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, scopes and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment
///   and value types.
/// - Provides entry points for scanning, parsing and interpreting code.
pub mod interpreter;
/// Renders syntax trees in a parenthesized prefix form.
///
/// A debugging aid for inspecting parser output; evaluation never uses it.
pub mod printer;
/// Collects and formats diagnostics.
///
/// Defines the `Reporter` interface the pipeline reports syntax and runtime
/// errors through, and `ErrorReport`, which records them and tracks whether
/// any occurred.
pub mod report;
/// Number formatting helpers.
pub mod util;

/// Scans and parses source text.
///
/// Syntax errors are reported through `reporter`; the statements that parsed
/// cleanly are returned.
pub fn parse_source(source: &str, reporter: &mut dyn Reporter) -> Vec<Stmt> {
    let tokens = scan(source, reporter);
    parse(&tokens, reporter)
}

/// Runs one piece of source text on `interpreter`.
///
/// The source is scanned and parsed first. If that reported any syntax error,
/// nothing is executed. Otherwise the statements run until they finish or a
/// runtime error stops them; runtime errors end up in `report`.
///
/// # Errors
/// Returns an error only if program output cannot be written.
///
/// # Examples
/// ```
/// use treelox::{interpreter::evaluator::core::Interpreter, report::ErrorReport, run};
///
/// let mut interpreter = Interpreter::with_output(Vec::new());
///
/// // A syntax error anywhere prevents the whole source from running.
/// let mut report = ErrorReport::silent();
/// run("print 1; print 2", &mut interpreter, &mut report).unwrap();
/// assert!(report.had_error);
/// assert!(interpreter.output().is_empty());
///
/// // A runtime error stops execution at the failing statement.
/// let mut report = ErrorReport::silent();
/// run("print 1; print -\"x\"; print 3;", &mut interpreter, &mut report).unwrap();
/// assert!(report.had_runtime_error);
/// assert_eq!(interpreter.output(), b"1\n");
/// ```
pub fn run<W: Write>(source: &str,
                     interpreter: &mut Interpreter<W>,
                     report: &mut ErrorReport)
                     -> io::Result<()> {
    let statements = parse_source(source, report);
    if report.had_error {
        return Ok(());
    }

    interpreter.interpret(&statements, report)
}
