/// The environment module implements lexical scopes.
///
/// An environment maps names to values and links to the scope it is nested
/// in. Lookups and assignments walk that chain outward; definitions only ever
/// touch the innermost scope.
///
/// # Responsibilities
/// - Defines, reads and assigns variable bindings.
/// - Reports undefined variables with the line of the failed access.
/// - Keeps closure scopes alive through shared ownership.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the statement list, evaluates expressions, manages the
/// current scope and calls functions. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, closures and control flow.
/// - Stops at the first runtime error and reports it with its line.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to a meaningful language element such as a
/// number, string, identifier, operator, punctuation mark or keyword. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme and
///   line.
/// - Handles numeric and string literals, identifiers, keywords and comments.
/// - Reports unexpected characters and unterminated strings without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs statements and expressions by recursive descent, one function
/// per precedence level.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting errors at the offending token.
/// - Recovers from syntax errors at statement boundaries so one mistake does
///   not hide the next.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values a program computes with: `nil`, booleans,
/// numbers, strings and callables.
///
/// # Responsibilities
/// - Defines the `Value` enum and its callable variants.
/// - Implements equality, truthiness and display.
/// - Converts parsed literals into runtime values.
pub mod value;
