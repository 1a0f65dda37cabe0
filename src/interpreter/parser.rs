/// Parser state, token navigation and the `parse` entry point.
///
/// Holds the token cursor, required-token checks, error reporting and
/// panic-mode synchronization shared by every grammar rule.
pub mod core;

/// Declaration and statement parsing.
///
/// Covers `var` and `fun` declarations, `print`, `if`, `while`, expression
/// statements, and the `for` loop, which is desugared into a `while` loop
/// here.
pub mod statement;

/// Block parsing.
///
/// Parses a brace-delimited sequence of declarations.
pub mod block;

/// Binary expression parsing.
///
/// Implements assignment and every left-associative precedence level from
/// `or` down to multiplication.
pub mod binary;

/// Unary expression parsing.
///
/// Handles prefix operators, call suffixes and primary expressions.
pub mod unary;

/// Parser helpers.
pub mod utils;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        interpreter::{
            lexer::{Token, TokenKind, scan},
            parser::core::parse,
        },
        printer::print_stmt,
        report::ErrorReport,
    };

    /// Parses `source` and returns the printed statements and the diagnostics.
    fn parse_source(source: &str) -> (Vec<String>, Vec<String>) {
        let mut report = ErrorReport::silent();
        let tokens = scan(source, &mut report);
        let statements = parse(&tokens, &mut report);

        (statements.iter().map(print_stmt).collect(), report.messages())
    }

    fn printed(tokens: &[Token]) -> Vec<String> {
        let mut report = ErrorReport::silent();
        let statements = parse(tokens, &mut report);
        assert!(!report.had_error, "{:?}", report.messages());

        statements.iter().map(print_stmt).collect()
    }

    #[test]
    fn respects_operator_precedence() {
        let (statements, errors) = parse_source("(123.9 + 92) >= 5 * -9;");

        assert!(errors.is_empty());
        assert_eq!(statements, vec!["(; (>= (group (+ 123.9 92)) (* 5 (- 9))))"]);
    }

    #[test]
    fn parsing_a_fixed_token_sequence_is_idempotent() {
        use TokenKind::{
            GreaterEqual, LeftParen, Number, Plus, RightParen, Semicolon, Star,
        };

        let tokens: Vec<Token> = [(LeftParen, "("),
                                  (Number, "123.9"),
                                  (Plus, "+"),
                                  (Number, "92"),
                                  (RightParen, ")"),
                                  (GreaterEqual, ">="),
                                  (Number, "5"),
                                  (Star, "*"),
                                  (Number, "-9"),
                                  (Semicolon, ";")].into_iter()
                                                   .map(|(kind, lexeme)| Token::new(kind, lexeme, 1))
                                                   .chain(std::iter::once(Token::eof(1)))
                                                   .collect();

        let first = printed(&tokens);
        let second = printed(&tokens);

        assert_eq!(first, vec!["(; (>= (group (+ 123.9 92)) (* 5 -9)))"]);
        assert_eq!(first, second);
    }

    #[test]
    fn binary_operators_are_left_associative() {
        let (statements, _) = parse_source("1 - 2 - 3; a = b = c; !!x;");

        assert_eq!(statements,
                   vec!["(; (- (- 1 2) 3))", "(; (= a (= b c)))", "(; (! (! x)))"]);
    }

    #[test]
    fn logical_operators_bind_looser_than_equality() {
        let (statements, _) = parse_source("a or b and c == d;");

        assert_eq!(statements, vec!["(; (or a (and b (== c d))))"]);
    }

    #[test]
    fn parses_calls_and_declarations() {
        let (statements, errors) =
            parse_source("fun add(a, b) { print a + b; } add(1, 2)(3); var x; var y = nil;");

        assert!(errors.is_empty());
        assert_eq!(statements,
                   vec!["(fun add (a b) (print (+ a b)))",
                        "(; (call (call add 1 2) 3))",
                        "(var x)",
                        "(var y nil)"]);
    }

    #[test]
    fn parses_control_flow() {
        let (statements, _) =
            parse_source("if (a) if (b) print 1; else print 2; while (x) { x = false; }");

        assert_eq!(statements,
                   vec!["(if a (if b (print 1) (print 2)))",
                        "(while x (block (; (= x false))))"]);
    }

    #[test]
    fn desugars_for_into_while() {
        let (statements, errors) = parse_source("for (var i = 0; i < 5; i = i + 1) print i;");

        assert!(errors.is_empty());
        assert_eq!(statements,
                   vec!["(block (var i 0) (while (< i 5) (block (print i) (; (= i (+ i 1))))))"]);
    }

    #[test]
    fn for_without_clauses_loops_forever() {
        let (statements, _) = parse_source("for (;;) x;");

        assert_eq!(statements, vec!["(block (while true (block (; x))))"]);
    }

    #[test]
    fn invalid_assignment_target_is_reported_once_and_parsing_continues() {
        let (statements, errors) = parse_source("\"hello\" = 5;\nprint 1;");

        assert_eq!(errors, vec!["[line 1] Error at '=': Invalid assignment target."]);
        assert_eq!(statements, vec!["(; hello)", "(print 1)"]);
    }

    #[test]
    fn synchronizes_after_a_syntax_error() {
        let (statements, errors) = parse_source("var = 1; print 2;\nvar b = 3 print b; print 4;");

        assert_eq!(errors,
                   vec!["[line 1] Error at '=': Expect variable name.",
                        "[line 2] Error at 'print': Expect ';' after variable declaration."]);
        assert_eq!(statements, vec!["(print 2)", "(print 4)"]);
    }

    #[test]
    fn reports_errors_at_end_of_input() {
        let (statements, errors) = parse_source("print 1");
        assert!(statements.is_empty());
        assert_eq!(errors, vec!["[line 1] Error at end: Expect ';' after value."]);

        let (_, errors) = parse_source("{ print 1;");
        assert_eq!(errors, vec!["[line 1] Error at end: Expect '}' after block."]);
    }

    #[test]
    fn reports_missing_expression() {
        let (_, errors) = parse_source("print );");

        assert_eq!(errors, vec!["[line 1] Error at ')': Expect expression."]);
    }

    #[test]
    fn too_many_arguments_is_not_fatal() {
        let arguments = vec!["0"; 256].join(", ");
        let (statements, errors) = parse_source(&format!("f({arguments});"));

        assert_eq!(errors, vec!["[line 1] Error at '0': Can't have more than 255 arguments."]);
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn too_many_parameters_is_not_fatal() {
        let parameters = (0..256).map(|i| format!("p{i}")).collect::<Vec<_>>().join(", ");
        let (statements, errors) = parse_source(&format!("fun f({parameters}) {{}}"));

        assert_eq!(errors, vec!["[line 1] Error at 'p255': Can't have more than 255 parameters."]);
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn parses_token_slices_without_eof() {
        let tokens = vec![Token::new(TokenKind::Print, "print", 1)];
        let mut report = ErrorReport::silent();

        assert!(parse(&tokens, &mut report).is_empty());
        assert_eq!(report.messages(), vec!["[line 1] Error at end: Expect expression."]);
    }
}
