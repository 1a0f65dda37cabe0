use std::fmt;

use tracing::trace;

/// Where on a line a syntax error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// No token to point at (lexer errors).
    Nowhere,
    /// The end-of-input token.
    AtEnd,
    /// A token, identified by its lexeme.
    At(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nowhere => Ok(()),
            Self::AtEnd => write!(f, "at end"),
            Self::At(lexeme) => write!(f, "at '{lexeme}'"),
        }
    }
}

/// The two methods through which the lexer, parser and evaluator surface
/// diagnostics. The pipeline never formats or prints them itself.
pub trait Reporter {
    /// Records a syntax error found by the lexer or the parser.
    fn report(&mut self, line: usize, location: Location, message: &str);

    /// Records a runtime error that aborted an evaluation.
    fn report_runtime_error(&mut self, line: usize, message: &str);
}

/// A recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A lexing or parsing error.
    Syntax {
        /// The source line.
        line:     usize,
        /// Where on the line.
        location: Location,
        /// The error message.
        message:  String,
    },
    /// An error raised while evaluating.
    Runtime {
        /// The source line.
        line:    usize,
        /// The error message.
        message: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { line,
                           location: Location::Nowhere,
                           message, } => write!(f, "[line {line}] Error: {message}"),
            Self::Syntax { line,
                           location,
                           message, } => write!(f, "[line {line}] Error {location}: {message}"),
            Self::Runtime { line, message } => write!(f, "[line {line}] Runtime error: {message}"),
        }
    }
}

/// The diagnostic sink used by the command line and the tests.
///
/// Keeps every diagnostic in order, remembers whether a syntax or runtime
/// error has been seen, and optionally echoes each diagnostic to stderr as it
/// arrives.
#[derive(Debug, Default)]
pub struct ErrorReport {
    /// Set once any syntax error has been reported.
    pub had_error:         bool,
    /// Set once any runtime error has been reported.
    pub had_runtime_error: bool,
    diagnostics:           Vec<Diagnostic>,
    echo:                  bool,
}

impl ErrorReport {
    /// Creates a report that prints each diagnostic to stderr.
    #[must_use]
    pub fn console() -> Self {
        Self { echo: true,
               ..Self::default() }
    }

    /// Creates a report that only records diagnostics.
    ///
    /// ## Example
    /// ```
    /// use treelox::report::{ErrorReport, Location, Reporter};
    ///
    /// let mut report = ErrorReport::silent();
    /// report.report(2, Location::At("=".to_string()), "Invalid assignment target.");
    ///
    /// assert!(report.had_error);
    /// assert_eq!(report.messages(),
    ///            vec!["[line 2] Error at '=': Invalid assignment target.".to_string()]);
    /// ```
    #[must_use]
    pub fn silent() -> Self {
        Self::default()
    }

    /// The diagnostics recorded so far, oldest first.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The recorded diagnostics rendered as text.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Clears the syntax error flag so the next prompt line starts fresh.
    pub const fn reset(&mut self) {
        self.had_error = false;
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        trace!(%diagnostic, "diagnostic recorded");
        if self.echo {
            eprintln!("{diagnostic}");
        }
        self.diagnostics.push(diagnostic);
    }
}

impl Reporter for ErrorReport {
    fn report(&mut self, line: usize, location: Location, message: &str) {
        self.had_error = true;
        self.record(Diagnostic::Syntax { line,
                                         location,
                                         message: message.to_string() });
    }

    fn report_runtime_error(&mut self, line: usize, message: &str) {
        self.had_runtime_error = true;
        self.record(Diagnostic::Runtime { line,
                                          message: message.to_string() });
    }
}
