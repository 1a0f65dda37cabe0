use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use treelox::{
    interpreter::evaluator::core::Interpreter, parse_source, printer::print_stmt,
    report::ErrorReport, run,
};

/// treelox is a tree-walking interpreter for the Lox scripting language.
///
/// Runs a script file, or starts an interactive prompt when no script is
/// given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run. Without one, treelox reads statements line by line
    /// from standard input.
    script: Option<PathBuf>,

    /// Prints the syntax tree of every statement instead of running it.
    #[arg(long)]
    dump_ast: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                  EnvFilter::new(directive_for_verbosity(args.verbose))
                                              }))
                             .with_writer(io::stderr)
                             .init();

    let result = match &args.script {
        Some(path) => run_file(path, args.dump_ast),
        None => run_prompt(args.dump_ast),
    };

    result.unwrap_or_else(|e| {
              eprintln!("{e}");
              ExitCode::FAILURE
          })
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "treelox=warn",
        1 => "treelox=debug",
        _ => "treelox=trace",
    }
}

/// Runs a whole script. Any syntax or runtime error makes the exit code 1.
fn run_file(path: &Path, dump_ast: bool) -> io::Result<ExitCode> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the script '{}': {e}", path.display());
            return Ok(ExitCode::FAILURE);
        },
    };
    debug!(path = %path.display(), bytes = source.len(), "running script");

    let mut report = ErrorReport::console();
    if dump_ast {
        print_syntax_trees(&source, &mut report);
    } else {
        run(&source, &mut Interpreter::new(), &mut report)?;
    }

    if report.had_error || report.had_runtime_error {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Reads and runs one line at a time until end of input.
///
/// All lines share one interpreter, so globals persist. A syntax error only
/// discards the line it occurred on.
fn run_prompt(dump_ast: bool) -> io::Result<ExitCode> {
    let mut interpreter = Interpreter::new();
    let mut report = ErrorReport::console();
    let mut lines = io::stdin().lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        if dump_ast {
            print_syntax_trees(&line, &mut report);
        } else {
            run(&line, &mut interpreter, &mut report)?;
        }
        report.reset();
    }

    Ok(ExitCode::SUCCESS)
}

fn print_syntax_trees(source: &str, report: &mut ErrorReport) {
    for statement in parse_source(source, report) {
        println!("{}", print_stmt(&statement));
    }
}
