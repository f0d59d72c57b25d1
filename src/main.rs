//! Command line front end for the Monkey lexer.
//!
//! Prints the token stream of a source file, or runs a REPL over stdin when
//! no file is given.

use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use monkey_lexer::{
    check_strict,
    errors::errors::{Error, ErrorTip, Result},
    repl, tokenize_file,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Tokenize Monkey source code
#[derive(Parser, Debug)]
#[command(name = "monkey-lexer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Prints the tokens of Monkey source code", long_about = None)]
struct Cli {
    /// Source file to tokenize (starts a REPL when omitted)
    path: Option<PathBuf>,

    /// Fail when the source contains illegal characters
    #[arg(long)]
    strict: bool,

    /// Enable debug logging, overriding any `RUST_LOG` filter
    #[arg(short, long, env = "MONKEY_LEXER_VERBOSE")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Some(path) = cli.path else {
        println!("Hello! This is the Monkey programming language!");
        println!("Feel free to type in commands");
        let stdin = io::stdin();
        return repl::start(stdin.lock(), &mut io::stdout());
    };

    let tokens = tokenize_file(&path)?;
    repl::print_tokens(&tokens, &mut io::stdout())?;

    if cli.strict {
        check_strict(&tokens)?;
    }

    Ok(())
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error);
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}
