//! cscan - lexical analyzer for C-like source files
//!
//! Usage: cscan [OPTIONS] <input>

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{ArgAction, Parser as ClapParser};
use cscan::{DiagnosticReporter, LexError, Overflow, ScanConfig, ScanReport, Session, TokenKind};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const RULE: &str = "----------------------------------------------------------------------------------------";

#[derive(ClapParser, Debug)]
#[command(name = "cscan")]
#[command(version)]
#[command(about = "Tokenize a C-like source file and check its structure", long_about = None)]
struct Args {
    /// Input source file
    #[arg(required = true)]
    input: PathBuf,

    /// Disable the missing-semicolon lint on line breaks
    #[arg(long)]
    no_lint: bool,

    /// Maximum token length in characters
    #[arg(long, default_value_t = cscan::lexer::MAX_LEXEME_LEN)]
    max_lexeme: usize,

    /// Fail on tokens longer than --max-lexeme instead of truncating them
    #[arg(long)]
    strict_length: bool,

    /// Print token counts per kind after the dump
    #[arg(long)]
    summary: bool,

    /// Verbose logging (repeat for more). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            max_lexeme_len: self.max_lexeme,
            overflow: if self.strict_length {
                Overflow::Reject
            } else {
                Overflow::Truncate
            },
            lint_terminators: !self.no_lint,
        }
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        if let Some(line) = plain_error_line(&e) {
            eprintln!("{line}");
        }
        let code = e.downcast_ref::<LexError>().map_or(1, LexError::exit_code);
        process::exit(code);
    }
}

/// Fallback message for errors that have no source location.
/// Located scan errors were already rendered by the diagnostic reporter.
fn plain_error_line(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<LexError>() {
        Some(lex) if lex.span().is_some() => None,
        _ => Some(format!("error: {err}")),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let session = Session::open(&args.input, args.scan_config())?;

    let mut reporter = DiagnosticReporter::new();
    let file_id = reporter.add_file(session.source().name(), session.source().text());

    let mut tokens = Vec::new();
    let result = session.run(|token| {
        tokens.push(token.clone());
        if !token.is_eof() {
            println!("{RULE}");
            println!(" \tType : {:<23}\t----> \tToken : {}", token.kind, token.lexeme);
        }
    });
    println!("{RULE}");

    let state = match result {
        Ok(state) => state,
        Err(err) => {
            reporter.report_error(file_id, &err);
            return Err(err.into());
        }
    };

    if args.summary {
        let report = ScanReport { tokens, state };
        println!();
        for (kind, count) in report.count_by_kind() {
            if kind != TokenKind::EndOfInput {
                println!("{:<23} {count}", kind.name());
            }
        }
        println!("{:<23} {}", "LINES", report.state.current_line());
    }

    Ok(())
}
