use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::{Builder, Env};
use log::{debug, info};

use lox_expr as lox;

use lox::error::EXIT_SYNTAX;
use lox::{AstPrinter, Interpreter, ScanOutcome, Scanner};

#[derive(ClapParser, Debug)]
#[command(version, about = "Lox expression interpreter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// Enable logging to app.log (level taken from RUST_LOG, default debug)
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenizes input from a file, printing each token
    Tokenize { filename: PathBuf },

    /// Parses input from a file as a single expression and prints its AST
    Parse { filename: PathBuf },

    /// Evaluates input from a file as a single expression and prints the result
    Evaluate { filename: PathBuf },
}

/// Reads the contents of a file, which must be UTF‑8.
fn read_file(filename: PathBuf) -> Result<String> {
    info!("Reading file: {:?}", filename);
    let file = File::open(&filename).context(format!("Failed to open file {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    let bytes = reader
        .read_to_end(&mut buf)
        .context(format!("Failed to read file {:?}", filename))?;

    info!("Read {} bytes from {:?}", bytes, filename);

    String::from_utf8(buf).context(format!("File {:?} is not valid UTF-8", filename))
}

fn init_logger() -> Result<()> {
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            // Strip 'lox_expr::' from module path
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("lox_expr::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

/// Prints every scan error; `true` when there was at least one.
fn report_scan_errors(outcome: &ScanOutcome<'_>) -> bool {
    for e in &outcome.errors {
        eprintln!("{}", e);
    }

    outcome.had_error()
}

/// Tokens and errors are printed in source order, so the stream is consumed
/// directly rather than through `scan`.
fn run_tokenize(source: &str) -> i32 {
    let mut tokenized = true;

    for token in Scanner::new(source) {
        match token {
            Ok(token) => println!("{}", token),

            Err(e) => {
                tokenized = false;

                debug!("Tokenization debug: {}", e);

                eprintln!("{}", e);
            }
        }
    }

    if tokenized {
        0
    } else {
        EXIT_SYNTAX
    }
}

fn run_parse(source: &str) -> i32 {
    let outcome = lox::scan(source);

    if report_scan_errors(&outcome) {
        return EXIT_SYNTAX;
    }

    match lox::parse(&outcome.tokens) {
        Ok(expr) => {
            let ast_str = AstPrinter::print(&expr);

            debug!("AST: {}", ast_str);
            println!("{}", ast_str);
            0
        }

        Err(e) => {
            debug!("Parse debug: {}", e);
            eprintln!("{}", e);
            e.exit_code()
        }
    }
}

fn run_evaluate(source: &str) -> i32 {
    let outcome = lox::scan(source);

    if report_scan_errors(&outcome) {
        return EXIT_SYNTAX;
    }

    let result = lox::parse(&outcome.tokens).and_then(|expr| Interpreter::new().evaluate(&expr));

    match result {
        Ok(value) => {
            debug!("Evaluated to: {}", value);
            println!("{}", value);
            0
        }

        Err(e) => {
            debug!("Evaluation debug: {}", e);
            eprintln!("{}", e);
            e.exit_code()
        }
    }
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    // Initialize logger only if --log flag is provided
    if args.log {
        init_logger()?;
    } else {
        // Initialize a minimal logger to avoid "no logger" errors
        Builder::new().filter_level(log::LevelFilter::Off).init();
    }

    info!("CLI arguments: {:?}", args);

    let code: i32 = match args.commands {
        Commands::Tokenize { filename } => run_tokenize(&read_file(filename)?),

        Commands::Parse { filename } => run_parse(&read_file(filename)?),

        Commands::Evaluate { filename } => run_evaluate(&read_file(filename)?),
    };

    if code != 0 {
        debug!("Exiting with code {}", code);

        std::process::exit(code);
    }

    info!("Completed successfully");

    Ok(())
}
