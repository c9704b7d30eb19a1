use std::{fs::read_to_string, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use clap::Parser as ClapParser;
use lang_syntax::{format_error, lexer::lexer::tokenize, parser::parser::parse};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parse a source file and print its syntax tree.
#[derive(ClapParser, Debug)]
#[command(name = "lang-syntax", version)]
struct Cli {
    /// Source file to parse
    file: PathBuf,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Log filter, overrides RUST_LOG (e.g. `debug`, `lang_syntax=trace`)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // Only fails when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", cli.file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", format_error(&error, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    if cli.tokens {
        for token in &tokens {
            println!("{}", token);
        }
        return ExitCode::SUCCESS;
    }

    let parse_start = Instant::now();
    let program = match parse(tokens, Rc::new(file_name.clone())) {
        Ok(program) => program,
        Err(error) => {
            eprint!("{}", format_error(&error, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    info!("Parsed in {:?}", parse_start.elapsed());

    for stmt in program.iter() {
        println!("{}", pretty_print(&stmt.to_string()));
    }

    ExitCode::SUCCESS
}

/// Breaks a rendered tree onto indented lines, one `(block ...)` entry per
/// line.
fn pretty_print(string: &str) -> String {
    let mut result = String::new();
    let mut indent = 0;
    let mut depth = 0;
    let mut block_depths = vec![];
    let mut in_string = false;
    let mut chars = string.chars().peekable();

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    result.push(escaped);
                }
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            '(' => {
                depth += 1;
                result.push(c);
            }
            ')' => {
                if block_depths.last() == Some(&depth) {
                    block_depths.pop();
                    indent -= 1;
                }
                depth -= 1;
                result.push(c);
            }
            ' ' if block_depths.last() == Some(&depth) => {
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
            }
            _ => {
                result.push(c);
                if result.ends_with("(block") && chars.peek() == Some(&' ') {
                    block_depths.push(depth);
                    indent += 1;
                }
            }
        }
    }

    result
}
