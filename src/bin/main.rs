use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use libtoy::{lexer::Lexer, parser, repl};

/// toy runs BEGIN / REPEAT / PRINT programs over integers modulo 10000.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program file to run. Without a file or `--code`, an interactive
    /// session starts.
    path: Option<PathBuf>,

    /// Run this source text instead of a file.
    #[arg(short, long, conflicts_with = "path")]
    code: Option<String>,

    /// Print the token stream to stderr before running.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed statements to stderr before running.
    #[arg(long)]
    ast: bool,
}

fn read_source(path: &Path) -> Result<String, String> {
    fs::read_to_string(path)
        .map_err(|e| format!("Failed to read the input file '{}': {}", path.display(), e))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = match (&args.path, args.code) {
        (Some(path), _) => read_source(path).unwrap_or_else(|e| {
            eprintln!("{}", e);
            process::exit(1);
        }),
        (None, Some(code)) => code,
        (None, None) => {
            println!("Hello! This is the toy language. Type a program per line.");
            if let Err(e) = repl::start() {
                eprintln!("{}", e);
                process::exit(1);
            }
            return;
        }
    };

    if args.tokens {
        match Lexer::lex_input(&source) {
            Ok(tokens) => tokens.iter().for_each(|token| eprintln!("{:?}", token)),
            Err(e) => eprintln!("{}", e),
        }
    }

    if args.ast {
        match parser::Parser::parse_program(&source) {
            Ok(program) => program
                .iter()
                .for_each(|statement| eprintln!("{:#?}", statement)),
            Err(e) => eprintln!("{}", e),
        }
    }

    if let Err(e) = libtoy::run(&source, io::stdout().lock()) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
