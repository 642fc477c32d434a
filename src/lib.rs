use log::debug;
use std::io::Write;

use crate::{
    eval::{Environment, Evaluator},
    parser::Parser,
};

pub mod eval;
pub mod lexer;
pub mod parser;
pub mod repl;

/// Parses the whole of `source`, then runs it against a fresh environment.
/// A syntax error anywhere means no statement runs.
pub fn run<W: Write>(source: &str, out: W) -> Result<Environment, Error> {
    let program = Parser::parse_program(source)?;
    debug!("running {} top-level statements", program.len());

    let mut evaluator = Evaluator::new(out);
    evaluator.eval(&program)?;

    Ok(evaluator.into_environment())
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("syntax error: {0}")]
    Parser(#[from] parser::Error),
    #[error("runtime error: {0}")]
    Eval(#[from] eval::Error),
}
