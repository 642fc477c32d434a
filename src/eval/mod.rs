use crate::{
    eval::environment::MODULUS,
    lexer::token::Token,
    parser::ast::{Expression, Ident, Statement},
};
use log::debug;
use std::io::{self, Write};

pub use environment::Environment;

mod environment;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("undefined variable: {0}")]
    UndefinedVariable(Ident),
    #[error("token {0} cannot be evaluated as a term")]
    UnrepresentableToken(Token),
    #[error("expression has no terms")]
    EmptyExpression,
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Runs statements against one shared environment, writing `PRINT` output to
/// `out`. The environment outlives each call to `eval`.
pub struct Evaluator<W: Write> {
    environment: Environment,
    out: W,
}

impl<W: Write> Evaluator<W> {
    pub fn new(out: W) -> Self {
        Self {
            environment: Environment::new(),
            out,
        }
    }

    /// Stops at the first failing statement; earlier statements keep their
    /// effects.
    pub fn eval(&mut self, program: &[Statement]) -> Result<(), Error> {
        program
            .iter()
            .try_for_each(|statement| statement.run(&mut self.environment, &mut self.out))
    }

    pub fn into_environment(self) -> Environment {
        self.environment
    }
}

impl Statement {
    pub fn run<W: Write>(&self, env: &mut Environment, out: &mut W) -> Result<(), Error> {
        match self {
            Statement::Block(statements) => {
                debug!("entering block, discarding {} bindings", env.len());
                env.clear();
                Self::run_all(statements, env, out)
            }
            Statement::Loop(statements, count) => {
                debug!("entering loop of {} iterations", count);
                (0..*count).try_for_each(|_| Self::run_all(statements, env, out))
            }
            Statement::Assign(ident, expr) => {
                let val = expr.evaluate(env)?;
                env.set(*ident, val);
                Ok(())
            }
            Statement::Print(ident) => {
                let val = lookup(*ident, env)?;
                writeln!(out, "{} = {}", ident, val)?;
                Ok(())
            }
        }
    }

    fn run_all<W: Write>(
        statements: &[Statement],
        env: &mut Environment,
        out: &mut W,
    ) -> Result<(), Error> {
        statements
            .iter()
            .try_for_each(|statement| statement.run(env, out))
    }
}

impl Expression {
    /// Left-to-right sum of the terms. Each term is reduced on its own but the
    /// running total is not, so the result may be negative or above the bound.
    pub fn evaluate(&self, env: &Environment) -> Result<i64, Error> {
        let (first, rest) = match self.tokens.split_first() {
            Some(split) => split,
            None => return Err(Error::EmptyExpression),
        };

        rest.chunks(2)
            .try_fold(eval_term(first, env)?, |total, pair| match pair {
                [Token::Plus, term] => Ok(total + eval_term(term, env)?),
                [Token::Minus, term] => Ok(total - eval_term(term, env)?),
                [other, ..] => Err(Error::UnrepresentableToken(other.clone())),
                [] => Ok(total),
            })
    }
}

fn eval_term(token: &Token, env: &Environment) -> Result<i64, Error> {
    match token {
        Token::Number(digits) => Ok(reduce_digits(digits)),
        Token::Variable(ident) => Ok(lookup(*ident, env)? % MODULUS),
        // Same residue as the full product, without overflowing on long
        // coefficients.
        Token::MultipliedVariable(coefficient, ident) => {
            Ok(reduce_digits(coefficient) * lookup(*ident, env)? % MODULUS)
        }
        other => Err(Error::UnrepresentableToken(other.clone())),
    }
}

fn lookup(ident: Ident, env: &Environment) -> Result<i64, Error> {
    env.get(ident).ok_or(Error::UndefinedVariable(ident))
}

/// Decimal digit string reduced modulo `MODULUS`, for any length.
fn reduce_digits(digits: &str) -> i64 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0, |acc, digit| (acc * 10 + i64::from(digit - b'0')) % MODULUS)
}
