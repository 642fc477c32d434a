use std::{
    io,
    io::{stdin, stdout, BufRead, Write},
};

use crate::{eval::Environment, parser::Parser};

pub const PROMPT: &str = ">> ";

pub fn start() -> io::Result<()> {
    let stdin = stdin();
    session(stdin.lock(), stdout())
}

/// Every line is a complete program; bindings carry over between lines.
pub fn session<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut buffer = String::new();
    let mut env = Environment::new();

    loop {
        write!(output, "{}", PROMPT)?;

        output.flush()?;

        if input.read_line(&mut buffer)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match Parser::parse_program(&buffer) {
            Ok(program) => {
                let result = program
                    .iter()
                    .try_for_each(|statement| statement.run(&mut env, &mut output));
                if let Err(e) = result {
                    writeln!(output, "runtime error: {}", e)?;
                }
            }
            Err(e) => writeln!(output, "syntax error: {}", e)?,
        }

        buffer.clear();
    }
}
