pub mod ast;

use crate::{
    lexer::{self, token::Token, Lexer},
    parser::ast::{Block, Expression, Ident, Program, Statement},
};
use log::debug;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lexer(#[from] lexer::Error),
    #[error("unexpected token {found}, expected {expected}")]
    UnexpectedToken { expected: String, found: Token },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
    #[error("repeat count {0} is out of range")]
    RepeatCount(String),
    #[error("blocks nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Deepest `BEGIN`/`REPEAT` nesting accepted. Parsing and evaluation both
/// recurse once per level.
pub const MAX_NESTING: usize = 256;

/// Recursive-descent parser with one token of lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
            depth: 0,
        }
    }

    pub fn parse_program(source: &str) -> Result<Program, Error> {
        let mut parser = Parser::new(source);
        let mut program = vec![];

        while let Some(statement) = parser.parse_statement()? {
            program.push(statement);
        }

        debug!("parsed {} top-level statements", program.len());
        Ok(program)
    }

    /// Parses the statement starting at the current token, or returns `None`
    /// once the input is exhausted.
    pub fn parse_statement(&mut self) -> Result<Option<Statement>, Error> {
        let token = match self.lexer.peek()? {
            Some(token) => token,
            None => return Ok(None),
        };

        let statement = match token {
            Token::Begin => self.parse_block_statement()?,
            Token::Repeat => self.parse_repeat_statement()?,
            Token::Print => self.parse_print_statement()?,
            Token::Variable(_) => self.parse_assign_statement()?,
            found => return Err(Self::unexpected("statement", found)),
        };

        Ok(Some(statement))
    }

    fn parse_block_statement(&mut self) -> Result<Statement, Error> {
        self.tag(Token::Begin)?;
        let body = self.parse_body()?;

        Ok(Statement::Block(body))
    }

    fn parse_repeat_statement(&mut self) -> Result<Statement, Error> {
        self.tag(Token::Repeat)?;

        let count = match self.lexer.next_token()? {
            Some(Token::Number(digits)) => digits
                .parse::<u64>()
                .map_err(|_| Error::RepeatCount(digits.clone()))?,
            Some(found) => return Err(Self::unexpected("repeat count", found)),
            None => return Err(Self::end_of_input("repeat count")),
        };
        let body = self.parse_body()?;

        Ok(Statement::Loop(body, count))
    }

    fn parse_print_statement(&mut self) -> Result<Statement, Error> {
        self.tag(Token::Print)?;
        let ident = self.parse_ident()?;

        Ok(Statement::Print(ident))
    }

    fn parse_assign_statement(&mut self) -> Result<Statement, Error> {
        let ident = self.parse_ident()?;
        self.tag(Token::Assign)?;
        let expr = self.parse_expression()?;

        Ok(Statement::Assign(ident, expr))
    }

    /// Statements up to and including the closing `STOP`.
    fn parse_body(&mut self) -> Result<Block, Error> {
        if self.depth >= MAX_NESTING {
            return Err(Error::NestingTooDeep(MAX_NESTING));
        }
        self.depth += 1;

        let mut statements = vec![];

        loop {
            match self.lexer.peek()? {
                Some(Token::Stop) => {
                    self.lexer.next_token()?;
                    self.depth -= 1;
                    return Ok(statements);
                }
                Some(_) => {
                    if let Some(statement) = self.parse_statement()? {
                        statements.push(statement);
                    }
                }
                None => return Err(Self::end_of_input(&Token::Stop.to_string())),
            }
        }
    }

    fn parse_expression(&mut self) -> Result<Expression, Error> {
        let mut tokens = vec![self.parse_term()?];

        while let Some(operator @ (Token::Plus | Token::Minus)) = self.lexer.peek()? {
            self.lexer.next_token()?;
            tokens.push(operator);
            tokens.push(self.parse_term()?);
        }

        Ok(Expression::new(tokens))
    }

    fn parse_term(&mut self) -> Result<Token, Error> {
        match self.lexer.next_token()? {
            Some(token) if token.is_term() => Ok(token),
            Some(found) => Err(Self::unexpected("term", found)),
            None => Err(Self::end_of_input("term")),
        }
    }

    fn parse_ident(&mut self) -> Result<Ident, Error> {
        match self.lexer.next_token()? {
            Some(Token::Variable(ident)) => Ok(ident),
            Some(found) => Err(Self::unexpected("variable", found)),
            None => Err(Self::end_of_input("variable")),
        }
    }

    fn tag(&mut self, tag: Token) -> Result<(), Error> {
        match self.lexer.next_token()? {
            Some(token) if token == tag => Ok(()),
            Some(found) => Err(Self::unexpected(&tag.to_string(), found)),
            None => Err(Self::end_of_input(&tag.to_string())),
        }
    }

    fn unexpected(expected: &str, found: Token) -> Error {
        Error::UnexpectedToken {
            expected: expected.to_string(),
            found,
        }
    }

    fn end_of_input(expected: &str) -> Error {
        Error::UnexpectedEof {
            expected: expected.to_string(),
        }
    }
}
