pub mod token;

use log::trace;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit1, satisfy},
    combinator::map,
    error::ParseError,
    sequence::pair,
    IResult,
};
use token::Token;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unrecognized token: {0}")]
    UnrecognizedToken(String),
}

/// Cursor over the unconsumed part of a program.
///
/// Tokens are produced on demand: `peek` classifies the next token without
/// moving the cursor, `next_token` classifies it and advances past it.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    rest: &'a str,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            rest: source,
            failed: false,
        }
    }

    pub fn lex_input(source: &str) -> Result<Vec<Token>, Error> {
        Lexer::new(source).collect()
    }

    /// The text that has not been consumed yet.
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    pub fn peek(&self) -> Result<Option<Token>, Error> {
        Ok(Self::lex_token(self.rest)?.map(|(token, _)| token))
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        match Self::lex_token(self.rest)? {
            Some((token, rest)) => {
                trace!("lexed token {}", token);
                self.rest = rest;
                Ok(Some(token))
            }
            None => {
                self.rest = "";
                Ok(None)
            }
        }
    }

    /// Classifies the first token of `input`, returning it with the text that
    /// follows it. `None` means only whitespace is left.
    pub fn lex_token(input: &str) -> Result<Option<(Token, &str)>, Error> {
        let input = input.trim_start();
        if input.is_empty() {
            return Ok(None);
        }

        match Self::token(input) {
            Ok((rest, token)) => Ok(Some((token, rest))),
            Err(_) => {
                let fragment = input.split_whitespace().next().unwrap_or(input);
                Err(Error::UnrecognizedToken(fragment.to_string()))
            }
        }
    }

    fn token(i: &str) -> IResult<&str, Token> {
        let keyword_parsers = alt((
            Self::static_token_lexer_generator("BEGIN", Token::Begin),
            Self::static_token_lexer_generator("REPEAT", Token::Repeat),
            Self::static_token_lexer_generator("STOP", Token::Stop),
            Self::static_token_lexer_generator("PRINT", Token::Print),
        ));

        let symbol_parsers = alt((
            Self::static_token_lexer_generator("+", Token::Plus),
            Self::static_token_lexer_generator("-", Token::Minus),
            Self::static_token_lexer_generator("=", Token::Assign),
        ));

        // `12a` is a single token, so the multiplied form must win over both
        // the number and the variable rule.
        let dynamic_parsers = alt((
            Self::multiplied_variable_lexer(),
            Self::variable_lexer(),
            Self::number_lexer(),
        ));

        alt((keyword_parsers, symbol_parsers, dynamic_parsers))(i)
    }

    fn static_token_lexer_generator<'i, E>(
        symbol: &'static str,
        token: Token,
    ) -> impl FnMut(&'i str) -> IResult<&'i str, Token, E>
    where
        E: ParseError<&'i str>,
    {
        map(tag(symbol), move |_| token.clone())
    }

    fn multiplied_variable_lexer<'i, E>() -> impl FnMut(&'i str) -> IResult<&'i str, Token, E>
    where
        E: ParseError<&'i str>,
    {
        map(
            pair(digit1, satisfy(|c: char| c.is_ascii_lowercase())),
            |(coefficient, name): (&str, char)| {
                Token::MultipliedVariable(coefficient.to_string(), name)
            },
        )
    }

    fn variable_lexer<'i, E>() -> impl FnMut(&'i str) -> IResult<&'i str, Token, E>
    where
        E: ParseError<&'i str>,
    {
        map(satisfy(|c: char| c.is_ascii_lowercase()), Token::Variable)
    }

    fn number_lexer<'i, E>() -> impl FnMut(&'i str) -> IResult<&'i str, Token, E>
    where
        E: ParseError<&'i str>,
    {
        map(digit1, |digits: &str| Token::Number(digits.to_string()))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
