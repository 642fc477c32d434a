use std::fmt::{self, Display};

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Token {
    // Keywords
    Begin,
    Repeat,
    Stop,
    Print,

    // Operators
    Plus,
    Minus,
    Assign,

    // Complex Types
    Number(String),
    Variable(char),
    MultipliedVariable(String, char),
}

impl Token {
    /// Tokens that may appear as an operand of an expression.
    pub fn is_term(&self) -> bool {
        matches!(
            self,
            Token::Number(_) | Token::Variable(_) | Token::MultipliedVariable(_, _)
        )
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Begin => write!(f, "BEGIN"),
            Token::Repeat => write!(f, "REPEAT"),
            Token::Stop => write!(f, "STOP"),
            Token::Print => write!(f, "PRINT"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Assign => write!(f, "="),
            Token::Number(digits) => write!(f, "{}", digits),
            Token::Variable(name) => write!(f, "{}", name),
            Token::MultipliedVariable(coefficient, name) => write!(f, "{}{}", coefficient, name),
        }
    }
}
