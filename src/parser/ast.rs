use crate::lexer::token::Token;

pub type Program = Block;
pub type Block = Vec<Statement>;
pub type Ident = char;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `BEGIN ... STOP`, clears the environment before running its body.
    Block(Block),
    /// `REPEAT count ... STOP`
    Loop(Block, u64),
    Print(Ident),
    Assign(Ident, Expression),
}

/// Operands and `+`/`-` operators in source order, always starting and
/// ending on an operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub(crate) tokens: Vec<Token>,
}

impl Expression {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
