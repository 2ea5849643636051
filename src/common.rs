pub(crate) const EXIT_CODE_SUCCESS: i32 = 0;
pub(crate) const EXIT_CODE_ERROR: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum StructuralError {
    #[error("unmatched ')' at position {position}")]
    UnopenedParen { position: usize },
    #[error("repeated operator '{op}' at position {position}")]
    RepeatedOperator { op: char, position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum SyntaxError {
    #[error("unmatched '(' opened at position {position}")]
    UnmatchedParen { position: usize },
    #[error("expected a symbol, '.' or '(' at position {position} but input ended")]
    UnexpectedEnd { position: usize },
    #[error("unexpected '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },
}

// Inner errors are part of the message, not the `source()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ParseError {
    #[error("invalid regular expression: {0}")]
    Structural(StructuralError),
    #[error("invalid regular expression: {0}")]
    Syntax(SyntaxError),
}

impl From<StructuralError> for ParseError {
    fn from(err: StructuralError) -> Self {
        Self::Structural(err)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        Self::Syntax(err)
    }
}

#[derive(Debug)]
pub(crate) struct Incrementer {
    next: u64,
}

impl Incrementer {
    pub(crate) fn new_from(start: u64) -> Self {
        Self { next: start }
    }

    pub(crate) fn get(&mut self) -> u64 {
        let out = self.next;
        self.next += 1;
        out
    }
}
