use std::fmt;

use serde::{Serialize, Serializer};

pub(crate) const ANY_CHAR_TOKEN: &str = ".";

pub(crate) const EPSILON_KEY: &str = "";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Symbol {
    Char(char),
    AnyChar,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::AnyChar => f.write_str(ANY_CHAR_TOKEN),
        }
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// Epsilon sorts first so it leads every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Cond {
    Epsilon,
    Symbol(Symbol),
}

impl Cond {
    pub(crate) fn to_label(&self) -> String {
        match self {
            Self::Epsilon => "ε".to_string(),
            Self::Symbol(symbol) => symbol.to_string(),
        }
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epsilon => f.write_str(EPSILON_KEY),
            Self::Symbol(symbol) => fmt::Display::fmt(symbol, f),
        }
    }
}

impl Serialize for Cond {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
