use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    PatternSyntaxError(String),
    PatternFlagError(String),
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::PatternSyntaxError(m) => write!(f, "Pattern syntax error: {}.", m),
            GraphError::PatternFlagError(m) => write!(f, "Pattern flag error: {}.", m),
        }
    }
}

impl std::error::Error for GraphError {}
