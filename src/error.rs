use thiserror::Error;

use crate::analyzer::ParseError;
use crate::ast::NodeError;
use crate::tokenizer::RegistrationError;

#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),
    #[error("Node error: {0}")]
    Node(#[from] NodeError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Config error: {0}")]
    Config(String),
}

pub type MarkupResult<T> = Result<T, MarkupError>;

impl MarkupError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        MarkupError::Config(message.into())
    }
}
