use thiserror::Error;

use crate::eval::EvalErrors;

#[derive(Error, Debug)]
pub enum Error {
    // design evaluation
    #[error("Eval error: {0}")]
    Eval(#[from] EvalErrors),
    #[error("Config error: {0}")]
    Config(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}
