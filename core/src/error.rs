use thiserror::Error;

use crate::session::Phase;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("multiplier {0} is outside the table range 2..=12")]
    MultiplierOutOfRange(u32),

    #[error("question count {0} is not one of 5, 10 or 20")]
    UnsupportedQuestionCount(u32),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("session is {actual:?}, expected {expected:?}")]
    InvalidState { expected: Phase, actual: Phase },
}

pub type Result<T> = std::result::Result<T, QuizError>;
