use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::ConfigError;

/// Valid multipliers, and the range factors are drawn from.
pub const TABLE_RANGE: RangeInclusive<u32> = 2..=12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum QuestionCount {
    #[default]
    Five,
    Ten,
    Twenty,
}

impl QuestionCount {
    pub const ALL: [QuestionCount; 3] = [QuestionCount::Five, QuestionCount::Ten, QuestionCount::Twenty];

    pub fn value(self) -> u32 {
        match self {
            QuestionCount::Five => 5,
            QuestionCount::Ten => 10,
            QuestionCount::Twenty => 20,
        }
    }
}

impl TryFrom<u32> for QuestionCount {
    type Error = ConfigError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        QuestionCount::ALL
            .into_iter()
            .find(|c| c.value() == n)
            .ok_or(ConfigError::UnsupportedQuestionCount(n))
    }
}

impl From<QuestionCount> for u32 {
    fn from(c: QuestionCount) -> Self {
        c.value()
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// What the user picks before a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub multiplier: u32,
    pub question_count: QuestionCount,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            multiplier: *TABLE_RANGE.start(),
            question_count: QuestionCount::Five,
        }
    }
}

impl Settings {
    pub fn new(multiplier: u32, question_count: QuestionCount) -> Result<Self, ConfigError> {
        let settings = Self {
            multiplier,
            question_count,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Question counts are valid by construction; only the multiplier can be off.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_multiplier(self.multiplier)
    }
}

pub fn validate_multiplier(multiplier: u32) -> Result<(), ConfigError> {
    if TABLE_RANGE.contains(&multiplier) {
        Ok(())
    } else {
        Err(ConfigError::MultiplierOutOfRange(multiplier))
    }
}
