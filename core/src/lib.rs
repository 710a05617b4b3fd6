//! Core of the times-table quiz: session state and question generation.
//!
//! Front ends own a [`session::Session`], forward user intents to it and
//! render from its accessors.

pub mod config;
pub mod error;
pub mod question;
pub mod session;

pub use config::{QuestionCount, Settings, TABLE_RANGE};
pub use error::{ConfigError, QuizError, Result};
pub use question::Question;
pub use session::{AnswerOutcome, Phase, Progress, Score, Session};
