use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::config::{validate_multiplier, QuestionCount, Settings};
use crate::error::{QuizError, Result};
use crate::question::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

/// Final result of a session, e.g. `3/5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Position within a running session, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: u32,
    pub total: u32,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Another question is ready.
    Next { correct: bool },
    /// That was the last question.
    Finished { correct: bool, score: Score },
}

impl AnswerOutcome {
    pub fn was_correct(&self) -> bool {
        match *self {
            AnswerOutcome::Next { correct } | AnswerOutcome::Finished { correct, .. } => correct,
        }
    }
}

/// One quiz run from `start` until the configured number of answers.
///
/// The same value is reused across runs: after a session finishes, calling
/// [`Session::start`] again begins a fresh one with the current settings.
pub struct Session<R = StdRng> {
    settings: Settings,
    phase: Phase,
    current_question_number: u32,
    correct_count: u32,
    question: Option<Question>,
    last_score: Option<Score>,
    rng: R,
}

impl Session<StdRng> {
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(settings: Settings, rng: R) -> Self {
        Self {
            settings,
            phase: Phase::NotStarted,
            current_question_number: 0,
            correct_count: 0,
            question: None,
            last_score: None,
            rng,
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn current_question_number(&self) -> u32 {
        self.current_question_number
    }

    pub fn last_score(&self) -> Option<Score> {
        self.last_score
    }

    pub fn progress(&self) -> Option<Progress> {
        (self.phase == Phase::InProgress).then(|| Progress {
            current: self.current_question_number,
            total: self.settings.question_count.value(),
        })
    }

    fn ensure_not_running(&self) -> Result<()> {
        if self.phase == Phase::InProgress {
            return Err(QuizError::InvalidState {
                expected: Phase::NotStarted,
                actual: self.phase,
            });
        }
        Ok(())
    }

    pub fn set_multiplier(&mut self, multiplier: u32) -> Result<()> {
        self.ensure_not_running()?;
        validate_multiplier(multiplier)?;
        self.settings.multiplier = multiplier;
        Ok(())
    }

    pub fn set_question_count(&mut self, question_count: QuestionCount) -> Result<()> {
        self.ensure_not_running()?;
        self.settings.question_count = question_count;
        Ok(())
    }

    /// Validates and applies both settings, then starts. Nothing changes if
    /// either value is rejected.
    pub fn start_session(&mut self, multiplier: u32, question_count: u32) -> Result<&Question> {
        let settings = Settings::new(multiplier, QuestionCount::try_from(question_count)?)?;
        self.settings = settings;
        self.start()
    }

    /// Begins a session with the current settings, discarding any progress.
    pub fn start(&mut self) -> Result<&Question> {
        self.settings.validate()?;

        self.correct_count = 0;
        self.current_question_number = 1;
        self.last_score = None;
        self.phase = Phase::InProgress;
        log::info!(
            "starting session: {} questions on the {} times table",
            self.settings.question_count,
            self.settings.multiplier
        );

        let question = Question::generate(self.settings.multiplier, &mut self.rng);
        let question: &Question = self.question.insert(question);
        Ok(question)
    }

    pub fn submit_answer(&mut self, selected: u64) -> Result<AnswerOutcome> {
        let Some(question) = self.question.filter(|_| self.phase == Phase::InProgress) else {
            return Err(QuizError::InvalidState {
                expected: Phase::InProgress,
                actual: self.phase,
            });
        };

        let correct = question.is_correct(selected);
        if correct {
            self.correct_count += 1;
        }
        log::debug!(
            "question {}: answered {} to {} ({})",
            self.current_question_number,
            selected,
            question.prompt(),
            if correct { "correct" } else { "wrong" }
        );

        let total = self.settings.question_count.value();
        if self.current_question_number >= total {
            let score = Score {
                correct: self.correct_count,
                total,
            };
            self.phase = Phase::Finished;
            self.question = None;
            self.last_score = Some(score);
            log::info!("session finished: {}", score);
            return Ok(AnswerOutcome::Finished { correct, score });
        }

        self.current_question_number += 1;
        self.question = Some(Question::generate(self.settings.multiplier, &mut self.rng));
        Ok(AnswerOutcome::Next { correct })
    }
}
