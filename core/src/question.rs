use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::TABLE_RANGE;

/// Distractors are drawn from `correct_answer ± DISTRACTOR_SPREAD`.
pub const DISTRACTOR_SPREAD: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub factor: u32,
    pub multiplier: u32,
    pub correct_answer: u64,
    pub options: [u64; 3],
}

impl Question {
    /// Draws a factor from the table range and builds a question around it.
    pub fn generate<R: Rng + ?Sized>(multiplier: u32, rng: &mut R) -> Self {
        let factor = rng.gen_range(TABLE_RANGE);
        Self::with_factor(multiplier, factor, rng)
    }

    pub fn with_factor<R: Rng + ?Sized>(multiplier: u32, factor: u32, rng: &mut R) -> Self {
        // widened so any pair of u32 operands fits
        let correct_answer = u64::from(factor) * u64::from(multiplier);

        let mut options = vec![correct_answer];
        while options.len() < 3 {
            let offset = rng.gen_range(-DISTRACTOR_SPREAD..=DISTRACTOR_SPREAD);
            let Some(candidate) = correct_answer.checked_add_signed(offset) else {
                continue;
            };
            if candidate > 0 && !options.contains(&candidate) {
                options.push(candidate);
            }
        }
        options.shuffle(rng);

        let question = Self {
            factor,
            multiplier,
            correct_answer,
            options: [options[0], options[1], options[2]],
        };
        log::debug!("generated {} with options {:?}", question.prompt(), question.options);
        question
    }

    pub fn is_correct(&self, answer: u64) -> bool {
        answer == self.correct_answer
    }

    pub fn prompt(&self) -> String {
        format!("{} × {} = ?", self.factor, self.multiplier)
    }
}
