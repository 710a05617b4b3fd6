use crate::storage;
use eframe::egui;
use tq_core::{AnswerOutcome, Phase, QuestionCount, Session, TABLE_RANGE};

#[derive(PartialEq)]
enum FeedbackState {
    None,
    Correct,
    Incorrect { correct_answer: u64 },
}

/// What the user asked for this frame; applied once drawing is done.
enum Intent {
    SetMultiplier(u32),
    SetQuestionCount(QuestionCount),
    Start,
    SelectAnswer(u64),
}

pub struct TimesQuizApp {
    session: Session,
    feedback: FeedbackState,
}

impl Default for TimesQuizApp {
    fn default() -> Self {
        Self {
            session: Session::new(storage::load_or_default()),
            feedback: FeedbackState::None,
        }
    }
}

impl TimesQuizApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn apply(&mut self, intent: Intent) {
        let result = match intent {
            Intent::SetMultiplier(m) => self.session.set_multiplier(m),
            Intent::SetQuestionCount(c) => self.session.set_question_count(c),
            Intent::Start => self.start(),
            Intent::SelectAnswer(answer) => self.select_answer(answer),
        };
        if let Err(e) = result {
            log::warn!("ignored intent: {}", e);
        }
    }

    fn start(&mut self) -> tq_core::Result<()> {
        self.session.start()?;
        self.feedback = FeedbackState::None;
        storage::save(&self.session.settings());
        Ok(())
    }

    fn select_answer(&mut self, answer: u64) -> tq_core::Result<()> {
        let asked = self.session.question().copied();
        let outcome = self.session.submit_answer(answer)?;

        self.feedback = match (outcome, asked) {
            (AnswerOutcome::Next { correct: false }, Some(q)) => FeedbackState::Incorrect {
                correct_answer: q.correct_answer,
            },
            (AnswerOutcome::Next { correct: true }, _) => FeedbackState::Correct,
            _ => FeedbackState::None,
        };
        Ok(())
    }

    fn settings_view(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        let settings = self.session.settings();

        ui.heading("Times Table Quiz");
        ui.add_space(20.0);

        ui.horizontal(|ui| {
            ui.label(format!("Selected number {}", settings.multiplier));
            let down = settings.multiplier > *TABLE_RANGE.start();
            let up = settings.multiplier < *TABLE_RANGE.end();
            if ui.add_enabled(down, egui::Button::new("-")).clicked() {
                intents.push(Intent::SetMultiplier(settings.multiplier - 1));
            }
            if ui.add_enabled(up, egui::Button::new("+")).clicked() {
                intents.push(Intent::SetMultiplier(settings.multiplier + 1));
            }
        });

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Questions");
            for count in QuestionCount::ALL {
                if ui
                    .selectable_label(settings.question_count == count, count.to_string())
                    .clicked()
                {
                    intents.push(Intent::SetQuestionCount(count));
                }
            }
        });

        ui.add_space(20.0);

        if ui
            .add_sized([120.0, 40.0], egui::Button::new("Start"))
            .clicked()
        {
            intents.push(Intent::Start);
        }

        if let Some(score) = self.session.last_score() {
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new(format!("Score: {}", score))
                    .size(28.0)
                    .strong(),
            );
        }
    }

    fn game_view(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        let (Some(progress), Some(question)) = (self.session.progress(), self.session.question())
        else {
            return;
        };

        ui.label(progress.to_string());
        ui.add_space(20.0);
        ui.label(egui::RichText::new(question.prompt()).size(48.0).strong());
        ui.add_space(20.0);

        ui.horizontal(|ui| {
            for option in question.options {
                if ui
                    .add_sized([70.0, 50.0], egui::Button::new(option.to_string()))
                    .clicked()
                {
                    intents.push(Intent::SelectAnswer(option));
                }
            }
        });

        ui.add_space(15.0);

        match self.feedback {
            FeedbackState::None => {}
            FeedbackState::Correct => {
                ui.label(
                    egui::RichText::new("Correct!")
                        .size(20.0)
                        .color(egui::Color32::from_rgb(50, 205, 50)),
                );
            }
            FeedbackState::Incorrect { correct_answer } => {
                ui.label(
                    egui::RichText::new(format!("Wrong, it was {}", correct_answer))
                        .size(20.0)
                        .color(egui::Color32::from_rgb(220, 20, 60)),
                );
            }
        }
    }
}

impl eframe::App for TimesQuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut intents = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                match self.session.phase() {
                    Phase::InProgress => self.game_view(ui, &mut intents),
                    Phase::NotStarted | Phase::Finished => self.settings_view(ui, &mut intents),
                }
            });
        });

        for intent in intents {
            self.apply(intent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tq_core::{QuizError, Settings};

    fn app() -> TimesQuizApp {
        TimesQuizApp {
            session: Session::new(Settings::default()),
            feedback: FeedbackState::None,
        }
    }

    #[test]
    fn answer_without_a_session_reaches_the_state_guard() {
        let mut app = app();
        assert!(matches!(
            app.select_answer(4),
            Err(QuizError::InvalidState { actual: Phase::NotStarted, .. })
        ));
        assert!(app.feedback == FeedbackState::None);

        // goes through apply without panicking and leaves nothing behind
        app.apply(Intent::SelectAnswer(4));
        assert_eq!(app.session.phase(), Phase::NotStarted);
        assert_eq!(app.session.correct_count(), 0);
    }

    #[test]
    fn wrong_answer_shows_the_asked_question_answer() {
        let mut app = app();
        app.session.start().unwrap();
        let q = *app.session.question().unwrap();
        let wrong = *q.options.iter().find(|&&o| o != q.correct_answer).unwrap();

        app.select_answer(wrong).unwrap();
        assert!(app.feedback == FeedbackState::Incorrect { correct_answer: q.correct_answer });

        let next = app.session.question().unwrap().correct_answer;
        app.select_answer(next).unwrap();
        assert!(app.feedback == FeedbackState::Correct);
    }
}
