use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tq_core::{AnswerOutcome, Phase, Question, QuestionCount, Session, Settings, TABLE_RANGE};

fn question_count() -> impl Strategy<Value = QuestionCount> {
    prop::sample::select(QuestionCount::ALL.to_vec())
}

proptest! {
    #[test]
    fn options_are_three_distinct_positive_values(
        multiplier in TABLE_RANGE,
        factor in TABLE_RANGE,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let q = Question::with_factor(multiplier, factor, &mut rng);

        prop_assert_eq!(q.correct_answer, u64::from(factor * multiplier));
        prop_assert!(q.options.contains(&q.correct_answer));
        prop_assert!(q.options.iter().all(|&o| o > 0));
        prop_assert_ne!(q.options[0], q.options[1]);
        prop_assert_ne!(q.options[0], q.options[2]);
        prop_assert_ne!(q.options[1], q.options[2]);
    }

    #[test]
    fn generated_factor_is_in_table_range(multiplier in TABLE_RANGE, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let q = Question::generate(multiplier, &mut rng);
        prop_assert!(TABLE_RANGE.contains(&q.factor));
        prop_assert_eq!(q.multiplier, multiplier);
    }

    #[test]
    fn session_finishes_after_configured_answers(
        multiplier in TABLE_RANGE,
        count in question_count(),
        picks in prop::collection::vec(0usize..3, 20),
        seed in any::<u64>(),
    ) {
        let settings = Settings::new(multiplier, count).unwrap();
        let mut session = Session::with_rng(settings, StdRng::seed_from_u64(seed));
        session.start().unwrap();

        let total = count.value();
        let mut expected_correct = 0;
        let mut previous_correct = 0;
        for (i, &pick) in picks.iter().take(total as usize).enumerate() {
            prop_assert_eq!(session.current_question_number(), i as u32 + 1);
            let q = *session.question().unwrap();
            let selected = q.options[pick];
            if selected == q.correct_answer {
                expected_correct += 1;
            }

            let outcome = session.submit_answer(selected).unwrap();
            prop_assert!(session.correct_count() >= previous_correct);
            prop_assert!(session.correct_count() <= total);
            previous_correct = session.correct_count();

            let last = i as u32 + 1 == total;
            prop_assert_eq!(matches!(outcome, AnswerOutcome::Finished { .. }), last);
        }

        prop_assert_eq!(session.phase(), Phase::Finished);
        prop_assert_eq!(session.current_question_number(), total);
        prop_assert_eq!(session.correct_count(), expected_correct);
        let score = session.last_score().unwrap();
        prop_assert_eq!((score.correct, score.total), (expected_correct, total));
    }
}
