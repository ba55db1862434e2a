use proptest::prelude::*;
use sentio_classifier::{
    label_for_code, Emotion, EmotionClassifier, PhysiologicalScorer, TextSentimentScorer,
};

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

fn in_bounds(score: f64) -> bool {
    (-1.0..=1.0).contains(&score)
}

proptest! {
    #[test]
    fn meter_scores_stay_clamped(
        meters in proptest::collection::vec(finite_f64(), 0..6)
    ) {
        prop_assert!(in_bounds(PhysiologicalScorer.score(&meters)));
    }

    #[test]
    fn extreme_meter_magnitudes_stay_clamped(
        values in proptest::array::uniform3(prop_oneof![
            Just(f64::MAX),
            Just(f64::MIN),
            Just(f64::MIN_POSITIVE),
            Just(0.0),
            finite_f64(),
        ])
    ) {
        let score = PhysiologicalScorer.score(&values);
        prop_assert!(score.is_finite());
        prop_assert!(in_bounds(score));
    }

    #[test]
    fn text_scores_stay_clamped(text in ".{0,400}") {
        prop_assert!(in_bounds(TextSentimentScorer.score(&text)));
    }

    #[test]
    fn shouting_and_questions_stay_clamped(bangs in 0usize..200, questions in 0usize..200) {
        let text = format!("{}{}", "!".repeat(bangs), "?".repeat(questions));
        prop_assert!(in_bounds(TextSentimentScorer.score(&text)));
    }

    #[test]
    fn combined_scores_stay_clamped(
        text in "[a-z !?]{0,120}",
        meters in proptest::collection::vec(finite_f64(), 0..5)
    ) {
        let assessment = EmotionClassifier::new().assess_combined(&text, &meters);
        prop_assert!(in_bounds(assessment.score));
    }

    #[test]
    fn short_readings_never_carry_signal(
        meters in proptest::collection::vec(-1.0e6f64..1.0e6, 0..3)
    ) {
        let assessment = EmotionClassifier::new().assess_meters(&meters);
        prop_assert_eq!(assessment.score, 0.0);
        prop_assert_eq!(assessment.emotion, Emotion::Neutral);
    }

    #[test]
    fn embedded_lexicon_words_do_not_count(prefix in "[a-z]{1,6}") {
        let text = format!("{prefix}happy {prefix}hate");
        prop_assert_eq!(TextSentimentScorer.score(&text), 0.0);
    }

    #[test]
    fn label_lookup_is_total(code in any::<u32>()) {
        let name = label_for_code(code);
        prop_assert!(Emotion::ALL.iter().any(|emotion| emotion.label() == name));
        if code > 8 {
            prop_assert_eq!(name, "Neutral");
        }
    }
}
