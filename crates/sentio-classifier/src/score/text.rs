use once_cell::sync::Lazy;
use regex::Regex;

use super::clamp_score;

pub const POSITIVE_WORDS: [&str; 5] = ["happy", "joy", "love", "excited", "wonderful"];
pub const NEGATIVE_WORDS: [&str; 5] = ["sad", "angry", "hate", "upset", "terrible"];

const WORD_DIVISOR: f64 = 10.0;
const EXCLAMATION_BONUS: f64 = 0.1;
const QUESTION_PENALTY: f64 = 0.05;

static POSITIVE_RE: Lazy<Regex> = Lazy::new(|| lexicon_pattern(&POSITIVE_WORDS));
static NEGATIVE_RE: Lazy<Regex> = Lazy::new(|| lexicon_pattern(&NEGATIVE_WORDS));

fn lexicon_pattern(words: &[&str]) -> Regex {
    let alternation = words.join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("lexicon words are plain ascii")
}

/// Lexicon hits and punctuation found in one piece of text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TextSignals {
    pub positive: usize,
    pub negative: usize,
    pub exclamations: usize,
    pub questions: usize,
}

impl TextSignals {
    pub fn scan(text: &str) -> Self {
        let lowered = text.to_lowercase();
        Self {
            positive: POSITIVE_RE.find_iter(&lowered).count(),
            negative: NEGATIVE_RE.find_iter(&lowered).count(),
            exclamations: lowered.matches('!').count(),
            questions: lowered.matches('?').count(),
        }
    }
}

/// Maps free text to a signed polarity score.
///
/// Each whole-word lexicon hit moves the score by 0.1, each `!` adds 0.1 and
/// each `?` takes off 0.05. Words embedded in longer words ("unhappy") do
/// not count.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSentimentScorer;

impl TextSentimentScorer {
    pub fn score(&self, text: &str) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        self.score_signals(&TextSignals::scan(text))
    }

    pub fn score_signals(&self, signals: &TextSignals) -> f64 {
        let base = (signals.positive as f64 - signals.negative as f64) / WORD_DIVISOR;
        let raw = base + signals.exclamations as f64 * EXCLAMATION_BONUS
            - signals.questions as f64 * QUESTION_PENALTY;
        let score = clamp_score(raw);
        tracing::trace!(
            target: "sentio_classifier",
            positive = signals.positive,
            negative = signals.negative,
            exclamations = signals.exclamations,
            questions = signals.questions,
            score,
            "text scored"
        );
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn every_lexicon_word_matches_itself() {
        for word in POSITIVE_WORDS {
            assert_eq!(TextSignals::scan(word).positive, 1, "{word}");
        }
        for word in NEGATIVE_WORDS {
            assert_eq!(TextSignals::scan(word).negative, 1, "{word}");
        }
    }

    #[test]
    fn empty_text_is_exactly_zero() {
        assert_eq!(TextSentimentScorer.score(""), 0.0);
    }

    #[test]
    fn text_without_hits_settles_at_zero() {
        assert_eq!(TextSentimentScorer.score("Just a regular day, nothing special."), 0.0);
        assert_eq!(TextSentimentScorer.score("   "), 0.0);
    }

    #[test]
    fn counts_whole_words_only() {
        let signals = TextSignals::scan("unhappy joyful lovely sadness hated");
        assert_eq!(signals.positive, 0);
        assert_eq!(signals.negative, 0);

        let signals = TextSignals::scan("happy, joy; love. (excited) wonderful");
        assert_eq!(signals.positive, 5);
    }

    #[test]
    fn unhappy_does_not_score_like_happy() {
        assert!(approx(TextSentimentScorer.score("happy"), 0.1));
        assert_eq!(TextSentimentScorer.score("unhappy"), 0.0);
    }

    #[test]
    fn matching_ignores_case() {
        let signals = TextSignals::scan("HAPPY Love TERRIBLE");
        assert_eq!(signals.positive, 2);
        assert_eq!(signals.negative, 1);
    }

    #[test]
    fn repeated_words_count_each_time() {
        assert!(approx(TextSentimentScorer.score("sad sad sad"), -0.3));
    }

    #[test]
    fn punctuation_shifts_score() {
        assert!(approx(TextSentimentScorer.score("really!"), 0.1));
        assert!(approx(TextSentimentScorer.score("really?"), -0.05));
        assert!(approx(TextSentimentScorer.score("hate it!"), 0.0));
    }

    #[test]
    fn clamps_long_runs() {
        assert_eq!(TextSentimentScorer.score(&"!".repeat(40)), 1.0);
        assert_eq!(TextSentimentScorer.score(&"hate ".repeat(40)), -1.0);
    }
}
