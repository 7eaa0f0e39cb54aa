//! Lexicon Sentiment Analyzer
//!
//! Scores English text against a fixed valence lexicon. Word
//! polarities sit on a roughly ±4 scale; the summed score is
//! normalized into a compound score in [-1, 1]. Negators within the
//! three preceding tokens flip and damp a word's valence, booster
//! adverbs scale it, and exclamation marks add sign-aligned emphasis.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Damping applied when a valence is flipped by a negator
const NEGATION_FACTOR: f32 = -0.74;

/// Valence shift contributed by a booster or dampener adverb
const BOOSTER_STEP: f32 = 0.293;

/// Booster two tokens back counts slightly less
const SECOND_BOOSTER_SCALE: f32 = 0.95;

/// Emphasis added per exclamation mark, sign-aligned
const EXCLAIM_STEP: f32 = 0.292;

/// At most this many exclamation marks count
const MAX_EXCLAIM: usize = 4;

/// Normalization constant for the compound score
const NORMALIZE_ALPHA: f32 = 15.0;

/// Compound thresholds for classification
const POSITIVE_THRESHOLD: f32 = 0.05;
const NEGATIVE_THRESHOLD: f32 = -0.05;

/// Fixed word valences
const LEXICON: &[(&str, f32)] = &[
    // positive
    ("admire", 2.4),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bless", 2.3),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("celebrate", 2.7),
    ("charming", 2.4),
    ("cheerful", 2.5),
    ("comfortable", 1.9),
    ("confident", 2.2),
    ("delicious", 2.5),
    ("delight", 2.9),
    ("delighted", 2.9),
    ("eager", 1.6),
    ("easy", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 2.3),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("free", 1.6),
    ("fresh", 1.3),
    ("friend", 2.2),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("generous", 2.3),
    ("gentle", 1.9),
    ("gift", 1.9),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.6),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("honest", 2.3),
    ("hope", 1.9),
    ("hopeful", 2.0),
    ("impressive", 2.3),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("kind", 2.4),
    ("laugh", 2.6),
    ("like", 1.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("lucky", 2.4),
    ("magnificent", 3.0),
    ("nice", 1.8),
    ("peaceful", 2.2),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 2.2),
    ("positive", 2.4),
    ("pretty", 2.2),
    ("proud", 2.2),
    ("relaxed", 1.8),
    ("relief", 1.9),
    ("safe", 1.8),
    ("satisfied", 2.0),
    ("smart", 1.7),
    ("smile", 2.1),
    ("splendid", 2.9),
    ("strong", 2.3),
    ("success", 2.7),
    ("successful", 2.7),
    ("super", 2.9),
    ("superb", 3.1),
    ("support", 1.7),
    ("sweet", 2.0),
    ("thank", 1.9),
    ("thanks", 1.9),
    ("trust", 2.3),
    ("useful", 1.9),
    ("victory", 2.8),
    ("warm", 1.6),
    ("welcome", 2.0),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("wow", 2.8),
    // negative
    ("afraid", -2.2),
    ("angry", -2.3),
    ("annoyed", -1.8),
    ("annoying", -1.7),
    ("anxious", -1.9),
    ("awful", -2.0),
    ("bad", -2.5),
    ("boring", -1.3),
    ("broken", -1.6),
    ("cruel", -2.9),
    ("cry", -2.1),
    ("danger", -2.4),
    ("dangerous", -2.3),
    ("dead", -3.3),
    ("death", -2.9),
    ("depressed", -2.6),
    ("difficult", -1.5),
    ("dirty", -2.0),
    ("disappointed", -2.3),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("disgusting", -2.9),
    ("dull", -1.7),
    ("enemy", -2.4),
    ("evil", -3.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.5),
    ("fear", -2.2),
    ("frustrated", -2.4),
    ("hate", -2.7),
    ("hated", -2.6),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("ill", -1.8),
    ("kill", -3.4),
    ("lonely", -2.2),
    ("lose", -2.0),
    ("lost", -1.3),
    ("mad", -2.2),
    ("mess", -1.9),
    ("miserable", -2.7),
    ("pain", -2.5),
    ("painful", -2.4),
    ("poor", -1.9),
    ("problem", -1.7),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scared", -2.2),
    ("sick", -2.3),
    ("sorry", -1.1),
    ("stupid", -2.4),
    ("terrible", -2.1),
    ("tired", -1.7),
    ("trouble", -2.0),
    ("ugly", -2.3),
    ("unhappy", -2.3),
    ("upset", -2.1),
    ("war", -2.9),
    ("waste", -1.8),
    ("weak", -1.9),
    ("worried", -2.0),
    ("worry", -1.9),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Words that flip the valence of a following lexicon word
const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "nowhere", "neither", "nor", "cannot", "can't",
    "cant", "won't", "wont", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't",
    "isnt", "aren't", "arent", "wasn't", "wasnt", "weren't", "werent", "without", "hardly",
    "barely", "rarely", "seldom",
];

/// Adverbs that intensify (positive step) or dampen (negative step)
const BOOSTERS: &[(&str, f32)] = &[
    ("absolutely", BOOSTER_STEP),
    ("completely", BOOSTER_STEP),
    ("especially", BOOSTER_STEP),
    ("extremely", BOOSTER_STEP),
    ("highly", BOOSTER_STEP),
    ("incredibly", BOOSTER_STEP),
    ("particularly", BOOSTER_STEP),
    ("really", BOOSTER_STEP),
    ("remarkably", BOOSTER_STEP),
    ("so", BOOSTER_STEP),
    ("totally", BOOSTER_STEP),
    ("truly", BOOSTER_STEP),
    ("utterly", BOOSTER_STEP),
    ("very", BOOSTER_STEP),
    ("kinda", -BOOSTER_STEP),
    ("marginally", -BOOSTER_STEP),
    ("occasionally", -BOOSTER_STEP),
    ("partly", -BOOSTER_STEP),
    ("slightly", -BOOSTER_STEP),
    ("somewhat", -BOOSTER_STEP),
];

lazy_static! {
    static ref LEXICON_MAP: HashMap<&'static str, f32> = LEXICON.iter().copied().collect();
    static ref NEGATOR_SET: HashSet<&'static str> = NEGATORS.iter().copied().collect();
    static ref BOOSTER_MAP: HashMap<&'static str, f32> = BOOSTERS.iter().copied().collect();
    static ref WORD_RE: Regex = Regex::new(r"[a-z']+").expect("valid regex");
}

/// Sentiment class derived from the compound score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Classify a compound score
    pub fn from_compound(score: f32) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lexicon-based sentiment analyzer
#[derive(Debug, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Compound polarity score in [-1, 1]; 0.0 for text with no
    /// scored words
    pub fn polarity(&self, text: &str) -> f32 {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = WORD_RE.find_iter(&lowered).map(|m| m.as_str()).collect();

        if tokens.is_empty() {
            return 0.0;
        }

        let mut sum = 0.0f32;
        for (i, token) in tokens.iter().enumerate() {
            let valence = match LEXICON_MAP.get(token) {
                Some(v) => *v,
                None => continue,
            };

            sum += self.adjusted_valence(valence, i, &tokens);
        }

        if sum != 0.0 {
            let bangs = text.matches('!').count().min(MAX_EXCLAIM);
            let emphasis = bangs as f32 * EXCLAIM_STEP;
            sum += if sum > 0.0 { emphasis } else { -emphasis };
        }

        let compound = sum / (sum * sum + NORMALIZE_ALPHA).sqrt();
        compound.clamp(-1.0, 1.0)
    }

    /// Score and classify in one pass
    pub fn analyze(&self, text: &str) -> (f32, Sentiment) {
        let score = self.polarity(text);
        (score, Sentiment::from_compound(score))
    }

    /// Apply booster and negation context from the preceding tokens
    fn adjusted_valence(&self, valence: f32, index: usize, tokens: &[&str]) -> f32 {
        let sign = if valence > 0.0 { 1.0 } else { -1.0 };
        let mut scalar = valence;

        // Boosters up to two tokens back
        for back in 1..=2usize {
            if back > index {
                break;
            }
            if let Some(step) = BOOSTER_MAP.get(tokens[index - back]) {
                let scale = if back == 1 { 1.0 } else { SECOND_BOOSTER_SCALE };
                scalar += sign * step * scale;
            }
        }

        // Negation up to three tokens back
        let window_start = index.saturating_sub(3);
        let negated = tokens[window_start..index]
            .iter()
            .any(|t| NEGATOR_SET.contains(t));
        if negated {
            scalar *= NEGATION_FACTOR;
        }

        scalar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let analyzer = SentimentAnalyzer::new();
        let (score, class) = analyzer.analyze("I am very happy today");
        assert!(score > POSITIVE_THRESHOLD);
        assert_eq!(class, Sentiment::Positive);
    }

    #[test]
    fn test_negative_text() {
        let analyzer = SentimentAnalyzer::new();
        let (score, class) = analyzer.analyze("this is a terrible disaster");
        assert!(score < NEGATIVE_THRESHOLD);
        assert_eq!(class, Sentiment::Negative);
    }

    #[test]
    fn test_neutral_text() {
        let analyzer = SentimentAnalyzer::new();
        let (score, class) = analyzer.analyze("the table is near the window");
        assert_eq!(score, 0.0);
        assert_eq!(class, Sentiment::Neutral);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.polarity(""), 0.0);
        assert_eq!(analyzer.polarity("!!! ... 123"), 0.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let analyzer = SentimentAnalyzer::new();
        let plain = analyzer.polarity("the food was good");
        let negated = analyzer.polarity("the food was not good");
        assert!(plain > 0.0);
        assert!(negated < 0.0);

        // Flipping a negative word turns mildly positive
        assert!(analyzer.polarity("the movie was not terrible") > 0.0);
    }

    #[test]
    fn test_booster_amplifies() {
        let analyzer = SentimentAnalyzer::new();
        let plain = analyzer.polarity("the trip was good");
        let boosted = analyzer.polarity("the trip was very good");
        assert!(boosted > plain);

        let damped = analyzer.polarity("the trip was slightly good");
        assert!(damped < plain);
    }

    #[test]
    fn test_exclamation_emphasis() {
        let analyzer = SentimentAnalyzer::new();
        let plain = analyzer.polarity("what a great day");
        let excited = analyzer.polarity("what a great day!!");
        assert!(excited > plain);

        // Emphasis follows the sign, it never flips it
        let angry = analyzer.polarity("this is bad!!");
        assert!(angry < analyzer.polarity("this is bad"));
    }

    #[test]
    fn test_compound_bounds() {
        let analyzer = SentimentAnalyzer::new();
        let score = analyzer.polarity(
            "love love love great great wonderful amazing awesome best superb magnificent!!!",
        );
        assert!(score > 0.9);
        assert!(score <= 1.0);
    }

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(Sentiment::from_compound(0.05), Sentiment::Positive);
        assert_eq!(Sentiment::from_compound(-0.05), Sentiment::Negative);
        assert_eq!(Sentiment::from_compound(0.049), Sentiment::Neutral);
        assert_eq!(Sentiment::from_compound(-0.049), Sentiment::Neutral);
        assert_eq!(Sentiment::from_compound(0.0), Sentiment::Neutral);
    }
}
