//! Interest extraction - phrase-protecting tokenizer, frequency ranker and
//! interest selector.
//!
//! # Algorithm
//!
//! 1. Join answers with a single space and lower-case the result.
//! 2. Pull out every configured multi-word keyword that occurs in the corpus,
//!    in stored order, replacing each occurrence with a space so its words
//!    cannot surface again as single tokens.
//! 3. Split what is left on whitespace/commas, keep alphabetic characters,
//!    drop empties and stopwords.
//! 4. Rank the single words by frequency (ties keep first occurrence).
//! 5. Phrase matches first, ranked words second, deduplicated, at most
//!    [`MAX_INTERESTS`]. Candidates longer than the channel title limit
//!    are skipped.

use std::collections::{HashMap, HashSet};

use super::LexiconSnapshot;
use crate::domain::channel::MAX_TITLE_LENGTH;

/// Upper bound on the number of interests selected per analysis.
pub const MAX_INTERESTS: usize = 3;

/// A single-word token and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedToken {
    pub word: String,
    pub count: usize,
}

/// Stateless interest extraction functions.
pub struct InterestExtractor;

impl InterestExtractor {
    /// Runs the full pipeline and returns at most [`MAX_INTERESTS`] interests.
    ///
    /// Empty input yields an empty list; there are no error conditions.
    pub fn extract<S: AsRef<str>>(answers: &[S], lexicon: &LexiconSnapshot) -> Vec<String> {
        let corpus = Self::build_corpus(answers);
        let (phrases, remainder) = Self::extract_phrases(&corpus, lexicon.keywords());
        let tokens = Self::tokenize(&remainder, lexicon);
        let ranked = Self::rank(&tokens);

        Self::select(phrases, ranked.into_iter().map(|t| t.word))
    }

    /// Joins answers with single spaces and lower-cases the result.
    pub fn build_corpus<S: AsRef<str>>(answers: &[S]) -> String {
        answers
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Extracts keyword phrases found in the corpus.
    ///
    /// Returns the matched phrases in keyword order together with the corpus
    /// with every occurrence of each matched phrase replaced by a space.
    pub fn extract_phrases(corpus: &str, keywords: &[String]) -> (Vec<String>, String) {
        let mut remainder = corpus.to_string();
        let mut matches: Vec<String> = Vec::new();

        for keyword in keywords {
            if keyword.is_empty() || matches.contains(keyword) {
                continue;
            }
            if remainder.contains(keyword.as_str()) {
                remainder = remainder.replace(keyword.as_str(), " ");
                matches.push(keyword.clone());
            }
        }

        (matches, remainder)
    }

    /// Splits text into alphabetic, non-stopword tokens in order of appearance.
    pub fn tokenize(text: &str, lexicon: &LexiconSnapshot) -> Vec<String> {
        text.split(|c: char| c.is_whitespace() || c == ',')
            .map(|piece| {
                piece
                    .chars()
                    .filter(|c| c.is_alphabetic())
                    .collect::<String>()
                    .to_lowercase()
            })
            .filter(|word| !word.is_empty() && !lexicon.is_stopword(word))
            .collect()
    }

    /// Counts tokens and orders them by count descending.
    ///
    /// The sort is stable, so equal counts keep first-occurrence order.
    pub fn rank(tokens: &[String]) -> Vec<RankedToken> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for token in tokens {
            let count = counts.entry(token.as_str()).or_insert(0);
            if *count == 0 {
                order.push(token.as_str());
            }
            *count += 1;
        }

        let mut ranked: Vec<RankedToken> = order
            .into_iter()
            .map(|word| RankedToken {
                word: word.to_string(),
                count: counts.get(word).copied().unwrap_or(0),
            })
            .collect();

        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// Merges phrase matches (first) with ranked words (second), dropping
    /// case-insensitive duplicates and truncating to [`MAX_INTERESTS`].
    ///
    /// Every selected interest becomes a channel title, so candidates over
    /// [`MAX_TITLE_LENGTH`] characters are skipped rather than selected.
    pub fn select<I>(phrases: Vec<String>, ranked: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        phrases
            .into_iter()
            .chain(ranked)
            .filter(|interest| interest.chars().count() <= MAX_TITLE_LENGTH)
            .filter(|interest| seen.insert(interest.to_lowercase()))
            .take(MAX_INTERESTS)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lexicon(stopwords: &[&str], keywords: &[&str]) -> LexiconSnapshot {
        LexiconSnapshot::new(stopwords.iter(), keywords.iter())
    }

    #[test]
    fn single_answer_without_keywords_ranks_by_first_occurrence() {
        let lex = lexicon(&["i", "love", "and", "on"], &[]);
        let interests =
            InterestExtractor::extract(&["I love jogging and hiking on weekends"], &lex);

        assert_eq!(interests, vec!["jogging", "hiking", "weekends"]);
    }

    #[test]
    fn repeated_phrase_is_extracted_once_and_never_leaks_words() {
        let lex = lexicon(&["is", "my", "i", "do", "daily"], &["web development"]);
        let interests = InterestExtractor::extract(
            &["web development is my passion", "I do web development daily"],
            &lex,
        );

        assert_eq!(interests, vec!["web development", "passion"]);
    }

    #[test]
    fn empty_input_yields_no_interests() {
        let lex = lexicon(&["the"], &["machine learning"]);
        let answers: Vec<String> = vec![];
        assert!(InterestExtractor::extract(&answers, &lex).is_empty());
        assert!(InterestExtractor::extract(&["", "   "], &lex).is_empty());
    }

    #[test]
    fn higher_frequency_words_rank_first() {
        let lex = lexicon(&[], &[]);
        let interests =
            InterestExtractor::extract(&["chess music chess", "painting music chess"], &lex);

        assert_eq!(interests, vec!["chess", "music", "painting"]);
    }

    #[test]
    fn stopwords_match_case_insensitively() {
        let lex = lexicon(&["The"], &[]);
        let interests = InterestExtractor::extract(&["THE robotics the"], &lex);
        assert_eq!(interests, vec!["robotics"]);
    }

    #[test]
    fn stopwords_apply_after_phrase_extraction() {
        // "of" is a stopword but still part of the protected phrase.
        let lex = lexicon(&["of", "i"], &["history of art"]);
        let interests = InterestExtractor::extract(&["I study history of art"], &lex);
        assert_eq!(interests, vec!["history of art", "study"]);
    }

    #[test]
    fn words_longer_than_a_channel_title_are_skipped() {
        let lex = lexicon(&[], &[]);
        let at_limit = "a".repeat(MAX_TITLE_LENGTH);
        let over_limit = "b".repeat(MAX_TITLE_LENGTH + 1);
        let answer = format!("{} hiking {} {}", over_limit, over_limit, at_limit);

        let interests = InterestExtractor::extract(&[answer.as_str()], &lex);

        assert_eq!(interests, vec!["hiking".to_string(), at_limit]);
    }

    #[test]
    fn overlong_stored_keyword_is_skipped() {
        let long_phrase = format!("deep {}", "c".repeat(MAX_TITLE_LENGTH));
        let lex = LexiconSnapshot::new(Vec::<String>::new(), vec![long_phrase.clone()]);

        let interests = InterestExtractor::extract(&[format!("{} chess", long_phrase)], &lex);

        assert_eq!(interests, vec!["chess"]);
    }

    #[test]
    fn punctuation_and_digits_are_stripped() {
        let lex = lexicon(&[], &[]);
        let interests = InterestExtractor::extract(&["coding!!, 3d-printing; r2d2"], &lex);
        assert_eq!(interests, vec!["coding", "dprinting", "rd"]);
    }

    #[test]
    fn removed_phrase_does_not_fuse_neighbours() {
        let lex = lexicon(&[], &["data science"]);
        let (phrases, remainder) = InterestExtractor::extract_phrases(
            "chessdata sciencegames",
            lex.keywords(),
        );
        assert_eq!(phrases, vec!["data science"]);
        assert_eq!(remainder, "chess games");
    }

    #[test]
    fn phrases_follow_keyword_order_not_text_order() {
        let lex = lexicon(&[], &["machine learning", "web development"]);
        let interests =
            InterestExtractor::extract(&["web development then machine learning"], &lex);
        assert_eq!(interests[0], "machine learning");
        assert_eq!(interests[1], "web development");
    }

    #[test]
    fn output_is_truncated_to_three() {
        let lex = lexicon(&[], &[]);
        let interests = InterestExtractor::extract(&["a b c d e f"], &lex);
        assert_eq!(interests.len(), MAX_INTERESTS);
    }

    #[test]
    fn rank_is_stable_for_equal_counts() {
        let tokens: Vec<String> = ["x", "y", "y", "x", "z"].iter().map(|s| s.to_string()).collect();
        let ranked = InterestExtractor::rank(&tokens);
        let words: Vec<&str> = ranked.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["x", "y", "z"]);
        assert_eq!(ranked[0].count, 2);
    }

    #[test]
    fn select_drops_case_insensitive_duplicates() {
        let selected = InterestExtractor::select(
            vec!["web development".to_string()],
            vec!["Web Development".to_string(), "art".to_string()],
        );
        assert_eq!(selected, vec!["web development", "art"]);
    }

    fn word() -> impl Strategy<Value = String> {
        "[a-e]{1,4}"
    }

    fn keyword() -> impl Strategy<Value = String> {
        (word(), word()).prop_map(|(a, b)| format!("{} {}", a, b))
    }

    proptest! {
        #[test]
        fn selection_is_bounded_and_unique(
            answers in prop::collection::vec("[a-e ,!]{0,40}", 0..5),
            stopwords in prop::collection::vec(word(), 0..4),
            keywords in prop::collection::vec(keyword(), 0..4),
        ) {
            let lex = LexiconSnapshot::new(stopwords, keywords);
            let interests = InterestExtractor::extract(&answers, &lex);

            prop_assert!(interests.len() <= MAX_INTERESTS);
            let unique: HashSet<String> = interests.iter().map(|i| i.to_lowercase()).collect();
            prop_assert_eq!(unique.len(), interests.len());
        }

        #[test]
        fn phrase_matches_precede_single_words(
            answers in prop::collection::vec("[a-e ]{0,40}", 0..5),
            keywords in prop::collection::vec(keyword(), 0..4),
        ) {
            let lex = LexiconSnapshot::new(Vec::<String>::new(), keywords);
            let interests = InterestExtractor::extract(&answers, &lex);

            let first_single = interests.iter().position(|i| !i.contains(' '));
            if let Some(idx) = first_single {
                prop_assert!(interests[idx..].iter().all(|i| !i.contains(' ')));
            }
            for interest in interests.iter().filter(|i| i.contains(' ')) {
                prop_assert!(lex.keywords().contains(interest));
            }
        }
    }
}
