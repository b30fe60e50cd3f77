//! Category taxonomy and fuzzy category matching.
//!
//! Similarity: `strsim::normalized_levenshtein` against the whole category
//! name and against each of its words; the best of those is the score.

use std::collections::HashSet;
use strsim::normalized_levenshtein;

/// The fixed taxonomy of broad interest categories, in priority order.
pub const CATEGORIES: [&str; 34] = [
    "Sports",
    "Technology",
    "Arts",
    "Health & Wellness",
    "Business",
    "Education",
    "Travel",
    "Environment",
    "Personal Development",
    "Food & Cooking",
    "Gaming",
    "Finance",
    "Music",
    "Science",
    "Literature",
    "Fashion",
    "Social Issues",
    "History",
    "Mathematics",
    "Physics",
    "Biology",
    "Chemistry",
    "Engineering",
    "Computer Science",
    "Psychology",
    "Sociology",
    "Philosophy",
    "Economics",
    "Political Science",
    "Linguistics",
    "Environmental Science",
    "Statistics",
    "Art History",
    "Music Theory",
];

/// Default minimum similarity for a category match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// A category match with its similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMatch {
    pub category: &'static str,
    pub score: f64,
}

/// Fuzzy matcher over the fixed taxonomy.
#[derive(Debug, Clone, Copy)]
pub struct CategoryMatcher {
    threshold: f64,
}

impl Default for CategoryMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }
}

impl CategoryMatcher {
    /// Creates a matcher; the threshold is clamped into `0.0..=1.0`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Similarity between an interest and one category name, in `0.0..=1.0`.
    pub fn score(interest: &str, category: &str) -> f64 {
        let interest = interest.trim().to_lowercase();
        let category = category.to_lowercase();

        category
            .split(|c: char| !c.is_alphabetic())
            .filter(|word| !word.is_empty())
            .map(|word| normalized_levenshtein(&interest, word))
            .fold(normalized_levenshtein(&interest, &category), f64::max)
    }

    /// Best category for one interest, if it clears the threshold.
    ///
    /// Ties go to the category listed first in the taxonomy.
    pub fn best_match(&self, interest: &str) -> Option<CategoryMatch> {
        let mut best: Option<CategoryMatch> = None;

        for category in CATEGORIES {
            let score = Self::score(interest, category);
            let better = match &best {
                Some(current) => score > current.score,
                None => true,
            };
            if better {
                best = Some(CategoryMatch { category, score });
            }
        }

        best.filter(|m| m.score >= self.threshold)
    }

    /// Matched categories for a list of interests, deduplicated in
    /// first-seen order.
    pub fn match_all<S: AsRef<str>>(&self, interests: &[S]) -> Vec<String> {
        let mut seen = HashSet::new();
        interests
            .iter()
            .filter_map(|interest| self.best_match(interest.as_ref()))
            .filter(|m| seen.insert(m.category))
            .map(|m| m.category.to_string())
            .collect()
    }
}

/// The first `limit` taxonomy names, used as zero-shot candidate labels.
pub fn candidate_labels(limit: usize) -> Vec<String> {
    CATEGORIES
        .iter()
        .take(limit)
        .map(|c| c.to_string())
        .collect()
}
