//! Interests domain module.
//!
//! Pure, I/O-free pieces of the survey analysis pipeline.
//!
//! # Module Structure
//!
//! - `lexicon` - Stopword / multi-word keyword entries and per-run snapshot
//! - `extraction` - Phrase-protecting tokenizer, frequency ranker, selector
//! - `taxonomy` - Fixed category list and fuzzy category matcher
//! - `edit_window` - Minimum interval between analyses
//! - `analysis` - SurveyAnalysis aggregate and outcome types
//! - `stage` - AnalysisStage state machine

mod analysis;
mod edit_window;
mod extraction;
mod lexicon;
mod stage;
mod taxonomy;

pub use analysis::{
    AnalysisOutcome, InterestExtraction, SurveyAnalysis, SurveyResponse, SurveySubmission,
};
pub use edit_window::{EditWindow, DEFAULT_EDIT_WINDOW_DAYS, RETRY_AFTER_DETAIL};
pub use extraction::{InterestExtractor, RankedToken, MAX_INTERESTS};
pub use lexicon::{LexicalEntry, LexicalKind, LexiconSnapshot};
pub use stage::AnalysisStage;
pub use taxonomy::{
    candidate_labels, CategoryMatch, CategoryMatcher, CATEGORIES, DEFAULT_MATCH_THRESHOLD,
};
