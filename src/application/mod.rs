//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::lexicon::{
    AddLexicalEntryCommand, AddLexicalEntryHandler, ListLexiconHandler, ListLexiconQuery,
    RemoveLexicalEntryCommand, RemoveLexicalEntryHandler,
};
pub use handlers::survey::{
    AnalyzeSurveyCommand, AnalyzeSurveyConfig, AnalyzeSurveyHandler, AnalyzeSurveyResult,
    ChannelMaterializer, EnsureChannelsCommand, EnsureChannelsResult,
};
