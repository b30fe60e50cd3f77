//! Survey analysis handlers.

mod analyze_survey;
mod channel_materializer;

pub use analyze_survey::{
    AnalyzeSurveyCommand, AnalyzeSurveyConfig, AnalyzeSurveyHandler, AnalyzeSurveyResult,
};
pub use channel_materializer::{ChannelMaterializer, EnsureChannelsCommand, EnsureChannelsResult};
