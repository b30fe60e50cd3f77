//! HTTP adapter for lexicon administration.
//!
//! - `GET|POST /api/admin/lexicon/stopwords`, `DELETE /api/admin/lexicon/stopwords/:text`
//! - `GET|POST /api/admin/lexicon/keywords`, `DELETE /api/admin/lexicon/keywords/:text`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AddLexicalEntryRequest, LexicalEntryResponse, LexiconListResponse};
pub use handlers::LexiconAppState;
pub use routes::{lexicon_router, lexicon_routes};
