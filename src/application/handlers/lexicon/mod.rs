//! Lexicon administration handlers.

mod add_lexical_entry;
mod list_lexicon;
mod remove_lexical_entry;

pub use add_lexical_entry::{AddLexicalEntryCommand, AddLexicalEntryHandler};
pub use list_lexicon::{ListLexiconHandler, ListLexiconQuery};
pub use remove_lexical_entry::{RemoveLexicalEntryCommand, RemoveLexicalEntryHandler};
