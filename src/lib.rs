// Library interface for flashcards
// This allows integration tests to access internal modules

pub mod card_store;
pub mod cli;
pub mod deck_file;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod quiz;
pub mod report;
pub mod transcript;

// Re-export commonly used items for easier testing
pub use card_store::{Card, CardStore};
pub use deck_file::{import_cards, load_deck_from_file, parse_deck, render_deck, save_deck_to_file};
pub use error::{FlashcardError, Result};
pub use game_state::{GameInterface, Session, UserAction, game_loop};
pub use quiz::{Verdict, judge_answer, pick_term};
pub use report::hardest_card_message;
pub use transcript::Transcript;
