//! The card registry: term -> (definition, error count), kept in insertion order.

use crate::error::{FlashcardError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub term: String,
    pub definition: String,
    pub error_count: u32,
}

/// Exclusive owner of all cards in a session.
///
/// `add_card` is unconditional: adding a term that already exists replaces its
/// definition and error count in place (last write wins) and keeps the card's
/// original position. Uniqueness policy for interactive input lives in the
/// session layer.
#[derive(Debug, Default, Clone)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_card(&mut self, term: &str, definition: &str, initial_error_count: u32) {
        let card = Card {
            term: term.to_string(),
            definition: definition.to_string(),
            error_count: initial_error_count,
        };
        match self.position(term) {
            Some(idx) => self.cards[idx] = card,
            None => self.cards.push(card),
        }
    }

    /// Removes `term`, returning its definition, or `None` if there was no such card.
    pub fn remove_card(&mut self, term: &str) -> Option<String> {
        let idx = self.position(term)?;
        Some(self.cards.remove(idx).definition)
    }

    #[must_use]
    pub fn term_exists(&self, term: &str) -> bool {
        self.position(term).is_some()
    }

    #[must_use]
    pub fn definition_exists(&self, definition: &str) -> bool {
        self.cards.iter().any(|c| c.definition == definition)
    }

    /// Looks up the term carrying `definition`.
    ///
    /// Callers are expected to check `definition_exists` first.
    pub fn term_for_definition(&self, definition: &str) -> Result<&str> {
        self.cards
            .iter()
            .find(|c| c.definition == definition)
            .map(|c| c.term.as_str())
            .ok_or_else(|| FlashcardError::DefinitionNotFound(definition.to_string()))
    }

    #[must_use]
    pub fn definition_for_term(&self, term: &str) -> Option<&str> {
        self.card(term).map(|c| c.definition.as_str())
    }

    #[must_use]
    pub fn error_count(&self, term: &str) -> Option<u32> {
        self.card(term).map(|c| c.error_count)
    }

    pub fn record_wrong_answer(&mut self, term: &str) -> Result<()> {
        let idx = self
            .position(term)
            .ok_or_else(|| FlashcardError::UnknownTerm(term.to_string()))?;
        let card = &mut self.cards[idx];
        card.error_count = card.error_count.saturating_add(1);
        Ok(())
    }

    /// Every term sharing the highest error count, in insertion order, plus that count.
    ///
    /// An empty store and a store without errors both yield `([], 0)`.
    #[must_use]
    pub fn hardest_cards(&self) -> (Vec<String>, u32) {
        let max = self.cards.iter().map(|c| c.error_count).max().unwrap_or(0);
        if max == 0 {
            return (Vec::new(), 0);
        }
        let terms = self
            .cards
            .iter()
            .filter(|c| c.error_count == max)
            .map(|c| c.term.clone())
            .collect();
        (terms, max)
    }

    pub fn reset_stats(&mut self) {
        for card in &mut self.cards {
            card.error_count = 0;
        }
    }

    #[must_use]
    pub fn export_representation(&self) -> Vec<(String, String, u32)> {
        self.cards
            .iter()
            .map(|c| (c.term.clone(), c.definition.clone(), c.error_count))
            .collect()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn terms(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.term.as_str()).collect()
    }

    fn card(&self, term: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.term == term)
    }

    fn position(&self, term: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.term == term)
    }
}
