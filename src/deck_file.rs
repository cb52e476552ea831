//! Plain-text deck files.
//!
//! # Format
//! ```text
//! capital~Paris~2
//! dog~a domesticated canine~3
//! ```
//! One card per line, `term~definition~errorCount`, no header. The error count
//! is plain decimal digits (no sign). Blank lines are skipped; any other line
//! that does not split into exactly three fields fails the whole file.

use crate::card_store::{Card, CardStore};
use crate::error::{FlashcardError, Result};
use std::fmt::Write;
use std::fs;
use std::path::Path;

pub const FIELD_SEPARATOR: char = '~';

pub fn parse_deck(data: &str) -> Result<Vec<Card>> {
    let mut cards = Vec::new();
    for (idx, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        cards.push(parse_line(line, idx + 1)?);
    }
    Ok(cards)
}

fn parse_line(line: &str, line_num: usize) -> Result<Card> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [term, definition, errors] = fields.as_slice() else {
        return Err(FlashcardError::MalformedLine {
            line: line_num,
            content: line.to_string(),
        });
    };
    let invalid_count = || FlashcardError::InvalidErrorCount {
        line: line_num,
        value: (*errors).to_string(),
    };
    let digits = errors.trim();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid_count());
    }
    let error_count = digits.parse::<u32>().map_err(|_| invalid_count())?;
    Ok(Card {
        term: (*term).to_string(),
        definition: (*definition).to_string(),
        error_count,
    })
}

#[must_use]
pub fn render_deck(store: &CardStore) -> String {
    let mut out = String::new();
    for (term, definition, errors) in store.export_representation() {
        let _ = writeln!(out, "{term}{FIELD_SEPARATOR}{definition}{FIELD_SEPARATOR}{errors}");
    }
    out
}

/// Adds parsed cards to the store, overwriting same-term cards.
///
/// Definition uniqueness is not checked here; only interactive `add` enforces it.
pub fn import_cards(store: &mut CardStore, cards: &[Card]) -> usize {
    for card in cards {
        store.add_card(&card.term, &card.definition, card.error_count);
    }
    cards.len()
}

pub fn load_deck_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Card>> {
    let data = fs::read_to_string(path)?;
    parse_deck(&data)
}

/// Writes every card to `path`, returning how many were written.
pub fn save_deck_to_file<P: AsRef<Path>>(path: P, store: &CardStore) -> Result<usize> {
    fs::write(path, render_deck(store))?;
    Ok(store.count())
}
