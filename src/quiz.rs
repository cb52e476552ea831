use crate::card_store::CardStore;
use crate::error::{FlashcardError, Result};
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong {
        expected: String,
        /// Term whose definition the given answer actually is.
        correct_for: Option<String>,
    },
}

impl Verdict {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Correct => "Correct!".to_string(),
            Self::Wrong {
                expected,
                correct_for: Some(other),
            } => format!(
                "Wrong. The right answer is \"{expected}\", but your definition is correct for \"{other}\"."
            ),
            Self::Wrong {
                expected,
                correct_for: None,
            } => format!("Wrong. The right answer is \"{expected}\"."),
        }
    }
}

/// Draws one term uniformly at random; repeated draws may return the same term.
pub fn pick_term<R: Rng>(store: &CardStore, rng: &mut R) -> Option<String> {
    let terms = store.terms();
    if terms.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..terms.len());
    Some(terms[idx].to_string())
}

/// Compares `answer` to the definition of `term` exactly (case-sensitive, untrimmed).
///
/// A wrong answer bumps the term's error count.
pub fn judge_answer(store: &mut CardStore, term: &str, answer: &str) -> Result<Verdict> {
    let expected = store
        .definition_for_term(term)
        .map(str::to_string)
        .ok_or_else(|| FlashcardError::UnknownTerm(term.to_string()))?;
    if answer == expected {
        return Ok(Verdict::Correct);
    }

    store.record_wrong_answer(term)?;
    let correct_for = if store.definition_exists(answer) {
        Some(store.term_for_definition(answer)?.to_string())
    } else {
        None
    };
    Ok(Verdict::Wrong {
        expected,
        correct_for,
    })
}

#[must_use]
pub fn parse_round_count(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|&n| n > 0)
}
