use crate::card_store::CardStore;

/// Formats the hardest-card query for display.
#[must_use]
pub fn hardest_card_message(store: &CardStore) -> String {
    let (terms, errors) = store.hardest_cards();
    match terms.as_slice() {
        [] => "There are no cards with errors.".to_string(),
        [term] => format!("The hardest card is \"{term}\". You have {errors} errors answering it."),
        _ => {
            let quoted: Vec<String> = terms.iter().map(|t| format!("\"{t}\"")).collect();
            format!(
                "The hardest cards are {}. You have {errors} errors answering them.",
                quoted.join(", ")
            )
        }
    }
}
