use crate::card_store::CardStore;
use crate::deck_file::{FIELD_SEPARATOR, import_cards, load_deck_from_file, save_deck_to_file};
use crate::error::FlashcardError;
use crate::quiz::{judge_answer, parse_round_count, pick_term};
use crate::report::hardest_card_message;
use crate::transcript::Transcript;
use crate::{debug_log, info_log};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::io;
use std::path::Path;

pub const ACTION_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// Line-oriented console the session talks through.
pub trait GameInterface {
    /// Next input line without its line terminator, or `None` once input is exhausted.
    fn read_line(&mut self) -> Option<String>;
    fn write_line(&mut self, line: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl UserAction {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "import" => Some(Self::Import),
            "export" => Some(Self::Export),
            "ask" => Some(Self::Ask),
            "exit" => Some(Self::Exit),
            "log" => Some(Self::Log),
            "hardest card" => Some(Self::HardestCard),
            "reset stats" => Some(Self::ResetStats),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Continue,
    Exit,
}

/// Everything one study session owns: the cards, the transcript and the quiz generator.
pub struct Session<R: Rng = StdRng> {
    store: CardStore,
    transcript: Transcript,
    rng: R,
}

impl Session<StdRng> {
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            store: CardStore::new(),
            transcript: Transcript::new(),
            rng,
        }
    }

    #[must_use]
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CardStore {
        &mut self.store
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    fn say<I: GameInterface>(&mut self, interface: &mut I, line: &str) {
        interface.write_line(line);
        self.transcript.append(line);
    }

    fn prompt<I: GameInterface>(&mut self, interface: &mut I, prompt: &str) -> Option<String> {
        self.say(interface, prompt);
        let input = interface.read_line()?;
        self.transcript.append(&input);
        Some(input)
    }

    pub fn handle<I: GameInterface>(&mut self, interface: &mut I, action: UserAction) -> LoopState {
        debug_log!("handle() - {:?}", action);
        match action {
            UserAction::Add => self.add(interface),
            UserAction::Remove => self.remove(interface),
            UserAction::Import => {
                let Some(path) = self.prompt(interface, "File name:") else {
                    return LoopState::Exit;
                };
                self.import_file(interface, &path);
                LoopState::Continue
            }
            UserAction::Export => {
                let Some(path) = self.prompt(interface, "File name:") else {
                    return LoopState::Exit;
                };
                self.export_file(interface, &path);
                LoopState::Continue
            }
            UserAction::Ask => self.ask(interface),
            UserAction::Log => self.save_log(interface),
            UserAction::HardestCard => {
                let message = hardest_card_message(&self.store);
                self.say(interface, &message);
                LoopState::Continue
            }
            UserAction::ResetStats => {
                self.store.reset_stats();
                self.say(interface, "Card statistics have been reset.");
                LoopState::Continue
            }
            UserAction::Exit => {
                self.say(interface, "Bye bye!");
                LoopState::Exit
            }
        }
    }

    fn add<I: GameInterface>(&mut self, interface: &mut I) -> LoopState {
        let Some(term) = self.prompt(interface, "The card:") else {
            return LoopState::Exit;
        };
        if term.contains(FIELD_SEPARATOR) {
            self.say(
                interface,
                &format!("The card \"{term}\" can't contain \"{FIELD_SEPARATOR}\"."),
            );
            return LoopState::Continue;
        }
        if self.store.term_exists(&term) {
            self.say(interface, &format!("The card \"{term}\" already exists."));
            return LoopState::Continue;
        }

        let Some(definition) = self.prompt(interface, "The definition of the card:") else {
            return LoopState::Exit;
        };
        if definition.contains(FIELD_SEPARATOR) {
            self.say(
                interface,
                &format!("The definition \"{definition}\" can't contain \"{FIELD_SEPARATOR}\"."),
            );
            return LoopState::Continue;
        }
        if self.store.definition_exists(&definition) {
            self.say(
                interface,
                &format!("The definition \"{definition}\" already exists."),
            );
            return LoopState::Continue;
        }

        self.store.add_card(&term, &definition, 0);
        self.say(
            interface,
            &format!("The pair (\"{term}\":\"{definition}\") has been added."),
        );
        LoopState::Continue
    }

    fn remove<I: GameInterface>(&mut self, interface: &mut I) -> LoopState {
        let Some(term) = self.prompt(interface, "Which card?") else {
            return LoopState::Exit;
        };
        match self.store.remove_card(&term) {
            Some(_) => self.say(interface, "The card has been removed."),
            None => self.say(
                interface,
                &format!("Can't remove \"{term}\": there is no such card."),
            ),
        }
        LoopState::Continue
    }

    fn ask<I: GameInterface>(&mut self, interface: &mut I) -> LoopState {
        let Some(input) = self.prompt(interface, "How many times to ask?") else {
            return LoopState::Exit;
        };
        let Some(rounds) = parse_round_count(&input) else {
            self.say(interface, "The number of times must be a positive integer.");
            return LoopState::Continue;
        };
        if self.store.is_empty() {
            self.say(interface, "There are no cards to ask about.");
            return LoopState::Continue;
        }

        for _ in 0..rounds {
            let Some(term) = pick_term(&self.store, &mut self.rng) else {
                break;
            };
            let Some(answer) = self.prompt(interface, &format!("Print the definition of \"{term}\":"))
            else {
                return LoopState::Exit;
            };
            match judge_answer(&mut self.store, &term, &answer) {
                Ok(verdict) => self.say(interface, &verdict.message()),
                Err(e) => {
                    debug_log!("ask() - judging \"{}\" failed: {}", term, e);
                    self.say(interface, &format!("Could not check the answer: {e}"));
                }
            }
        }
        LoopState::Continue
    }

    fn save_log<I: GameInterface>(&mut self, interface: &mut I) -> LoopState {
        let Some(path) = self.prompt(interface, "File name:") else {
            return LoopState::Exit;
        };
        match fs::write(&path, self.transcript.full_text()) {
            Ok(()) => {
                info_log!("save_log() - {} lines written to {}", self.transcript.len(), path);
                self.say(interface, "The log has been saved.");
            }
            Err(e) => {
                debug_log!("save_log() - {}: {}", path, e);
                self.say(interface, &format!("Failed to save the log: {e}"));
            }
        }
        LoopState::Continue
    }

    /// Loads a deck file into the store. Nothing is loaded if any line is malformed.
    pub fn import_file<I: GameInterface, P: AsRef<Path>>(&mut self, interface: &mut I, path: P) {
        let path = path.as_ref();
        match load_deck_from_file(path) {
            Ok(cards) => {
                let loaded = import_cards(&mut self.store, &cards);
                info_log!("import_file() - {} cards from {}", loaded, path.display());
                self.say(interface, &format!("{loaded} cards have been loaded."));
            }
            Err(FlashcardError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug_log!("import_file() - {} not found", path.display());
                self.say(interface, "File not found.");
            }
            Err(e) => {
                debug_log!("import_file() - {}: {}", path.display(), e);
                self.say(interface, &format!("Import failed: {e}"));
            }
        }
    }

    pub fn export_file<I: GameInterface, P: AsRef<Path>>(&mut self, interface: &mut I, path: P) {
        let path = path.as_ref();
        match save_deck_to_file(path, &self.store) {
            Ok(saved) => {
                info_log!("export_file() - {} cards to {}", saved, path.display());
                self.say(interface, &format!("{saved} cards have been saved."));
            }
            Err(e) => {
                debug_log!("export_file() - {}: {}", path.display(), e);
                self.say(interface, &format!("Export failed: {e}"));
            }
        }
    }
}

/// Runs commands until `exit` or end of input.
pub fn game_loop<R: Rng, I: GameInterface>(session: &mut Session<R>, interface: &mut I) {
    loop {
        let Some(input) = session.prompt(interface, ACTION_PROMPT) else {
            info_log!("game_loop() - input exhausted, exiting");
            session.say(interface, "Bye bye!");
            break;
        };

        let state = match UserAction::parse(&input) {
            Some(action) => session.handle(interface, action),
            None => {
                session.say(interface, "Invalid action.");
                LoopState::Continue
            }
        };
        if state == LoopState::Exit {
            break;
        }
        session.say(interface, "");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted console that remembers everything written to it.
    struct ScriptedInterface {
        input: VecDeque<String>,
        output: Vec<String>,
    }

    impl ScriptedInterface {
        fn new(lines: &[&str]) -> Self {
            Self {
                input: lines.iter().map(|l| (*l).to_string()).collect(),
                output: Vec::new(),
            }
        }

        fn printed(&self, line: &str) -> bool {
            self.output.iter().any(|l| l == line)
        }
    }

    impl GameInterface for ScriptedInterface {
        fn read_line(&mut self) -> Option<String> {
            self.input.pop_front()
        }

        fn write_line(&mut self, line: &str) {
            self.output.push(line.to_string());
        }
    }

    fn run(session: &mut Session, lines: &[&str]) -> ScriptedInterface {
        let mut interface = ScriptedInterface::new(lines);
        game_loop(session, &mut interface);
        interface
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(UserAction::parse("add"), Some(UserAction::Add));
        assert_eq!(UserAction::parse(" hardest card "), Some(UserAction::HardestCard));
        assert_eq!(UserAction::parse("reset stats"), Some(UserAction::ResetStats));
        assert_eq!(UserAction::parse("hardest"), None);
        assert_eq!(UserAction::parse("ADD"), None);
    }

    #[test]
    fn test_immediate_exit() {
        let mut session = Session::with_seed(1);
        let interface = run(&mut session, &["exit"]);
        assert_eq!(interface.output, vec![ACTION_PROMPT, "Bye bye!"]);
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut session = Session::with_seed(1);
        let interface = run(&mut session, &[]);
        assert!(interface.printed("Bye bye!"));
    }

    #[test]
    fn test_invalid_action_reprompts() {
        let mut session = Session::with_seed(1);
        let interface = run(&mut session, &["fly", "exit"]);
        assert!(interface.printed("Invalid action."));
        assert_eq!(
            interface.output.iter().filter(|l| *l == ACTION_PROMPT).count(),
            2
        );
    }

    #[test]
    fn test_add_card() {
        let mut session = Session::with_seed(1);
        let interface = run(&mut session, &["add", "France", "Paris", "exit"]);
        assert!(interface.printed("The pair (\"France\":\"Paris\") has been added."));
        assert_eq!(session.store().definition_for_term("France"), Some("Paris"));
    }

    #[test]
    fn test_add_duplicate_term_and_definition() {
        let mut session = Session::with_seed(1);
        session.store_mut().add_card("France", "Paris", 0);
        let interface = run(
            &mut session,
            &["add", "France", "add", "Italy", "Paris", "exit"],
        );

        assert!(interface.printed("The card \"France\" already exists."));
        assert!(interface.printed("The definition \"Paris\" already exists."));
        assert_eq!(session.store().count(), 1);
    }

    #[test]
    fn test_add_rejects_separator_in_term() {
        let mut session = Session::with_seed(1);
        let interface = run(&mut session, &["add", "x~y", "exit"]);

        assert!(interface.printed("The card \"x~y\" can't contain \"~\"."));
        assert!(!interface.printed("The definition of the card:"));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_add_rejects_separator_in_definition() {
        let mut session = Session::with_seed(1);
        let interface = run(&mut session, &["add", "x", "y~z", "exit"]);

        assert!(interface.printed("The definition \"y~z\" can't contain \"~\"."));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_remove_card() {
        let mut session = Session::with_seed(1);
        session.store_mut().add_card("France", "Paris", 0);
        let interface = run(
            &mut session,
            &["remove", "France", "remove", "France", "exit"],
        );

        assert!(interface.printed("The card has been removed."));
        assert!(interface.printed("Can't remove \"France\": there is no such card."));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_ask_empty_store() {
        let mut session = Session::with_seed(1);
        let interface = run(&mut session, &["ask", "3", "exit"]);
        assert!(interface.printed("There are no cards to ask about."));
    }

    #[test]
    fn test_ask_invalid_count() {
        let mut session = Session::with_seed(1);
        session.store_mut().add_card("France", "Paris", 0);
        let interface = run(&mut session, &["ask", "many", "exit"]);
        assert!(interface.printed("The number of times must be a positive integer."));
    }

    #[test]
    fn test_ask_records_errors() {
        let mut session = Session::with_seed(3);
        session.store_mut().add_card("France", "Paris", 0);
        let interface = run(
            &mut session,
            &["ask", "2", "Paris", "Rome", "hardest card", "exit"],
        );

        assert!(interface.printed("Print the definition of \"France\":"));
        assert!(interface.printed("Correct!"));
        assert!(interface.printed("Wrong. The right answer is \"Paris\"."));
        assert!(interface.printed("The hardest card is \"France\". You have 1 errors answering it."));
        assert_eq!(session.store().error_count("France"), Some(1));
    }

    #[test]
    fn test_reset_stats() {
        let mut session = Session::with_seed(1);
        session.store_mut().add_card("France", "Paris", 4);
        let interface = run(&mut session, &["reset stats", "hardest card", "exit"]);

        assert!(interface.printed("Card statistics have been reset."));
        assert!(interface.printed("There are no cards with errors."));
    }

    #[test]
    fn test_import_missing_file() {
        let mut session = Session::with_seed(1);
        let interface = run(
            &mut session,
            &["import", "/definitely/not/here/cards.txt", "exit"],
        );
        assert!(interface.printed("File not found."));
    }

    #[test]
    fn test_transcript_records_prompts_input_and_output() {
        let mut session = Session::with_seed(1);
        run(&mut session, &["add", "France", "Paris", "exit"]);

        assert_eq!(
            session.transcript().lines(),
            &[
                ACTION_PROMPT,
                "add",
                "The card:",
                "France",
                "The definition of the card:",
                "Paris",
                "The pair (\"France\":\"Paris\") has been added.",
                "",
                ACTION_PROMPT,
                "exit",
                "Bye bye!",
            ]
        );
    }
}
