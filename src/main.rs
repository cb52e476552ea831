use flashcards::cli::{CliInterface, parse_cli};
use flashcards::game_state::{Session, game_loop};
use flashcards::{info_log, logging};
use std::io;

fn main() {
    logging::init();
    let cli = parse_cli();
    info_log!("main() - {:?}", cli);

    let mut session = match cli.seed {
        Some(seed) => Session::with_seed(seed),
        None => Session::new(),
    };
    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock(), io::stdout());

    if let Some(path) = &cli.import_path {
        session.import_file(&mut interface, path);
    }

    game_loop(&mut session, &mut interface);

    if let Some(path) = &cli.export_path {
        session.export_file(&mut interface, path);
    }
}
