use crate::debug_log;
use crate::game_state::GameInterface;
use clap::Parser;
use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Flashcards CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Deck file to load before the first command
    #[arg(long = "import", value_name = "PATH")]
    pub import_path: Option<PathBuf>,

    /// Deck file to write after `exit`
    #[arg(long = "export", value_name = "PATH")]
    pub export_path: Option<PathBuf>,

    /// Seed for the quiz card picker
    #[arg(long)]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse_from(normalize_args(std::env::args_os()))
}

/// Accepts the single-dash `-import`/`-export` spellings alongside `--import`/`--export`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-import") => OsString::from("--import"),
            Some("-export") => OsString::from("--export"),
            _ => arg,
        })
        .collect()
}

/// Console over any reader/writer pair; stdin and stdout in the binary.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_line(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => {
                if input.ends_with('\n') {
                    input.pop();
                    if input.ends_with('\r') {
                        input.pop();
                    }
                }
                Some(input)
            }
            Err(e) => {
                debug_log!("read_line() - {}", e);
                None
            }
        }
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}").and_then(|()| self.writer.flush()) {
            debug_log!("write_line() - {}", e);
        }
    }
}
