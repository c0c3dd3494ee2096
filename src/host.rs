use crate::error::StarError;
use crate::models::{status_text, AddOutcome};
use crate::notifier::SnapshotCache;
use crate::random::RandomSource;
use crate::sky::Sky;

pub const USAGE: &str = "Commands: big, small, reset, init <json>, clear, show, status, quit";

/// A parsed host command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Big,
    Small,
    Reset,
    Init(&'a str),
    Clear,
    Show,
    Status,
    Quit,
    Empty,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Split a line into its command word and the trimmed remainder.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (word, argument) = match line.split_once(char::is_whitespace) {
            Some((w, a)) => (w, a.trim()),
            None => (line, ""),
        };

        match word {
            "" => Command::Empty,
            "big" => Command::Big,
            "small" => Command::Small,
            "reset" => Command::Reset,
            "init" => Command::Init(argument),
            "clear" => Command::Clear,
            "show" => Command::Show,
            "status" => Command::Status,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other),
        }
    }
}

/// What the host loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Keep reading, nothing to show.
    Continue,
    /// Keep reading after writing this line to stdout.
    Print(String),
    /// Keep reading after writing this line to stderr.
    Warn(String),
    Quit,
}

/// Run one command line against the sky.
///
/// `clear` resets the sky when a notifier is attached (the cache then holds
/// `[]`); otherwise it only empties the cache.
pub fn run_command<R: RandomSource>(
    sky: &mut Sky<R>,
    cache: &SnapshotCache,
    line: &str,
) -> Result<Control, StarError> {
    let control = match Command::parse(line) {
        Command::Empty => Control::Continue,
        Command::Big => added(sky.add_big_star()?),
        Command::Small => added(sky.add_small_star()?),
        Command::Reset => {
            sky.reset()?;
            Control::Continue
        }
        Command::Init(snapshot) => {
            sky.initialize_stars(snapshot)?;
            Control::Continue
        }
        Command::Clear => {
            if sky.has_notifier() {
                sky.reset()?;
            } else {
                cache.clear();
            }
            Control::Continue
        }
        Command::Show => Control::Print(cache.snapshot()),
        Command::Status => Control::Print(status_text(cache.star_count())),
        Command::Quit => Control::Quit,
        Command::Unknown(word) => Control::Warn(format!("Unknown command: {}\n{}", word, USAGE)),
    };
    Ok(control)
}

fn added(outcome: AddOutcome) -> Control {
    match outcome.message() {
        Some(message) => Control::Warn(message.to_string()),
        None => Control::Continue,
    }
}
