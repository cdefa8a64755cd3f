use std::io;

use clap::Parser;

use crate::utilities::Prompt;

pub const DEFAULT_CARD_TYPE: &str = "Basic (and reversed card)";

#[derive(Debug, Parser)]
#[command(name = "ankiadd", version, about = "Create Anki cards from dictionary lookups")]
pub struct Cli {
    /// Anki deck name
    #[arg(short, long)]
    pub deck: Option<String>,
    /// List of words to add
    #[arg(short, long, num_args = 1..)]
    pub word: Vec<String>,
    /// Note type used for the new cards
    #[arg(short = 't', long = "type", default_value = DEFAULT_CARD_TYPE)]
    pub card_type: String,
    /// Run in headless mode
    #[arg(short, long)]
    pub nogui: bool,
    /// Set verbosity
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything one run needs, with a non-empty deck and word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub deck: String,
    pub words: Vec<String>,
    pub card_type: String,
    pub headless: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    Ready(Batch),
    /// The user chose not to complete the missing input.
    Declined,
}

/// Fills in a missing deck or word list by asking, or reports that the user
/// declined.
pub fn resolve(cli: Cli, prompt: &mut impl Prompt) -> io::Result<Resolution> {
    let mut deck = cli.deck.filter(|deck| !deck.trim().is_empty());
    let mut words = cli.word;
    words.retain(|word| !word.trim().is_empty());

    if deck.is_none() || words.is_empty() {
        if !prompt.confirm("[*] No parameter set. Interactively set? [y/n] ")? {
            return Ok(Resolution::Declined);
        }
        if deck.is_none() {
            let answer = prompt.ask("[?] Which deck do you want to add to? ")?;
            deck = Some(answer.trim().to_owned()).filter(|deck| !deck.is_empty());
        }
        if words.is_empty() {
            let answer = prompt.ask("[?] Words you want to add: ")?;
            words = answer.split_whitespace().map(str::to_owned).collect();
        }
    }

    match deck {
        Some(deck) if !words.is_empty() => Ok(Resolution::Ready(Batch {
            deck,
            words,
            card_type: cli.card_type,
            headless: cli.nogui,
        })),
        _ => Ok(Resolution::Declined),
    }
}
