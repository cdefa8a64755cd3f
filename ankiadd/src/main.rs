use anki_connect::{AnkiConnect, NoteParams, Request};
use anyhow::Context;
use card::{assemble, Pronunciation};
use clap::Parser;
use config::Settings;
use dictionary::{Dictionary, DictionaryError, Word};
use input::{resolve, Batch, Cli, Resolution};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utilities::{Prompt, Terminal};

mod card;
mod config;
mod input;
mod utilities;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::from_env();
    let mut prompt = Terminal;
    let batch = match resolve(cli, &mut prompt)? {
        Resolution::Ready(batch) => batch,
        Resolution::Declined => {
            println!("[#] Understandable, have a nice day!");
            return Ok(());
        }
    };

    let dict = Dictionary::with_urls(&settings.dictionary_api_url, &settings.image_search_url);
    let anki = AnkiConnect::with_endpoint(&settings.anki_connect_url);
    for word in &batch.words {
        add_word(&dict, &anki, &batch, word, &mut prompt)
            .await
            .with_context(|| format!("failed to add '{word}'"))?;
    }
    Ok(())
}

/// Logs go to stderr; stdout carries the prompts.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// The two remote lookups a card needs.
trait WordSource {
    async fn definition(&self, word: &str) -> Result<Word, DictionaryError>;
    async fn image(&self, word: &str) -> Result<Option<String>, DictionaryError>;
}

impl WordSource for Dictionary {
    async fn definition(&self, word: &str) -> Result<Word, DictionaryError> {
        self.get_definition(word).await
    }

    async fn image(&self, word: &str) -> Result<Option<String>, DictionaryError> {
        self.search_image(word).await
    }
}

async fn add_word(
    dict: &Dictionary,
    anki: &AnkiConnect,
    batch: &Batch,
    word: &str,
    prompt: &mut impl Prompt,
) -> anyhow::Result<()> {
    let request = build_card(dict, batch, word, prompt).await?;

    tracing::info!("Adding card...");
    let result = anki.invoke(&request).await?;
    tracing::debug!(%result, "flashcard service accepted the note");

    tracing::info!("'{word}' added successfully");
    Ok(())
}

/// Looks the word up, falls back to asking for a pronunciation, then searches
/// for an image.
async fn build_card(
    source: &impl WordSource,
    batch: &Batch,
    word: &str,
    prompt: &mut impl Prompt,
) -> anyhow::Result<Request<NoteParams>> {
    tracing::info!("Searching for word: {word}");
    let entry = source.definition(word).await?;

    tracing::info!("Creating card...");
    let pronunciation = match Pronunciation::from_word(&entry) {
        Some(pronunciation) => pronunciation,
        None => Pronunciation::ask(prompt)?,
    };
    let image_url = source.image(word).await?;
    Ok(assemble(batch, word, &entry, &pronunciation, image_url.as_deref())?)
}
