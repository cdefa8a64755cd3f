use reqwest::StatusCode;
use serde::Deserialize;

use crate::{DictionaryError, NotFoundError, Word};

pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Body the API sends alongside a 404.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Word, DictionaryError> {
    let endpoint = format!("{}/{word}", base_url.trim_end_matches('/'));
    tracing::debug!(%endpoint, "querying dictionary");
    let res = client
        .get(&endpoint)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();
    let body = res.text().await.map_err(DictionaryError::Fetch)?;
    if status == StatusCode::NOT_FOUND {
        return Err(DictionaryError::NotFound(not_found(word, &body)));
    }
    if !status.is_success() {
        return Err(DictionaryError::Status(status));
    }
    first_entry(&body)
}

fn not_found(word: &str, body: &str) -> NotFoundError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("no definitions found for '{word}'"));
    NotFoundError { message }
}

/// The API answers with an array of entries; only the first one is used.
pub(crate) fn first_entry(body: &str) -> Result<Word, DictionaryError> {
    let entries: Vec<Word> = serde_json::from_str(body).map_err(DictionaryError::Deserialize)?;
    entries.into_iter().next().ok_or(DictionaryError::Empty)
}
