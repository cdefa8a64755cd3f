use dictionary_api::get_definition;
use image_search::search_image;

mod dictionary;
mod dictionary_api;
mod image_search;

pub use dictionary::{Phonetic, Word, WordDefinition, WordMeaning};
pub use dictionary_api::DICTIONARY_API_URL;
pub use image_search::{find_thumbnail, IMAGE_SEARCH_URL};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("request failed: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("dictionary answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed dictionary response: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("dictionary returned no entries")]
    Empty,
    #[error("{0}")]
    NotFound(NotFoundError),
}

#[derive(Debug, thiserror::Error)]
#[error("word not found: {message}")]
pub struct NotFoundError {
    pub message: String,
}

pub struct Dictionary {
    client: reqwest::Client,
    api_url: String,
    image_search_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_urls(DICTIONARY_API_URL, IMAGE_SEARCH_URL)
    }

    pub fn with_urls(api_url: impl Into<String>, image_search_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            image_search_url: image_search_url.into(),
        }
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_definition(&self.client, &self.api_url, word).await
    }

    /// Thumbnail URL for the word, `None` when the results page has none.
    pub async fn search_image(&self, word: &str) -> Result<Option<String>, DictionaryError> {
        search_image(&self.client, &self.image_search_url, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
