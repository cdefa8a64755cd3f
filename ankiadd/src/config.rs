use std::env;

use anki_connect::ANKI_CONNECT_URL;
use dictionary::{DICTIONARY_API_URL, IMAGE_SEARCH_URL};

/// Service endpoints, overridable through the environment (or `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub anki_connect_url: String,
    pub dictionary_api_url: String,
    pub image_search_url: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };
        Self {
            anki_connect_url: var("ANKI_CONNECT_URL", ANKI_CONNECT_URL),
            dictionary_api_url: var("DICTIONARY_API_URL", DICTIONARY_API_URL),
            image_search_url: var("IMAGE_SEARCH_URL", IMAGE_SEARCH_URL),
        }
    }
}
