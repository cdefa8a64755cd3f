use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Word {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<WordMeaning>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    /// Kept as the API spells it ("noun", "exclamation", ...).
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<WordDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordDefinition {
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl Phonetic {
    /// A phonetic entry is usable on a card only when it has both a
    /// transcription and an audio file.
    pub fn is_complete(&self) -> bool {
        matches!(&self.text, Some(text) if !text.is_empty())
            && matches!(&self.audio, Some(audio) if !audio.is_empty())
    }
}

impl WordMeaning {
    pub fn is_usable(&self) -> bool {
        matches!(&self.part_of_speech, Some(pos) if !pos.is_empty())
            && !self.definitions.is_empty()
    }
}

impl Word {
    /// First phonetic entry carrying both text and audio.
    pub fn complete_phonetic(&self) -> Option<&Phonetic> {
        self.phonetics.iter().find(|phonetic| phonetic.is_complete())
    }

    /// Meanings that have a part of speech and at least one definition.
    pub fn usable_meanings(&self) -> impl Iterator<Item = &WordMeaning> {
        self.meanings.iter().filter(|meaning| meaning.is_usable())
    }
}
