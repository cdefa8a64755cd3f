use serde::Serialize;

/// Protocol version spoken by this client.
pub const API_VERSION: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Adds the note directly, no window.
    AddNote,
    /// Opens the "Add" dialog pre-filled with the note.
    GuiAddCards,
}

impl Action {
    pub fn for_mode(headless: bool) -> Self {
        if headless {
            Action::AddNote
        } else {
            Action::GuiAddCards
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Request<P> {
    pub action: Action,
    pub version: u8,
    pub params: P,
}

impl<P> Request<P> {
    pub fn new(action: Action, params: P) -> Self {
        Self {
            action,
            version: API_VERSION,
            params,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NoteParams {
    pub note: Note,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub deck_name: String,
    pub model_name: String,
    pub fields: Fields,
    pub options: NoteOptions,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub picture: Vec<Media>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audio: Vec<Media>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Fields {
    #[serde(rename = "Front")]
    pub front: String,
    #[serde(rename = "Back")]
    pub back: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    pub close_after_adding: bool,
}

/// A file the service downloads from `url` and embeds in each of `fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    pub url: String,
    pub filename: String,
    pub fields: Vec<String>,
}
