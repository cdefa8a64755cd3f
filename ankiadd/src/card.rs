use std::io;

use anki_connect::{Action, Fields, Media, Note, NoteOptions, NoteParams, Request};
use dictionary::{Word, WordMeaning};
use regex::{Regex, RegexBuilder};

use crate::input::Batch;
use crate::utilities::Prompt;

const TAG: &str = "AutoAdded";

#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("no definition text found for '{0}'")]
    NoDefinition(String),
    #[error("cannot highlight '{word}': {source}")]
    Highlight {
        word: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pronunciation {
    pub text: String,
    pub audio_url: String,
}

impl Pronunciation {
    /// First phonetic entry of the word that has both a transcription and audio.
    pub fn from_word(entry: &Word) -> Option<Self> {
        entry.complete_phonetic().map(|phonetic| Self {
            text: phonetic.text.clone().unwrap_or_default(),
            audio_url: phonetic.audio.clone().unwrap_or_default(),
        })
    }

    /// Manual fallback when the dictionary has no usable phonetic entry.
    pub fn ask(prompt: &mut impl Prompt) -> io::Result<Self> {
        if !prompt.confirm("[!] No phonetic data found. Manually add? [y/n] ")? {
            return Ok(Self::default());
        }
        let text = prompt.ask("[?] How's it pronounced? ")?;
        let audio_url = prompt.ask("[?] Enter pronunciating audio URL: ")?;
        Ok(Self {
            text: text.trim().to_owned(),
            audio_url: audio_url.trim().to_owned(),
        })
    }
}

/// Shortest string by character count; the first one wins a tie.
pub fn shortest<'a>(candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut best: Option<(usize, &str)> = None;
    for candidate in candidates {
        let len = candidate.chars().count();
        if best.map_or(true, |(best_len, _)| len < best_len) {
            best = Some((len, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}

fn bold_italic(text: &str) -> String {
    format!("<b><i>{text}</i></b>")
}

fn word_pattern(word: &str) -> Result<Regex, CardError> {
    RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
        .map_err(|source| CardError::Highlight {
            word: word.to_owned(),
            source,
        })
}

/// Wraps every case-insensitive occurrence of `word` in bold-italic markup.
pub fn emphasize(sentence: &str, word: &str) -> Result<String, CardError> {
    if word.is_empty() {
        return Ok(sentence.to_owned());
    }
    let pattern = word_pattern(word)?;
    Ok(pattern
        .replace_all(sentence, |caps: &regex::Captures| bold_italic(&caps[0]))
        .into_owned())
}

/// Example of the first meaning whose leading definition has one, with the
/// word highlighted. Falls back to the highlighted bare word.
pub fn example_sentence(word: &str, meanings: &[&WordMeaning]) -> Result<String, CardError> {
    let example = meanings
        .iter()
        .filter_map(|meaning| meaning.definitions.first())
        .filter_map(|definition| definition.example.as_deref())
        .find(|example| !example.is_empty());
    match example {
        Some(example) => emphasize(example, word),
        None => Ok(bold_italic(word)),
    }
}

pub fn word_type_label(meanings: &[&WordMeaning]) -> String {
    meanings
        .iter()
        .filter_map(|meaning| meaning.part_of_speech.as_deref())
        .map(|part_of_speech| format!("({part_of_speech})"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shortest of the meanings' leading definitions.
pub fn definition_text<'a>(meanings: &[&'a WordMeaning]) -> Option<&'a str> {
    shortest(
        meanings
            .iter()
            .filter_map(|meaning| meaning.definitions.first())
            .map(|definition| definition.definition.as_str())
            .filter(|definition| !definition.is_empty()),
    )
}

/// Builds the note-creation request for `word` from its dictionary entry.
pub fn assemble(
    batch: &Batch,
    word: &str,
    entry: &Word,
    pronunciation: &Pronunciation,
    image_url: Option<&str>,
) -> Result<Request<NoteParams>, CardError> {
    let meanings: Vec<&WordMeaning> = entry.usable_meanings().collect();

    let example = example_sentence(word, &meanings)?;
    let word_type = word_type_label(&meanings);
    let definition =
        definition_text(&meanings).ok_or_else(|| CardError::NoDefinition(word.to_owned()))?;

    let mut note = Note {
        deck_name: batch.deck.clone(),
        model_name: batch.card_type.clone(),
        fields: Fields {
            front: format!("{example} {}\n\n\n", pronunciation.text),
            back: format!("{word_type} {definition}\n\n\n"),
        },
        options: NoteOptions {
            close_after_adding: true,
        },
        tags: vec![TAG.to_owned()],
        picture: Vec::new(),
        audio: Vec::new(),
    };
    if let Some(url) = image_url.filter(|url| !url.is_empty()) {
        note.picture.push(Media {
            url: url.to_owned(),
            filename: format!("{word}.png"),
            fields: vec!["Back".to_owned()],
        });
    }
    if !pronunciation.audio_url.is_empty() {
        note.audio.push(Media {
            url: pronunciation.audio_url.clone(),
            filename: format!("{word}.mp3"),
            fields: vec!["Front".to_owned()],
        });
    }

    Ok(Request::new(
        Action::for_mode(batch.headless),
        NoteParams { note },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::scripted::Scripted;
    use serde_json::json;

    fn batch(headless: bool) -> Batch {
        Batch {
            deck: "English".to_owned(),
            words: vec!["test".to_owned()],
            card_type: "Basic (and reversed card)".to_owned(),
            headless,
        }
    }

    fn entry(value: serde_json::Value) -> Word {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_shortest_is_stable() {
        assert_eq!(shortest(["aaaaaaaaaaaa", "bbbbb", "cccccccccccccccccccc"]), Some("bbbbb"));
        assert_eq!(shortest(["abc", "xyz", "ab", "cd"]), Some("ab"));
        assert_eq!(shortest(["ééé", "abcd"]), Some("ééé"));
        assert_eq!(shortest(Vec::<&str>::new()), None);
    }

    #[test]
    fn test_emphasize_is_case_insensitive_and_preserves_text() {
        let sentence = "Test your knowledge: a TEST of skill, not a contest.";
        assert_eq!(
            emphasize(sentence, "test").unwrap(),
            "<b><i>Test</i></b> your knowledge: a <b><i>TEST</i></b> of skill, not a con<b><i>test</i></b>."
        );
    }

    #[test]
    fn test_emphasize_escapes_the_word() {
        assert_eq!(
            emphasize("Use c++ or c+ daily.", "c++").unwrap(),
            "Use <b><i>c++</i></b> or c+ daily."
        );
    }

    #[test]
    fn test_example_falls_back_to_bare_word() {
        let word = entry(json!({
            "word": "test",
            "meanings": [{"partOfSpeech": "noun", "definitions": [{"definition": "A trial."}]}]
        }));
        let meanings: Vec<_> = word.usable_meanings().collect();
        assert_eq!(example_sentence("test", &meanings).unwrap(), "<b><i>test</i></b>");
    }

    #[test]
    fn test_example_only_looks_at_leading_definitions() {
        let word = entry(json!({
            "word": "run",
            "meanings": [
                {"partOfSpeech": "verb", "definitions": [
                    {"definition": "To move swiftly."},
                    {"definition": "To operate.", "example": "Run the engine."}
                ]},
                {"partOfSpeech": "noun", "definitions": [
                    {"definition": "An act of running.", "example": "I went for a run."}
                ]}
            ]
        }));
        let meanings: Vec<_> = word.usable_meanings().collect();
        assert_eq!(
            example_sentence("run", &meanings).unwrap(),
            "I went for a <b><i>run</i></b>."
        );
    }

    #[test]
    fn test_word_type_label_in_encounter_order() {
        let word = entry(json!({
            "word": "fish",
            "meanings": [
                {"partOfSpeech": "noun", "definitions": [{"definition": "A cold-blooded animal."}]},
                {"partOfSpeech": "verb", "definitions": [{"definition": "To catch fish."}]}
            ]
        }));
        let meanings: Vec<_> = word.usable_meanings().collect();
        assert_eq!(word_type_label(&meanings), "(noun) (verb)");
    }

    #[test]
    fn test_back_uses_shortest_definition() {
        let word = entry(json!({
            "word": "set",
            "meanings": [
                {"partOfSpeech": "noun", "definitions": [{"definition": "twelve chars"}]},
                {"partOfSpeech": "verb", "definitions": [{"definition": "five."}]},
                {"partOfSpeech": "adjective", "definitions": [{"definition": "twenty characters!!!"}]}
            ]
        }));
        let request =
            assemble(&batch(true), "set", &word, &Pronunciation::default(), None).unwrap();
        assert_eq!(
            request.params.note.fields.back,
            "(noun) (verb) (adjective) five.\n\n\n"
        );
        assert_eq!(request.action, Action::AddNote);
    }

    #[test]
    fn test_missing_definition_is_an_error() {
        let word = entry(json!({
            "word": "blank",
            "meanings": [{"partOfSpeech": "noun", "definitions": [{"definition": ""}]}]
        }));
        let error = assemble(&batch(false), "blank", &word, &Pronunciation::default(), None)
            .unwrap_err();
        assert!(matches!(error, CardError::NoDefinition(word) if word == "blank"));
    }

    #[test]
    fn test_audio_attachment_from_pronunciation() {
        let word = entry(json!({
            "word": "hello",
            "phonetics": [{"text": "/həˈloʊ/", "audio": "https://example.com/hello.mp3"}],
            "meanings": [{"partOfSpeech": "exclamation", "definitions": [
                {"definition": "Used as a greeting.", "example": "Hello there, Katie!"}
            ]}]
        }));
        let pronunciation = Pronunciation::from_word(&word).unwrap();
        let request = assemble(&batch(false), "hello", &word, &pronunciation, None).unwrap();
        let note = &request.params.note;
        assert_eq!(
            note.fields.front,
            "<b><i>Hello</i></b> there, Katie! /həˈloʊ/\n\n\n"
        );
        assert_eq!(
            note.audio,
            vec![Media {
                url: "https://example.com/hello.mp3".to_owned(),
                filename: "hello.mp3".to_owned(),
                fields: vec!["Front".to_owned()],
            }]
        );
        assert!(note.picture.is_empty());
    }

    #[test]
    fn test_pronunciation_prompt() {
        let mut prompt = Scripted::new(&["y", " /tɛst/ ", "https://example.com/test.mp3"]);
        let pronunciation = Pronunciation::ask(&mut prompt).unwrap();
        assert_eq!(pronunciation.text, "/tɛst/");
        assert_eq!(pronunciation.audio_url, "https://example.com/test.mp3");

        let mut prompt = Scripted::new(&["n"]);
        assert_eq!(Pronunciation::ask(&mut prompt).unwrap(), Pronunciation::default());
        assert_eq!(prompt.asked.len(), 1);
    }

    #[test]
    fn test_end_to_end_envelope() {
        let word = entry(json!({
            "word": "test",
            "phonetics": [{"text": "/tɛst/"}, {"audio": "https://example.com/test.mp3"}],
            "meanings": [
                {"partOfSpeech": "noun", "definitions": [
                    {"definition": "A challenge, trial."},
                    {"definition": "An examination given to test knowledge."}
                ]},
                {"partOfSpeech": "verb", "definitions": [
                    {"definition": "To challenge or evaluate someone or something."}
                ]}
            ]
        }));
        assert!(Pronunciation::from_word(&word).is_none());
        let image = "https://encrypted-tbn0.gstatic.com/images?q=tbn:test";

        let request = assemble(
            &batch(false),
            "test",
            &word,
            &Pronunciation::default(),
            Some(image),
        )
        .unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["action"], "guiAddCards");
        assert_eq!(value["version"], 6);
        let note = &value["params"]["note"];
        assert_eq!(note["deckName"], "English");
        assert_eq!(note["modelName"], "Basic (and reversed card)");
        assert_eq!(note["fields"]["Front"], "<b><i>test</i></b> \n\n\n");
        assert_eq!(
            note["fields"]["Back"],
            "(noun) (verb) A challenge, trial.\n\n\n"
        );
        assert_eq!(note["options"], json!({"closeAfterAdding": true}));
        assert_eq!(note["tags"], json!(["AutoAdded"]));
        assert_eq!(
            note["picture"],
            json!([{"url": image, "filename": "test.png", "fields": ["Back"]}])
        );
        assert!(note.get("audio").is_none());
    }
}
