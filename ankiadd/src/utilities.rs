use std::io::{self, Write};

/// Source of interactive answers. The run loop talks to the terminal; tests
/// hand in scripted answers.
pub trait Prompt {
    /// Shows `prompt` and returns the answer without its line ending.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;

    /// Yes/no question; anything not recognizably "yes" is a no.
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(str_to_bool(self.ask(prompt)?).unwrap_or(false))
    }
}

pub struct Terminal;

impl Prompt for Terminal {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        let line = input(prompt)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}

pub fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

pub fn str_to_bool(mut str: String) -> Option<bool> {
    str.make_ascii_lowercase();
    match str.trim() {
        "y" | "yes" | "yeah" | "yea" | "true" | "on" => Some(true),
        "n" | "no" | "nope" | "false" | "off" => Some(false),
        _ => None,
    }
}
