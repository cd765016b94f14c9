//! Interactive stand-ins for the file chooser and description prompt.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

/// Asks for an image path when stdin is a terminal. Returns `None` when
/// nothing was chosen or there is no one to ask.
pub fn choose_file() -> Option<PathBuf> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return None;
    }
    let line = ask(&mut stdin.lock(), &mut io::stdout(), "Image to upload (path): ")?;
    parse_chosen_path(&line)
}

/// Asks for an optional description. Enter skips; EOF continues without one.
pub fn ask_description() -> String {
    let prompt = "Description (optional, press Enter to skip): ";
    match ask(&mut io::stdin().lock(), &mut io::stdout(), prompt) {
        Some(line) => line,
        None => {
            println!("No description entered, continuing upload.");
            String::new()
        }
    }
}

/// Writes `prompt`, reads one line and returns it trimmed. `None` on EOF or
/// read error.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Option<String> {
    write!(out, "{}", prompt).ok()?;
    out.flush().ok()?;
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Terminals that support drag-and-drop wrap paths in quotes.
fn parse_chosen_path(line: &str) -> Option<PathBuf> {
    let path = line.trim().trim_matches(|c| c == '"' || c == '\'');
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}
