use anyhow::Result;
use arboard::Clipboard;
use base64::Engine;
use std::{
    fmt,
    io::{self, Write},
};

/// How the text reached the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    System,
    /// Terminal escape sequence; only works where the terminal honours OSC 52.
    Osc52,
}

impl fmt::Display for CopyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyMethod::System => write!(f, "system clipboard"),
            CopyMethod::Osc52 => write!(f, "terminal clipboard"),
        }
    }
}

/// Copies `text` to the system clipboard, falling back to OSC 52.
pub fn copy_text(text: &str) -> Result<CopyMethod> {
    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => Ok(CopyMethod::System),
        Err(err) => {
            log::warn!("System clipboard unavailable, trying OSC 52: {err}");
            let mut stdout = io::stdout();
            stdout.write_all(osc52_sequence(text).as_bytes())?;
            stdout.flush()?;
            Ok(CopyMethod::Osc52)
        }
    }
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{encoded}\x07")
}
