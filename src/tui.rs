use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, IsTerminal, Write};

/// Progress lines for a single search run. They never share a stream with the listing tuples.
pub struct StatusReporter<W: Write> {
    out: W,
    color: bool,
}

impl StatusReporter<io::Stderr> {
    /// Colours only when stderr is a terminal.
    pub fn stderr() -> Self {
        let out = io::stderr();
        let color = out.is_terminal();
        Self { out, color }
    }
}

impl<W: Write> StatusReporter<W> {
    /// Plain text, no escape sequences.
    pub fn new(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn colored(out: W) -> Self {
        Self { out, color: true }
    }

    pub fn start_download(&mut self) -> io::Result<()> {
        self.line(Color::White, "Downloading listings...\n".to_string())
    }

    pub fn start_local_read(&mut self, path: &str) -> io::Result<()> {
        self.line(Color::DarkGrey, format!("Reading listings from {}\n", path))
    }

    /// Zero is reported like any other count; a changed page layout looks the same.
    pub fn finish(&mut self, listing_count: usize) -> io::Result<()> {
        let color = if listing_count > 0 { Color::Green } else { Color::Yellow };
        self.line(color, format!("Found {} listings\n\n", listing_count))
    }

    fn line(&mut self, color: Color, text: String) -> io::Result<()> {
        if self.color {
            execute!(self.out, SetForegroundColor(color), Print(text), ResetColor)
        } else {
            self.out.write_all(text.as_bytes())?;
            self.out.flush()
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
