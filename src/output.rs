//! Status reporting for the pxgen CLI.
//!
//! Lines look like Cargo's: a right-aligned, coloured verb followed by a
//! message. Everything here writes to stderr so stdout stays clean for
//! palette and category listings.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::types::Category;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";

/// Column the verbs are right-aligned to.
const VERB_WIDTH: usize = 12;

/// Colour of a status verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Work starting or done (green).
    Progress,
    /// Files and details (cyan).
    Detail,
    /// Recoverable surprises such as palette fallback (yellow).
    Caution,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[32m",
            Tone::Detail => CYAN,
            Tone::Caution => "\x1b[33m",
        }
    }
}

/// Writes status lines to stderr, coloured when stderr is a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn status(&self, verb: &str, message: &str) {
        self.announce(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.announce(Tone::Detail, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.announce(Tone::Caution, verb, message);
    }

    /// "  Generating monster (3 variations, 32x32, retro)"
    pub fn generating(&self, category: Category, count: usize, size: u32, palette: &str) {
        let message = format!(
            "{} ({}, {}x{}, {})",
            category,
            plural(count, "variation", "variations"),
            size,
            size,
            self.cyan(palette)
        );
        self.status("Generating", &message);
    }

    /// "       Wrote dist/monster.png"
    pub fn wrote(&self, path: &Path) {
        self.info("Wrote", &display_path(path));
    }

    /// "    Finished 3 files in dist"
    pub fn finished(&self, files: usize, dir: &Path) {
        let message = format!(
            "{} in {}",
            plural(files, "file", "files"),
            self.bold(&display_path(dir))
        );
        self.status("Finished", &message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Render one status line without the trailing newline.
    pub fn line(&self, tone: Tone, verb: &str, message: &str) -> String {
        let verb = format!("{verb:>VERB_WIDTH$}");
        if self.color {
            format!("{BOLD}{}{verb}{RESET} {message}", tone.ansi())
        } else {
            format!("{verb} {message}")
        }
    }

    fn announce(&self, tone: Tone, verb: &str, message: &str) {
        // Best effort; write errors are dropped
        let _ = writeln!(io::stderr().lock(), "{}", self.line(tone, verb, message));
    }
}

/// "1 frame", "4 frames".
pub fn plural(n: usize, singular: &str, many: &str) -> String {
    let noun = if n == 1 { singular } else { many };
    format!("{n} {noun}")
}

/// Path relative to the working directory when it lies inside it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "frame", "frames"), "1 frame");
        assert_eq!(plural(0, "palette", "palettes"), "0 palettes");
        assert_eq!(plural(5, "colour", "colours"), "5 colours");
    }

    #[test]
    fn test_plain_line_alignment() {
        let printer = Printer::plain();
        assert_eq!(
            printer.line(Tone::Progress, "Finished", "2 files in dist"),
            "    Finished 2 files in dist"
        );
        assert_eq!(printer.line(Tone::Detail, "Wrote", "a.png"), "       Wrote a.png");
    }

    #[test]
    fn test_coloured_line() {
        let printer = Printer { color: true };
        let line = printer.line(Tone::Caution, "Palette", "unknown");
        assert!(line.starts_with("\x1b[1m\x1b[33m"));
        assert!(line.ends_with("\x1b[0m unknown"));
        assert_eq!(printer.bold("x"), "\x1b[1mx\x1b[0m");
        assert_eq!(Printer::plain().dim("x"), "x");
    }

    #[test]
    fn test_display_path() {
        let outside = Path::new("/nonexistent/path/to/file");
        assert_eq!(display_path(outside), "/nonexistent/path/to/file");

        let cwd = std::env::current_dir().unwrap();
        assert_eq!(display_path(&cwd), ".");
        let nested = cwd.join("dist").join("a.png");
        assert_eq!(display_path(&nested), Path::new("dist").join("a.png").display().to_string());
    }
}
