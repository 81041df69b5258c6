//! Console output and text formatting.

use std::io::{self, Write};

use rand::Rng;
use rand::seq::SliceRandom;
use wordsmith_foundation::{Error, Result};

/// Resets all terminal attributes.
pub const RESET: &str = "\x1b[0m";

const PADDING: char = '~';
const DIVIDER: char = '=';

/// Terminal colors used for output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Errors.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Notices.
    Blue,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
}

impl Color {
    /// Every color, for random picks.
    pub const ALL: [Self; 7] = [
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// ANSI escape sequence for this color (bold).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1b[1;31m",
            Self::Green => "\x1b[1;32m",
            Self::Yellow => "\x1b[1;33m",
            Self::Blue => "\x1b[1;34m",
            Self::Magenta => "\x1b[1;35m",
            Self::Cyan => "\x1b[1;36m",
            Self::White => "\x1b[1;37m",
        }
    }

    /// Picks a color uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&Self::White)
    }
}

/// Writes user-facing output, optionally colored.
pub struct Writer {
    out: Box<dyn Write>,
    color: bool,
}

impl Writer {
    /// Writes to standard output.
    #[must_use]
    pub fn stdout(color: bool) -> Self {
        Self::with_output(Box::new(io::stdout()), color)
    }

    /// Writes to the given sink.
    #[must_use]
    pub fn with_output(out: Box<dyn Write>, color: bool) -> Self {
        Self { out, color }
    }

    /// Writes `message` as is, in `color` if colors are enabled.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink fails.
    pub fn say(&mut self, message: &str, color: Option<Color>) -> Result<()> {
        let written = match color {
            Some(color) if self.color => write!(self.out, "{}{message}{RESET}", color.code()),
            _ => write!(self.out, "{message}"),
        };
        written
            .and_then(|()| self.out.flush())
            .map_err(|e| Error::io("<output>", &e))
    }

    /// Writes `message` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink fails.
    pub fn say_line(&mut self, message: &str, color: Option<Color>) -> Result<()> {
        self.say(&format!("{message}\n"), color)
    }
}

/// Upper-cases the first character and lower-cases the rest.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Upper-cases every letter that follows a non-letter; lower-cases the rest.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;
    for c in text.chars() {
        if after_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }
    out
}

/// One line of a listing or export: padded word, `|`, definition sentence.
#[must_use]
pub fn export_line(word: &str, definition: &str, column_width: usize) -> String {
    format!(
        "{:<column_width$} | {}.",
        capitalize(word),
        capitalize(definition)
    )
}

/// Renders a word and definition as a framed entry.
///
/// With a width of 5:
///
/// ```text
/// ==========
/// ~~ Cats ~~
/// ==========
/// Many
/// felines.
/// ```
#[must_use]
pub fn lexicograph(word: &str, definition: &str, width: usize) -> String {
    let padding_size = width.saturating_sub((word.chars().count() + 2) / 2);
    let padding: String = std::iter::repeat_n(PADDING, padding_size).collect();
    let header = format!("{padding} {} {padding}", title_case(word));
    let true_width = header.chars().count();
    let divider: String = std::iter::repeat_n(DIVIDER, true_width).collect();
    let body = paragraph(definition, true_width);
    format!("{divider}\n{header}\n{divider}\n{body}\n")
}

/// Wraps capitalized text to `width` columns and ends it with a period.
fn paragraph(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_length = 0;

    for word in capitalize(text).split_whitespace() {
        let word_length = word.chars().count() + 1;
        line_length += word_length;
        if line_length > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_length = word_length;
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    lines.push(line);

    let mut out = lines.join("\n");
    out.push('.');
    out
}
