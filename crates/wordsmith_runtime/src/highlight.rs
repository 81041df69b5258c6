//! Syntax highlighting for the REPL.

use std::borrow::Cow;

/// Highlighter for command lines.
pub struct WordsmithHighlighter;

impl WordsmithHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    ///
    /// The command word is cyan, counts are magenta, and the `as` keyword
    /// is yellow. Whitespace is preserved as typed.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut seen_command = false;
        let mut rest = line;

        while !rest.is_empty() {
            let token_start = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
            result.push_str(&rest[..token_start]);
            rest = &rest[token_start..];

            let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let token = &rest[..token_end];
            rest = &rest[token_end..];
            if token.is_empty() {
                continue;
            }

            let color = if !seen_command {
                seen_command = true;
                Some("\x1b[1;36m") // cyan
            } else if token.chars().all(|c| c.is_ascii_digit()) {
                Some("\x1b[35m") // magenta
            } else if token.eq_ignore_ascii_case("as") {
                Some("\x1b[33m") // yellow
            } else {
                None
            };

            match color {
                Some(code) => {
                    result.push_str(code);
                    result.push_str(token);
                    result.push_str("\x1b[0m");
                }
                None => result.push_str(token),
            }
        }

        Cow::Owned(result)
    }
}

impl Default for WordsmithHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
