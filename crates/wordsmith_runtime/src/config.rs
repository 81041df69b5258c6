//! Runtime configuration.

use std::path::PathBuf;

/// Default startup command file.
pub const DEFAULT_RC_FILE: &str = "wordsmithrc";

/// Configuration for a [`Repl`](crate::Repl).
#[derive(Clone, Debug)]
pub struct WordsmithConfig {
    /// Command file executed on startup, if any.
    pub rc_path: Option<PathBuf>,

    /// Width of the word column in listings and exports.
    pub column_width: usize,

    /// Base width of the lexicograph header.
    pub lexicograph_width: usize,

    /// Seed for reproducible generation (`None` = seeded from the OS).
    pub seed: Option<u64>,

    /// Whether to emit ANSI colors.
    pub color: bool,

    /// Whether to show the welcome banner.
    pub show_banner: bool,

    /// Input prompt.
    pub prompt: String,
}

impl Default for WordsmithConfig {
    fn default() -> Self {
        Self {
            rc_path: Some(PathBuf::from(DEFAULT_RC_FILE)),
            column_width: 20,
            lexicograph_width: 20,
            seed: None,
            color: true,
            show_banner: true,
            prompt: "?> ".to_string(),
        }
    }
}

impl WordsmithConfig {
    /// Configuration for scripted runs: no rc file, no banner, no color.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            rc_path: None,
            color: false,
            show_banner: false,
            ..Self::default()
        }
    }

    /// Sets the startup command file.
    #[must_use]
    pub fn with_rc_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.rc_path = Some(path.into());
        self
    }

    /// Skips the startup command file.
    #[must_use]
    pub fn without_rc(mut self) -> Self {
        self.rc_path = None;
        self
    }

    /// Sets the generation seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables ANSI colors.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the word column width.
    #[must_use]
    pub const fn with_column_width(mut self, width: usize) -> Self {
        self.column_width = width;
        self
    }
}
