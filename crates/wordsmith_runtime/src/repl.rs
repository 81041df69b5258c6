//! The main REPL implementation.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use wordsmith_engine::{GenerationRequest, GenerationSession, TermRegistry};
use wordsmith_foundation::{Error, ErrorKind, Result, TermType};

use crate::command::{COMMANDS, Command, is_command};
use crate::config::WordsmithConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::lexicon::Lexicon;
use crate::loader::{VocabularyLoader, read_commands, tokenize};
use crate::writer::{Color, Writer, lexicograph};

/// Width of the `<command> <usage>` column in help output.
const HELP_COLUMN: usize = 35;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Runtime configuration.
    config: WordsmithConfig,

    /// Loaded vocabularies.
    registry: TermRegistry,

    /// Blender and RNG used by `new`.
    session: GenerationSession,

    /// File each vocabulary type was loaded from.
    sources: BTreeMap<TermType, PathBuf>,

    /// Words generated so far.
    lexicon: Lexicon,

    /// User-defined aliases, name to command tokens.
    aliases: BTreeMap<String, Vec<String>>,

    /// User-facing output.
    writer: Writer,

    /// Cleared by `exit`.
    active: bool,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: WordsmithConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, config: WordsmithConfig) -> Self {
        let session = match config.seed {
            Some(seed) => GenerationSession::with_seed(seed),
            None => GenerationSession::new(),
        };
        let writer = Writer::stdout(config.color);

        Self {
            editor,
            config,
            registry: TermRegistry::new(),
            session,
            sources: BTreeMap::new(),
            lexicon: Lexicon::new(),
            aliases: BTreeMap::new(),
            writer,
            active: true,
        }
    }

    /// Sends user-facing output to `out` instead of standard output.
    #[must_use]
    pub fn with_output(mut self, out: Box<dyn Write>) -> Self {
        self.writer = Writer::with_output(out, self.config.color);
        self
    }

    /// Returns the vocabulary registry.
    #[must_use]
    pub const fn registry(&self) -> &TermRegistry {
        &self.registry
    }

    /// Returns the generated words.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns true until `exit` runs.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Runs the configured startup file, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load_rc(&mut self) -> Result<()> {
        match self.config.rc_path.clone() {
            Some(path) => self.run_file(&path),
            None => Ok(()),
        }
    }

    /// Runs every command in a command file.
    ///
    /// A failing command is reported with its file and line and does not stop
    /// the remaining commands; an `exit` does.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn run_file(&mut self, path: &Path) -> Result<()> {
        let commands = read_commands(path)?;
        debug!(path = %path.display(), commands = commands.len(), "running command file");

        for (line, tokens) in &commands {
            if let Err(e) = self.execute(tokens) {
                // Errors already located in a vocabulary file keep that location.
                let context = e.context.clone().unwrap_or_default();
                let e = if context.source.is_some() {
                    e
                } else {
                    e.with_context(
                        context
                            .with_source(path.display().to_string())
                            .with_line(*line),
                    )
                };
                self.print_error(&e);
            }
            if !self.active {
                break;
            }
        }
        Ok(())
    }

    /// Runs the REPL loop until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner();
        }
        self.refresh_keywords();

        while self.active {
            let prompt = self.config.prompt.clone();
            match self.editor.read_line(&prompt)? {
                ReadResult::Line(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);
                    self.run_line(&line);
                }
                ReadResult::Interrupted => {}
                ReadResult::Eof => break,
            }
        }

        Ok(())
    }

    /// Executes one command line, reporting any error instead of returning it.
    pub fn run_line(&mut self, line: &str) {
        if let Err(e) = self.execute(&tokenize(line)) {
            self.print_error(&e);
        }
        self.refresh_keywords();
    }

    /// Executes one tokenized command, expanding aliases.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is unknown, its arguments are invalid,
    /// or the operation it names fails.
    pub fn execute(&mut self, tokens: &[String]) -> Result<()> {
        let Some((name, args)) = tokens.split_first() else {
            return Ok(());
        };
        let name = name.to_lowercase();

        if let Some(target) = self.aliases.get(&name) {
            let mut expanded = target.clone();
            expanded.extend_from_slice(args);
            debug!(alias = %name, expansion = ?expanded, "alias expanded");
            return self.execute(&expanded).map_err(|e| {
                let context = e
                    .context
                    .clone()
                    .unwrap_or_default()
                    .with_frame(format!("alias {name}"));
                e.with_context(context)
            });
        }

        match Command::parse(&name, args)? {
            Command::Add { path, term_type } => self.add_type(path, term_type),
            Command::Remove { term_type } => self.remove_type(&term_type),
            Command::New { requests } => self.generate_word(&requests),
            Command::Old => self.list_words(),
            Command::Types => self.list_sources(),
            Command::Export { path } => self.export_words(&path),
            Command::Alias { name, target } => self.alias_command(name, target),
            Command::Help => self.list_commands(),
            Command::Exit => {
                self.active = false;
                Ok(())
            }
        }
    }

    /// Loads a vocabulary file, replacing any vocabulary of the same type.
    fn add_type(&mut self, path: PathBuf, term_type: TermType) -> Result<()> {
        let terms = VocabularyLoader::read(&path)?;
        if terms.is_empty() {
            warn!(path = %path.display(), vocabulary = %term_type, "vocabulary file is empty or missing");
        }
        self.registry.add_vocabulary(term_type.clone(), terms);
        self.sources.insert(term_type, path);
        Ok(())
    }

    fn remove_type(&mut self, term_type: &TermType) -> Result<()> {
        self.registry.remove_vocabulary(term_type)?;
        self.sources.remove(term_type);
        Ok(())
    }

    fn generate_word(&mut self, requests: &[GenerationRequest]) -> Result<()> {
        let generated = self.session.generate(&self.registry, requests)?;
        let color = Color::random(self.session.rng_mut());
        let shown = lexicograph(
            &generated.word,
            &generated.definition,
            self.config.lexicograph_width,
        );
        self.lexicon.insert(generated);
        self.writer.say_line(&shown, Some(color))
    }

    fn list_words(&mut self) -> Result<()> {
        if self.lexicon.is_empty() {
            return self.writer.say_line("No words generated", Some(Color::Blue));
        }
        let listing = self.lexicon.render(self.config.column_width);
        self.writer.say(&listing, None)
    }

    fn list_sources(&mut self) -> Result<()> {
        let listing: String = self
            .sources
            .iter()
            .map(|(term_type, path)| format!("{term_type} -> {}\n", path.display()))
            .collect();
        self.writer.say(&listing, None)
    }

    fn list_commands(&mut self) -> Result<()> {
        let builtins = COMMANDS.iter().map(|spec| {
            (
                format!("{} {}", spec.name, spec.usage),
                spec.description.to_string(),
            )
        });
        let aliases = self.aliases.iter().map(|(name, target)| {
            (format!("{name} "), format!("Aliased to '{}'", target.join(" ")))
        });

        let listing: String = builtins
            .chain(aliases)
            .map(|(synopsis, description)| format!("{synopsis:width$}- {description}\n", width = HELP_COLUMN))
            .collect();
        self.writer.say(&listing, None)
    }

    fn export_words(&mut self, path: &Path) -> Result<()> {
        self.lexicon.export(path, self.config.column_width)
    }

    fn alias_command(&mut self, name: String, target: Vec<String>) -> Result<()> {
        if is_command(&name) || self.aliases.contains_key(&name) {
            return Err(Error::new(ErrorKind::InvalidAlias(format!(
                "{name:?} is already a command"
            ))));
        }
        let known = target
            .first()
            .is_some_and(|cmd| is_command(cmd) || self.aliases.contains_key(cmd));
        if !known {
            return Err(Error::new(ErrorKind::InvalidAlias(format!(
                "{:?} is not a command",
                target.first().map_or("", String::as_str)
            ))));
        }
        self.aliases.insert(name, target);
        Ok(())
    }

    /// Offers commands, aliases and vocabulary types for completion.
    fn refresh_keywords(&mut self) {
        let keywords = COMMANDS
            .iter()
            .map(|spec| spec.name.to_string())
            .chain(self.aliases.keys().cloned())
            .chain(self.registry.types().map(ToString::to_string))
            .collect();
        self.editor.set_keywords(keywords);
    }

    /// Prints an error to stderr.
    fn print_error(&self, error: &Error) {
        let location = error
            .context
            .as_ref()
            .map(|ctx| format!(" {ctx}"))
            .unwrap_or_default();
        if self.config.color {
            eprintln!("\x1b[1;31mError: {error}{location}\x1b[0m");
        } else {
            eprintln!("Error: {error}{location}");
        }
    }

    /// Prints the welcome banner.
    fn print_banner(&mut self) {
        let banner = format!(
            "Welcome to Wordsmith v{}\nEnter 'help' for a list of commands.\n",
            env!("CARGO_PKG_VERSION")
        );
        if let Err(e) = self.writer.say(&banner, Some(Color::Cyan)) {
            warn!(error = %e, "failed to print banner");
        }
    }
}
