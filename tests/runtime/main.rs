//! Integration tests for Layer 2: Runtime
//!
//! Tests for vocabulary files, the REPL command surface, and export.

mod loader;
mod repl;

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use wordsmith_foundation::Result;
use wordsmith_runtime::{LineEditor, ReadResult, Repl, WordsmithConfig};

/// A scratch directory that is deleted when dropped.
pub struct ScratchDir(PathBuf);

impl Deref for ScratchDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

/// Creates an empty scratch directory unique to `name`.
pub fn scratch_dir(name: &str) -> ScratchDir {
    let dir = std::env::temp_dir().join(format!("wordsmith-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    ScratchDir(dir)
}

#[test]
fn scratch_dir_is_removed_on_drop() {
    let dir = scratch_dir("scratch-guard");
    fs::write(dir.join("leftover.txt"), "x").unwrap();
    let path = dir.to_path_buf();
    assert!(path.is_dir());

    drop(dir);
    assert!(!path.exists());
}

/// Editor that replays scripted lines, then reports end of input.
pub struct ScriptedEditor {
    lines: Vec<String>,
}

impl ScriptedEditor {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().rev().map(|l| (*l).to_string()).collect(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

/// Output sink shared between a REPL and the test inspecting it.
#[derive(Clone, Default)]
pub struct Captured(Rc<RefCell<Vec<u8>>>);

impl Captured {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A seeded, colorless REPL over `lines` with captured output.
pub fn scripted_repl(lines: &[&str]) -> (Repl<ScriptedEditor>, Captured) {
    let out = Captured::default();
    let repl = Repl::with_editor(ScriptedEditor::new(lines), WordsmithConfig::batch().with_seed(42))
        .with_output(Box::new(out.clone()));
    (repl, out)
}

/// Writes the sample vocabularies into `dir` and returns their paths.
pub fn write_vocabularies(dir: &Path) -> (PathBuf, PathBuf) {
    let roots = dir.join("roots.txt");
    let suffixes = dir.join("suffixes.txt");
    fs::write(
        &roots,
        "# roots\ncat = a feline\ndog = a canine\n\nfox = a vulpine\n",
    )
    .unwrap();
    fs::write(&suffixes, "s,x>-es|-s = many ...s\n&>-n|-ish = somewhat like ...\n").unwrap();
    (roots, suffixes)
}
