//! In-memory note probe for unit tests

use crate::domain::finder::NoteProbe;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Set of directories and note files that "exist"
#[derive(Debug, Default)]
pub struct MemoryNotes {
    pub dirs: HashSet<PathBuf>,
    pub files: HashSet<PathBuf>,
}

impl MemoryNotes {
    pub fn with_dates(dir: &str, dates: &[&str]) -> Self {
        let mut notes = MemoryNotes::default();
        notes.add_dates(dir, dates);
        notes
    }

    /// Register `dir` and a `<date>.md` file inside it for each date
    pub fn add_dates(&mut self, dir: &str, dates: &[&str]) {
        self.dirs.insert(PathBuf::from(dir));
        for date in dates {
            self.files.insert(Path::new(dir).join(format!("{}.md", date)));
        }
    }
}

impl NoteProbe for MemoryNotes {
    fn dir_exists(&self, dir: &Path) -> bool {
        self.dirs.contains(dir)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}
