pub mod check;
pub mod find;
pub mod init;
pub mod parse;

use std::path::Path;

use anyhow::{Context, Result};
use roster::{Student, load_roster, sample_students};

use crate::output::{Console, Tone};

/// Load the roster at `path`, falling back to the sample records when the file does not exist.
pub(crate) fn load_students(path: &Path, console: &Console) -> Result<Vec<Student>> {
    console.emit(Tone::Trace, &format!("reading {}", path.display()));

    match load_roster(path).with_context(|| format!("Failed to load roster from {}", path.display()))? {
        Some(students) => Ok(students),
        None => {
            console.emit(
                Tone::Caution,
                &format!("{} does not exist; using the sample roster. Run 'roster init' to create it.", path.display()),
            );
            Ok(sample_students()?)
        }
    }
}

/// Join shell words back into one command line.
pub(crate) fn join_words(words: &[String]) -> String {
    words.join(" ")
}
