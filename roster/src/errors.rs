use std::path::PathBuf;

use thiserror::Error;

use crate::parser::prefix::Prefix;
use crate::validators::FieldKind;

pub const MESSAGE_INVALID_INDEX: &str = "Error: Index is not a single non-zero unsigned integer.";
pub const MESSAGE_MAX_LEADING_ZEROS: &str = "Error: Index must not have leading zeros.";
pub const MESSAGE_OVERFLOW_INDEX: &str = "Error: Index is too large. The largest accepted index is 2147483647.";

/// Errors raised while turning raw command text into typed values and commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Missing required prefix, stray preamble or an unparsable argument layout.
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },

    /// A single-valued prefix was supplied more than once.
    #[error(
        "Multiple values specified for the following single-valued field(s): {}\n{usage}",
        join_prefixes(.prefixes)
    )]
    DuplicatePrefixes { prefixes: Vec<Prefix>, usage: &'static str },

    /// Field content failed its validator.
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    /// A search prefix was given without any keyword after it.
    #[error("{} cannot be empty", .field.label())]
    EmptyKeywords { field: FieldKind },

    /// `edit` was invoked without any field to change.
    #[error("At least one field to edit must be provided.\n{usage}")]
    NothingToEdit { usage: &'static str },

    #[error("{}", MESSAGE_INVALID_INDEX)]
    InvalidIndex,

    #[error("{}", MESSAGE_MAX_LEADING_ZEROS)]
    ExcessiveLeadingZeros,

    #[error("{}", MESSAGE_OVERFLOW_INDEX)]
    IndexOverflow,

    #[error("Unknown command: {word}")]
    UnknownCommand { word: String },

    #[error(transparent)]
    Groups(#[from] GroupListError),
}

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes.iter().copied().map(Prefix::as_str).collect::<Vec<_>>().join(" ")
}

/// A raw value that does not satisfy its field's rule.
///
/// The message is the field's fixed constraint text, optionally followed by a hint block
/// appended by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConstraintViolation {
    pub field: FieldKind,
    pub message: String,
}

impl ConstraintViolation {
    pub fn new(field: FieldKind, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Appends a secondary block on its own line.
    pub fn with_hint(mut self, hint: &str) -> Self {
        self.message.push('\n');
        self.message.push_str(hint);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GroupListError {
    #[error("group list is frozen and cannot be modified")]
    Frozen,
}

/// Errors raised while reading or writing the roster data file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A persisted student lacks a required field.
    #[error("Student's {} field is missing!", .field.type_name())]
    MissingField { field: FieldKind },

    /// A persisted value fails the same rule applied to live input.
    #[error("{0}")]
    IllegalValue(#[from] ConstraintViolation),

    #[error("Students list contains duplicate student ID {student_id}")]
    DuplicateStudent { student_id: String },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed roster data: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Groups(#[from] GroupListError),
}

pub type ParseResult<T> = Result<T, ParseError>;
