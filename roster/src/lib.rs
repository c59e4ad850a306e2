//! Roster core library.
//!
//! Command-line parsing and search for a student roster: prefix tokenizing, validated record
//! fields, composable search predicates and JSON persistence. Nothing here touches the
//! terminal; the `roster` binary layers configuration and output on top.

pub mod errors;
pub mod fields;
pub mod filters;
pub mod groups;
pub mod index;
pub mod parser;
pub mod search;
pub mod storage;
pub mod student;
pub mod validators;

pub use errors::*;
pub use fields::{Comment, Group, InstitutionalEmail, Major, Name, Remark, StudentId, ValidatedField, Year};
pub use groups::GroupList;
pub use index::Index;
pub use parser::{ArgumentMultimap, Command, EditStudentDescriptor, FieldParser, Prefix, Presence, parse_command, parse_index, tokenize};
pub use search::{
    Composition, CompositePredicate, FieldPredicate, GroupContainsKeywords, NameContainsKeywords, StudentIdMatches,
    StudentPredicate,
};
pub use storage::{JsonAdaptedStudent, JsonRoster, load_roster, sample_students, save_roster};
pub use student::Student;
pub use validators::FieldKind;
