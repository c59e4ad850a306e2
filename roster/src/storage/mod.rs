//! JSON persistence for the roster.
//!
//! Stored records go through the same field rules as live input, so a hand-edited data file
//! cannot smuggle in values the parser would refuse.

pub mod sample;

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::StorageError;
use crate::fields::{Comment, Group, InstitutionalEmail, Major, Name, Remark, StudentId, ValidatedField, Year};
use crate::groups::GroupList;
use crate::student::Student;
use crate::validators::FieldKind;

pub use sample::sample_students;

pub type StorageResult<T> = Result<T, StorageError>;

/// Serialized form of a [`Student`].
///
/// Every field is optional so that a missing key can be reported by name instead of as a
/// generic deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedStudent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl From<&Student> for JsonAdaptedStudent {
    fn from(student: &Student) -> Self {
        Self {
            name: Some(student.name().to_string()),
            student_id: Some(student.student_id().to_string()),
            email: Some(student.email().to_string()),
            major: Some(student.major().to_string()),
            year: Some(student.year().to_string()),
            groups: student.groups().iter().map(ToString::to_string).collect(),
            comment: Some(student.comment().to_string()),
            remark: Some(student.remark().to_string()),
        }
    }
}

impl JsonAdaptedStudent {
    /// Rebuilds the model object, validating every field.
    pub fn to_model(&self) -> StorageResult<Student> {
        let name: Name = required(&self.name, FieldKind::Name)?;
        let student_id: StudentId = required(&self.student_id, FieldKind::StudentId)?;

        let email = match present(&self.email, FieldKind::Email)? {
            "" => InstitutionalEmail::default(),
            stored => InstitutionalEmail::from_stored(stored)?,
        };
        let major: Major = optional(&self.major, FieldKind::Major)?;
        let year: Year = optional(&self.year, FieldKind::Year)?;

        let mut groups = GroupList::new();
        for raw in &self.groups {
            groups.add(Group::new(raw)?)?;
        }

        let comment: Comment = optional(&self.comment, FieldKind::Comment)?;
        let remark: Remark = optional(&self.remark, FieldKind::Remark)?;

        Ok(Student::new(name, student_id)
            .with_email(email)
            .with_major(major)
            .with_year(year)
            .with_groups(groups)
            .with_comment(comment)
            .with_remark(remark))
    }
}

fn present(value: &Option<String>, field: FieldKind) -> StorageResult<&str> {
    value.as_deref().ok_or(StorageError::MissingField { field })
}

fn required<T: ValidatedField>(value: &Option<String>, field: FieldKind) -> StorageResult<T> {
    Ok(T::new(present(value, field)?)?)
}

fn optional<T: ValidatedField + Default>(value: &Option<String>, field: FieldKind) -> StorageResult<T> {
    match present(value, field)? {
        "" => Ok(T::default()),
        stored => Ok(T::new(stored)?),
    }
}

/// The whole data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRoster {
    #[serde(default)]
    pub students: Vec<JsonAdaptedStudent>,
}

impl JsonRoster {
    pub fn from_students<'a>(students: impl IntoIterator<Item = &'a Student>) -> Self {
        Self {
            students: students.into_iter().map(JsonAdaptedStudent::from).collect(),
        }
    }

    /// Converts every record, rejecting the file on the first invalid one or on a repeated id.
    pub fn to_model(&self) -> StorageResult<Vec<Student>> {
        let mut students: Vec<Student> = Vec::with_capacity(self.students.len());

        for (position, adapted) in self.students.iter().enumerate() {
            let student = adapted.to_model().inspect_err(|err| {
                warn!("rejected stored student #{}: {err}", position + 1);
            })?;
            if students.iter().any(|earlier| earlier.is_same_student(&student)) {
                warn!("stored student #{} repeats id {}", position + 1, student.student_id());
                return Err(StorageError::DuplicateStudent {
                    student_id: student.student_id().to_string(),
                });
            }
            students.push(student);
        }

        Ok(students)
    }
}

/// Reads and validates a roster file.
///
/// A missing file is not an error; it yields `None` so the caller can decide whether to seed it.
pub fn load_roster(path: &Path) -> StorageResult<Option<Vec<Student>>> {
    if !path.exists() {
        debug!("no roster file at {}", path.display());
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster: JsonRoster = serde_json::from_str(&contents)?;
    let students = roster.to_model()?;
    debug!("loaded {} student(s) from {}", students.len(), path.display());
    Ok(Some(students))
}

/// Writes `students` as pretty-printed JSON, creating parent directories as needed.
pub fn save_roster(path: &Path, students: &[Student]) -> StorageResult<()> {
    let io_error = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(&JsonRoster::from_students(students))?;
    fs::write(path, json).map_err(io_error)?;
    debug!("saved {} student(s) to {}", students.len(), path.display());
    Ok(())
}
