//! # Student search predicates
//!
//! Each field has its own matching rule:
//!
//! | Predicate                | Rule                                                       |
//! |--------------------------|------------------------------------------------------------|
//! | `NameContainsKeywords`   | case-insensitive substring of the name, any keyword        |
//! | `StudentIdMatches`       | exact match after trimming, removing spaces, upper-casing  |
//! | `GroupContainsKeywords`  | prefix of a group name, or an exact word of a group name   |
//!
//! Group matching keeps two granularities apart on purpose. The prefix mode compares against
//! the whole group name (`gro` matches `group 1`, `5` does not match `group 51`); the
//! word-in-list mode compares whole words (`1` matches `group 1`, `gro` does not).
//!
//! A [`CompositePredicate`] collects field predicates and combines them with
//! [`Composition::All`] (the default) or [`Composition::Any`]. An empty composite matches
//! nothing.
//!
//! ```
//! use roster::search::{CompositePredicate, NameContainsKeywords, StudentIdMatches};
//!
//! let mut predicate = CompositePredicate::new();
//! predicate.add(NameContainsKeywords::new(["Alice"]));
//! predicate.add(StudentIdMatches::new("A1234567E"));
//! assert_eq!(predicate.len(), 2);
//! ```

use std::fmt;

use crate::fields::ValidatedField;
use crate::filters::{lowercase_keywords, normalize_student_id};
use crate::groups::GroupList;
use crate::student::Student;

/// A read-only test over one student record.
pub trait StudentPredicate {
    fn test(&self, student: &Student) -> bool;
}

/// Matches when the lower-cased name contains any lower-cased keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new<S: Into<String>>(keywords: impl IntoIterator<Item = S>) -> Self {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl StudentPredicate for NameContainsKeywords {
    fn test(&self, student: &Student) -> bool {
        let name = student.name().as_str().to_lowercase();
        lowercase_keywords(&self.keywords)
            .iter()
            .any(|keyword| name.contains(keyword.as_str()))
    }
}

/// Matches a single student id exactly, after normalising both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentIdMatches {
    student_id: String,
}

impl StudentIdMatches {
    pub fn new(student_id: &str) -> Self {
        Self {
            student_id: normalize_student_id(student_id),
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }
}

impl StudentPredicate for StudentIdMatches {
    fn test(&self, student: &Student) -> bool {
        normalize_student_id(student.student_id().as_str()) == self.student_id
    }
}

/// Matches group memberships by prefix or by whole word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupContainsKeywords {
    keywords: Vec<String>,
}

impl GroupContainsKeywords {
    pub fn new<S: Into<String>>(keywords: impl IntoIterator<Item = S>) -> Self {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// `true` if some keyword is a case-insensitive leading substring of a group name.
    pub fn has_prefix_match(&self, groups: &GroupList) -> bool {
        let keywords = lowercase_keywords(&self.keywords);
        groups.iter().any(|group| {
            let name = group.as_str().to_lowercase();
            keywords.iter().any(|keyword| name.starts_with(keyword.as_str()))
        })
    }

    /// `true` if some whitespace-delimited word of a group name equals a keyword exactly.
    pub fn has_word_in_list(&self, groups: &GroupList) -> bool {
        groups
            .iter()
            .flat_map(|group| group.words())
            .any(|word| self.keywords.iter().any(|keyword| keyword == word))
    }
}

impl StudentPredicate for GroupContainsKeywords {
    fn test(&self, student: &Student) -> bool {
        let groups = student.groups();
        self.has_prefix_match(groups) || self.has_word_in_list(groups)
    }
}

/// Any single-field predicate that can sit inside a [`CompositePredicate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPredicate {
    Name(NameContainsKeywords),
    StudentId(StudentIdMatches),
    Group(GroupContainsKeywords),
}

impl StudentPredicate for FieldPredicate {
    fn test(&self, student: &Student) -> bool {
        match self {
            FieldPredicate::Name(predicate) => predicate.test(student),
            FieldPredicate::StudentId(predicate) => predicate.test(student),
            FieldPredicate::Group(predicate) => predicate.test(student),
        }
    }
}

impl From<NameContainsKeywords> for FieldPredicate {
    fn from(predicate: NameContainsKeywords) -> Self {
        FieldPredicate::Name(predicate)
    }
}

impl From<StudentIdMatches> for FieldPredicate {
    fn from(predicate: StudentIdMatches) -> Self {
        FieldPredicate::StudentId(predicate)
    }
}

impl From<GroupContainsKeywords> for FieldPredicate {
    fn from(predicate: GroupContainsKeywords) -> Self {
        FieldPredicate::Group(predicate)
    }
}

impl fmt::Display for FieldPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPredicate::Name(predicate) => write!(f, "name contains any of [{}]", predicate.keywords.join(", ")),
            FieldPredicate::StudentId(predicate) => write!(f, "student id = {}", predicate.student_id),
            FieldPredicate::Group(predicate) => write!(f, "group matches any of [{}]", predicate.keywords.join(", ")),
        }
    }
}

/// How the members of a [`CompositePredicate`] are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Composition {
    /// Every predicate must match.
    #[default]
    All,
    /// At least one predicate must match.
    Any,
}

/// An ordered collection of field predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositePredicate {
    predicates: Vec<FieldPredicate>,
    composition: Composition,
}

impl CompositePredicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_composition(composition: Composition) -> Self {
        Self {
            predicates: Vec::new(),
            composition,
        }
    }

    pub fn add(&mut self, predicate: impl Into<FieldPredicate>) {
        self.predicates.push(predicate.into());
    }

    /// Builder form of [`CompositePredicate::add`].
    pub fn with(mut self, predicate: impl Into<FieldPredicate>) -> Self {
        self.add(predicate);
        self
    }

    pub fn composition(&self) -> Composition {
        self.composition
    }

    pub fn set_composition(&mut self, composition: Composition) {
        self.composition = composition;
    }

    pub fn predicates(&self) -> &[FieldPredicate] {
        &self.predicates
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Students in `students` that satisfy the predicate, in their original order.
    pub fn filter<'a>(&'a self, students: &'a [Student]) -> impl Iterator<Item = &'a Student> + 'a {
        students.iter().filter(move |student| self.test(student))
    }
}

impl StudentPredicate for CompositePredicate {
    fn test(&self, student: &Student) -> bool {
        if self.predicates.is_empty() {
            return false;
        }
        match self.composition {
            Composition::All => self.predicates.iter().all(|predicate| predicate.test(student)),
            Composition::Any => self.predicates.iter().any(|predicate| predicate.test(student)),
        }
    }
}

impl fmt::Display for CompositePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.predicates.is_empty() {
            return f.write_str("(nothing)");
        }
        let separator = match self.composition {
            Composition::All => " AND ",
            Composition::Any => " OR ",
        };
        let clauses: Vec<String> = self.predicates.iter().map(ToString::to_string).collect();
        f.write_str(&clauses.join(separator))
    }
}
