//! Command parsers.
//!
//! Each parser owns its prefix family and usage text; [`parse_command`] routes a full input
//! line to the right one by its command word. Executing a [`Command`] against a record store
//! is left to the caller.

use std::fmt;

use log::debug;

use super::prefix::{
    COMMENT_PREFIXES, FIND_PREFIXES, PREFIX_COMMENT, PREFIX_GROUP, PREFIX_MAJOR, PREFIX_NAME, PREFIX_NET_ID,
    PREFIX_REMARK, PREFIX_STUDENT_ID, PREFIX_YEAR, Prefix, RECORD_PREFIXES, REMARK_PREFIXES,
};
use super::tokenizer::{ArgumentMultimap, tokenize};
use super::{FieldParser, parse_index};
use crate::errors::{ParseError, ParseResult};
use crate::fields::{Comment, InstitutionalEmail, Major, Name, Remark, StudentId, Year};
use crate::filters::split_keywords;
use crate::groups::GroupList;
use crate::index::Index;
use crate::search::{CompositePredicate, GroupContainsKeywords, NameContainsKeywords, StudentIdMatches};
use crate::student::Student;
use crate::validators::FieldKind;

pub const COMMAND_SUMMARY: &str = "Commands: add, edit, delete, find, comment, remark, list";

/// A fully parsed command, ready to run against a record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Student),
    Edit { index: Index, descriptor: EditStudentDescriptor },
    Delete(Index),
    Find(CompositePredicate),
    Comment { index: Index, comment: Comment },
    Remark { index: Index, remark: Remark },
    List,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Add(student) => write!(f, "add {} ({})", student.name(), student.student_id()),
            Command::Edit { index, descriptor } => write!(f, "edit #{index}: {descriptor}"),
            Command::Delete(index) => write!(f, "delete #{index}"),
            Command::Find(predicate) => write!(f, "find where {predicate}"),
            Command::Comment { index, comment } if comment.is_empty() => write!(f, "clear comment on #{index}"),
            Command::Comment { index, comment } => write!(f, "comment on #{index}: {comment}"),
            Command::Remark { index, remark } if remark.is_empty() => write!(f, "clear remark on #{index}"),
            Command::Remark { index, remark } => write!(f, "remark on #{index}: {remark}"),
            Command::List => f.write_str("list"),
        }
    }
}

/// Fields supplied to `edit`; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditStudentDescriptor {
    pub name: Option<Name>,
    pub student_id: Option<StudentId>,
    pub email: Option<InstitutionalEmail>,
    pub major: Option<Major>,
    pub year: Option<Year>,
    pub groups: Option<GroupList>,
}

impl EditStudentDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.student_id.is_some()
            || self.email.is_some()
            || self.major.is_some()
            || self.year.is_some()
            || self.groups.is_some()
    }

    /// A copy of `student` with the supplied fields replaced.
    pub fn apply(&self, student: &Student) -> Student {
        let mut edited = student.clone();
        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(student_id) = &self.student_id {
            edited = edited.with_student_id(student_id.clone());
        }
        if let Some(email) = &self.email {
            edited = edited.with_email(email.clone());
        }
        if let Some(major) = &self.major {
            edited = edited.with_major(major.clone());
        }
        if let Some(year) = &self.year {
            edited = edited.with_year(year.clone());
        }
        if let Some(groups) = &self.groups {
            edited = edited.with_groups(groups.clone());
        }
        edited
    }
}

impl fmt::Display for EditStudentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut changes: Vec<String> = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("name={name}"));
        }
        if let Some(student_id) = &self.student_id {
            changes.push(format!("id={student_id}"));
        }
        if let Some(email) = &self.email {
            changes.push(format!("email={email}"));
        }
        if let Some(major) = &self.major {
            changes.push(format!("major={major}"));
        }
        if let Some(year) = &self.year {
            changes.push(format!("year={year}"));
        }
        if let Some(groups) = &self.groups {
            changes.push(format!("groups=[{groups}]"));
        }
        f.write_str(&changes.join(", "))
    }
}

/// Grammar of one command: its word, usage text, prefixes and argument parser.
pub trait CommandParser {
    const COMMAND_WORD: &'static str;
    const USAGE: &'static str;
    const PREFIXES: &'static [Prefix];

    fn parse(args: &str) -> ParseResult<Command>;

    fn field_parser() -> FieldParser {
        FieldParser::new(Self::PREFIXES)
    }
}

pub struct AddCommandParser;

impl CommandParser for AddCommandParser {
    const COMMAND_WORD: &'static str = "add";
    const USAGE: &'static str = "add: Adds a student to the roster.\n\
        Parameters: /n NAME /id STUDENT_ID [/nid NETID] [/m MAJOR] [/y YEAR] [/g GROUP]...\n\
        Example: add /n John Doe /id A1234567E /nid e1234567 /m Computer Science /y 2 /g group 1";
    const PREFIXES: &'static [Prefix] = RECORD_PREFIXES;

    fn parse(args: &str) -> ParseResult<Command> {
        let map = tokenize(args, Self::PREFIXES);
        map.require_prefixes(&[PREFIX_NAME, PREFIX_STUDENT_ID], Self::USAGE)?;
        if !map.preamble().is_empty() {
            return Err(ParseError::InvalidFormat { usage: Self::USAGE });
        }
        map.verify_no_duplicate_prefixes_for(SINGLE_VALUED_RECORD_PREFIXES, Self::USAGE)?;

        let fields = Self::field_parser();
        let name: Name = fields.parse_required(map.value(PREFIX_NAME).unwrap_or_default())?;
        let student_id: StudentId = fields.parse_required(map.value(PREFIX_STUDENT_ID).unwrap_or_default())?;
        let email: InstitutionalEmail = fields.parse_optional(map.value(PREFIX_NET_ID).unwrap_or_default())?;
        let major: Major = fields.parse_optional(map.value(PREFIX_MAJOR).unwrap_or_default())?;
        let year: Year = fields.parse_optional(map.value(PREFIX_YEAR).unwrap_or_default())?;
        let groups = fields.parse_groups(map.all_values(PREFIX_GROUP))?;

        let student = Student::new(name, student_id)
            .with_email(email)
            .with_major(major)
            .with_year(year)
            .with_groups(groups);
        Ok(Command::Add(student))
    }
}

const SINGLE_VALUED_RECORD_PREFIXES: &[Prefix] =
    &[PREFIX_NAME, PREFIX_STUDENT_ID, PREFIX_NET_ID, PREFIX_MAJOR, PREFIX_YEAR];

pub struct EditCommandParser;

impl CommandParser for EditCommandParser {
    const COMMAND_WORD: &'static str = "edit";
    const USAGE: &'static str = "edit: Edits the student at the given index in the displayed list. \
        Supplied fields overwrite the stored ones; an empty /nid, /m, /y or /g clears that field.\n\
        Parameters: INDEX (must be a positive integer) [/n NAME] [/id STUDENT_ID] [/nid NETID] [/m MAJOR] [/y YEAR] \
        [/g GROUP]...\n\
        Example: edit 1 /m Computer Science /y 3";
    const PREFIXES: &'static [Prefix] = RECORD_PREFIXES;

    fn parse(args: &str) -> ParseResult<Command> {
        let map = tokenize(args, Self::PREFIXES);
        let index = parse_index_or_usage(map.preamble(), Self::USAGE)?;
        map.verify_no_duplicate_prefixes_for(SINGLE_VALUED_RECORD_PREFIXES, Self::USAGE)?;

        let fields = Self::field_parser();
        let descriptor = EditStudentDescriptor {
            name: map.value(PREFIX_NAME).map(|raw| fields.parse_required(raw)).transpose()?,
            student_id: map.value(PREFIX_STUDENT_ID).map(|raw| fields.parse_required(raw)).transpose()?,
            email: map.value(PREFIX_NET_ID).map(|raw| fields.parse_optional(raw)).transpose()?,
            major: map.value(PREFIX_MAJOR).map(|raw| fields.parse_optional(raw)).transpose()?,
            year: map.value(PREFIX_YEAR).map(|raw| fields.parse_optional(raw)).transpose()?,
            groups: parse_groups_for_edit(&fields, &map)?,
        };

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::NothingToEdit { usage: Self::USAGE });
        }
        Ok(Command::Edit { index, descriptor })
    }
}

// A lone empty `/g` clears every group.
fn parse_groups_for_edit(fields: &FieldParser, map: &ArgumentMultimap) -> ParseResult<Option<GroupList>> {
    let raw = map.all_values(PREFIX_GROUP);
    match raw {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(GroupList::new().freeze())),
        _ => fields.parse_groups(raw).map(Some),
    }
}

pub struct DeleteCommandParser;

impl CommandParser for DeleteCommandParser {
    const COMMAND_WORD: &'static str = "delete";
    const USAGE: &'static str = "delete: Deletes the student at the given index in the displayed list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";
    const PREFIXES: &'static [Prefix] = &[];

    fn parse(args: &str) -> ParseResult<Command> {
        parse_index_or_usage(args, Self::USAGE).map(Command::Delete)
    }
}

// Leading zeros and overflow keep their own messages; anything else that is not an index is a
// malformed command.
fn parse_index_or_usage(raw: &str, usage: &'static str) -> ParseResult<Index> {
    parse_index(raw).map_err(|err| match err {
        ParseError::InvalidIndex => ParseError::InvalidFormat { usage },
        other => other,
    })
}

pub struct FindCommandParser;

impl CommandParser for FindCommandParser {
    const COMMAND_WORD: &'static str = "find";
    const USAGE: &'static str = "find: Finds students matching every given criterion.\n\
        Parameters: [/n KEYWORD [MORE_KEYWORDS]...] [/id STUDENT_ID] [/g KEYWORD [MORE_KEYWORDS]...] \
        (at least one; each prefix at most once)\n\
        Names match on any part of the name, ignoring case; student IDs must match exactly; \
        groups match from the start of the group name or on a whole word.\n\
        Example: find /n alice /g 1";
    const PREFIXES: &'static [Prefix] = FIND_PREFIXES;

    fn parse(args: &str) -> ParseResult<Command> {
        let map = tokenize(args, Self::PREFIXES);
        if !map.is_any_prefix_present(Self::PREFIXES) || !map.preamble().is_empty() {
            return Err(ParseError::InvalidFormat { usage: Self::USAGE });
        }
        map.verify_no_duplicate_prefixes_for(Self::PREFIXES, Self::USAGE)?;

        let mut predicate = CompositePredicate::new();
        if let Some(raw) = map.value(PREFIX_NAME) {
            predicate.add(NameContainsKeywords::new(required_keywords(raw, FieldKind::Name)?));
        }
        if let Some(raw) = map.value(PREFIX_STUDENT_ID) {
            if raw.trim().is_empty() {
                return Err(ParseError::EmptyKeywords {
                    field: FieldKind::StudentId,
                });
            }
            predicate.add(StudentIdMatches::new(raw));
        }
        if let Some(raw) = map.value(PREFIX_GROUP) {
            predicate.add(GroupContainsKeywords::new(required_keywords(raw, FieldKind::Group)?));
        }

        debug!("find predicate: {predicate}");
        Ok(Command::Find(predicate))
    }
}

fn required_keywords(raw: &str, field: FieldKind) -> ParseResult<Vec<String>> {
    let keywords = split_keywords(raw);
    if keywords.is_empty() {
        Err(ParseError::EmptyKeywords { field })
    } else {
        Ok(keywords)
    }
}

pub struct CommentCommandParser;

impl CommandParser for CommentCommandParser {
    const COMMAND_WORD: &'static str = "comment";
    const USAGE: &'static str = "comment: Sets the comment of the student at the given index. \
        An empty comment removes it.\n\
        Parameters: INDEX (must be a positive integer) /c [COMMENT]\n\
        Example: comment 1 /c Needs help with recursion";
    const PREFIXES: &'static [Prefix] = COMMENT_PREFIXES;

    fn parse(args: &str) -> ParseResult<Command> {
        let map = tokenize(args, Self::PREFIXES);
        map.require_prefixes(&[PREFIX_COMMENT], Self::USAGE)?;
        map.verify_no_duplicate_prefixes_for(&[PREFIX_COMMENT], Self::USAGE)?;

        let index = parse_index(map.preamble())?;
        let comment: Comment = Self::field_parser().parse_optional(map.value(PREFIX_COMMENT).unwrap_or_default())?;
        Ok(Command::Comment { index, comment })
    }
}

pub struct RemarkCommandParser;

impl CommandParser for RemarkCommandParser {
    const COMMAND_WORD: &'static str = "remark";
    const USAGE: &'static str = "remark: Sets the remark of the student at the given index. \
        Leaving out /r or giving it no text removes the remark.\n\
        Parameters: INDEX (must be a positive integer) [/r REMARK]\n\
        Example: remark 1 /r Likes to swim.";
    const PREFIXES: &'static [Prefix] = REMARK_PREFIXES;

    fn parse(args: &str) -> ParseResult<Command> {
        let map = tokenize(args, Self::PREFIXES);
        let index = parse_index(map.preamble()).map_err(|err| {
            debug!("remark index rejected: {err}");
            ParseError::InvalidFormat { usage: Self::USAGE }
        })?;
        let remark: Remark = Self::field_parser().parse_optional(map.value(PREFIX_REMARK).unwrap_or_default())?;
        Ok(Command::Remark { index, remark })
    }
}

pub struct ListCommandParser;

impl CommandParser for ListCommandParser {
    const COMMAND_WORD: &'static str = "list";
    const USAGE: &'static str = "list: Lists every student.\nExample: list";
    const PREFIXES: &'static [Prefix] = &[];

    fn parse(_args: &str) -> ParseResult<Command> {
        Ok(Command::List)
    }
}

/// Splits `line` into its command word and arguments and parses the arguments.
pub fn parse_command(line: &str) -> ParseResult<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::InvalidFormat { usage: COMMAND_SUMMARY });
    }

    let (word, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    debug!("dispatching {word:?} with arguments {args:?}");

    match word {
        AddCommandParser::COMMAND_WORD => AddCommandParser::parse(args),
        EditCommandParser::COMMAND_WORD => EditCommandParser::parse(args),
        DeleteCommandParser::COMMAND_WORD => DeleteCommandParser::parse(args),
        FindCommandParser::COMMAND_WORD => FindCommandParser::parse(args),
        CommentCommandParser::COMMAND_WORD => CommentCommandParser::parse(args),
        RemarkCommandParser::COMMAND_WORD => RemarkCommandParser::parse(args),
        ListCommandParser::COMMAND_WORD => ListCommandParser::parse(args),
        other => Err(ParseError::UnknownCommand { word: other.to_string() }),
    }
}

/// Usage text for a command word, if it is known.
pub fn usage_for(word: &str) -> Option<&'static str> {
    match word {
        AddCommandParser::COMMAND_WORD => Some(AddCommandParser::USAGE),
        EditCommandParser::COMMAND_WORD => Some(EditCommandParser::USAGE),
        DeleteCommandParser::COMMAND_WORD => Some(DeleteCommandParser::USAGE),
        FindCommandParser::COMMAND_WORD => Some(FindCommandParser::USAGE),
        CommentCommandParser::COMMAND_WORD => Some(CommentCommandParser::USAGE),
        RemarkCommandParser::COMMAND_WORD => Some(RemarkCommandParser::USAGE),
        ListCommandParser::COMMAND_WORD => Some(ListCommandParser::USAGE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Group, ValidatedField};

    fn assert_parse_failure(result: ParseResult<Command>, expected_message: &str) {
        match result {
            Ok(command) => panic!("expected failure, parsed {command:?}"),
            Err(err) => assert_eq!(err.to_string(), expected_message),
        }
    }

    fn invalid_format(usage: &str) -> String {
        format!("Invalid command format! \n{usage}")
    }

    #[test]
    fn find_without_prefixes_is_invalid_format() {
        assert_parse_failure(FindCommandParser::parse("Alice Bob"), &invalid_format(FindCommandParser::USAGE));
        assert_parse_failure(FindCommandParser::parse("     "), &invalid_format(FindCommandParser::USAGE));
    }

    #[test]
    fn find_by_name() {
        let expected = CompositePredicate::new().with(NameContainsKeywords::new(["Alice"]));
        assert_eq!(FindCommandParser::parse("/n Alice"), Ok(Command::Find(expected)));
    }

    #[test]
    fn find_by_student_id() {
        let expected = CompositePredicate::new().with(StudentIdMatches::new("A1234567E"));
        assert_eq!(FindCommandParser::parse("/id A1234567E"), Ok(Command::Find(expected)));
    }

    #[test]
    fn find_combined() {
        let expected = CompositePredicate::new()
            .with(NameContainsKeywords::new(["Alice"]))
            .with(StudentIdMatches::new("A1234567E"));
        assert_eq!(FindCommandParser::parse("/n Alice /id A1234567E"), Ok(Command::Find(expected.clone())));
        // predicates are ordered by field, not by input position
        assert_eq!(FindCommandParser::parse("/id A1234567E /n Alice"), Ok(Command::Find(expected)));
    }

    #[test]
    fn find_multiple_keywords() {
        let expected = CompositePredicate::new()
            .with(NameContainsKeywords::new(["Alice", "Bob"]))
            .with(GroupContainsKeywords::new(["1", "2"]));
        assert_eq!(FindCommandParser::parse(" /n \n Alice \t Bob /g 1 2"), Ok(Command::Find(expected)));
    }

    #[test]
    fn find_empty_values() {
        assert_parse_failure(FindCommandParser::parse("/n "), "Name cannot be empty");
        assert_parse_failure(FindCommandParser::parse("/id"), "Student ID cannot be empty");
        assert_parse_failure(FindCommandParser::parse("/n Alice /g"), "Group cannot be empty");
    }

    #[test]
    fn find_usage_matches_single_use_prefixes() {
        assert!(FindCommandParser::USAGE.contains("[/n KEYWORD [MORE_KEYWORDS]...]"));
        assert!(!FindCommandParser::USAGE.contains("[/n NAME_KEYWORD]..."));
    }

    #[test]
    fn find_rejects_duplicates_and_preamble() {
        assert!(matches!(
            FindCommandParser::parse("/n Alice /n Bob"),
            Err(ParseError::DuplicatePrefixes { .. })
        ));
        assert_parse_failure(FindCommandParser::parse("x /n Alice"), &invalid_format(FindCommandParser::USAGE));
    }

    #[test]
    fn add_all_fields() {
        let command = AddCommandParser::parse(
            " /n Amy Bee /id a1234567x /nid E7654321 /m Computer Science /y 2 /g group 1 /g group 2",
        )
        .unwrap();
        let Command::Add(student) = command else {
            panic!("expected add");
        };
        assert_eq!(student.name().as_str(), "Amy Bee");
        assert_eq!(student.student_id().as_str(), "A1234567X");
        assert_eq!(student.email().as_str(), "e7654321@u.nus.edu");
        assert_eq!(student.major().as_str(), "Computer Science");
        assert_eq!(student.year().as_str(), "2");
        assert_eq!(student.groups().len(), 2);
        assert!(student.groups().is_frozen());
    }

    #[test]
    fn add_optional_fields_may_be_missing_or_blank() {
        let Ok(Command::Add(student)) = AddCommandParser::parse("/n Amy Bee /id A1234567X /m /y") else {
            panic!("expected add");
        };
        assert!(student.email().is_empty());
        assert!(student.major().is_empty());
        assert!(student.year().is_empty());
        assert!(student.groups().is_empty());
    }

    #[test]
    fn add_missing_required_prefix() {
        assert_parse_failure(AddCommandParser::parse("/n Amy Bee"), &invalid_format(AddCommandParser::USAGE));
        assert_parse_failure(
            AddCommandParser::parse("Amy Bee /id A1234567X"),
            &invalid_format(AddCommandParser::USAGE),
        );
    }

    #[test]
    fn add_preamble_is_rejected() {
        assert_parse_failure(
            AddCommandParser::parse("junk /n Amy /id A1234567X"),
            &invalid_format(AddCommandParser::USAGE),
        );
    }

    #[test]
    fn add_duplicate_single_valued_prefix() {
        let result = AddCommandParser::parse("/n Amy /n Bob /id A1234567X /id A7654321X /g group 1 /g group 2");
        assert_eq!(
            result,
            Err(ParseError::DuplicatePrefixes {
                prefixes: vec![PREFIX_NAME, PREFIX_STUDENT_ID],
                usage: AddCommandParser::USAGE,
            })
        );
    }

    #[test]
    fn add_invalid_field_reports_constraint() {
        let err = AddCommandParser::parse("/n Amy /id A1234567X /y 9").unwrap_err();
        assert_eq!(err.to_string(), crate::validators::MESSAGE_YEAR);

        let err = AddCommandParser::parse("/n Amy /id A1234567X /g Group 1").unwrap_err();
        assert_eq!(err.to_string(), crate::validators::MESSAGE_GROUP);
    }

    #[test]
    fn add_missing_space_before_prefix_hints_at_prefixes() {
        let err = AddCommandParser::parse("/n Amy /id A1234567X/nid e1234567").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with(crate::validators::MESSAGE_STUDENT_ID));
        assert!(message.contains("Supported prefixes: /n, /id, /nid, /m, /y, /g"));
    }

    #[test]
    fn edit_some_fields() {
        let Ok(Command::Edit { index, descriptor }) = EditCommandParser::parse("2 /m Mathematics /y") else {
            panic!("expected edit");
        };
        assert_eq!(index.one_based(), 2);
        assert_eq!(descriptor.major.as_ref().map(Major::as_str), Some("Mathematics"));
        assert!(descriptor.year.as_ref().is_some_and(Year::is_empty));
        assert!(descriptor.name.is_none());
        assert!(descriptor.groups.is_none());
    }

    #[test]
    fn edit_requires_some_field() {
        assert_eq!(
            EditCommandParser::parse("1"),
            Err(ParseError::NothingToEdit {
                usage: EditCommandParser::USAGE
            })
        );
    }

    #[test]
    fn edit_malformed_index_shows_usage() {
        let expected = invalid_format(EditCommandParser::USAGE);
        assert_parse_failure(EditCommandParser::parse("/n Amy"), &expected);
        assert_parse_failure(EditCommandParser::parse("abc /n Amy"), &expected);
        assert_parse_failure(EditCommandParser::parse("0 /n Amy"), &expected);
    }

    #[test]
    fn edit_index_range_errors_keep_their_kind() {
        assert_eq!(EditCommandParser::parse("01 /n Amy"), Err(ParseError::ExcessiveLeadingZeros));
        assert_eq!(EditCommandParser::parse("2147483648 /n Amy"), Err(ParseError::IndexOverflow));
    }

    #[test]
    fn edit_empty_group_clears_groups() {
        let Ok(Command::Edit { descriptor, .. }) = EditCommandParser::parse("1 /g") else {
            panic!("expected edit");
        };
        let groups = descriptor.groups.unwrap();
        assert!(groups.is_empty());
        assert!(groups.is_frozen());
    }

    #[test]
    fn edit_apply_replaces_supplied_fields() {
        let original = Student::new(Name::new("Amy").unwrap(), StudentId::new("A1234567X").unwrap());
        let Ok(Command::Edit { descriptor, .. }) = EditCommandParser::parse("1 /n Amy Tan /g group 3") else {
            panic!("expected edit");
        };
        let edited = descriptor.apply(&original);
        assert_eq!(edited.name().as_str(), "Amy Tan");
        assert_eq!(edited.student_id(), original.student_id());
        assert!(edited.groups().contains_ignore_case("GROUP 3"));
        assert!(edited.groups().iter().any(|g| *g == Group::new("group 3").unwrap()));
    }

    #[test]
    fn delete_parses_index() {
        assert_eq!(
            DeleteCommandParser::parse(" 3 "),
            Ok(Command::Delete(Index::from_zero_based(2)))
        );
        assert_eq!(DeleteCommandParser::parse("2147483648"), Err(ParseError::IndexOverflow));
        assert_eq!(DeleteCommandParser::parse("007"), Err(ParseError::ExcessiveLeadingZeros));
    }

    #[test]
    fn delete_malformed_index_shows_usage() {
        let expected = invalid_format(DeleteCommandParser::USAGE);
        assert_parse_failure(DeleteCommandParser::parse(""), &expected);
        assert_parse_failure(DeleteCommandParser::parse("x"), &expected);
        assert_parse_failure(parse_command("delete"), &expected);
    }

    #[test]
    fn comment_requires_prefix() {
        assert_parse_failure(CommentCommandParser::parse("1"), &invalid_format(CommentCommandParser::USAGE));
    }

    #[test]
    fn comment_sets_and_clears() {
        assert_eq!(
            CommentCommandParser::parse("1 /c Great work / keep going"),
            Ok(Command::Comment {
                index: Index::from_zero_based(0),
                comment: Comment::new("Great work / keep going").unwrap(),
            })
        );
        assert_eq!(
            CommentCommandParser::parse("1 /c   "),
            Ok(Command::Comment {
                index: Index::from_zero_based(0),
                comment: Comment::default(),
            })
        );
    }

    #[test]
    fn comment_bad_index_keeps_its_kind() {
        assert_eq!(CommentCommandParser::parse("abc /c hi"), Err(ParseError::InvalidIndex));
        assert!(matches!(
            CommentCommandParser::parse("1 /c a /c b"),
            Err(ParseError::DuplicatePrefixes { .. })
        ));
    }

    #[test]
    fn remark_optional_prefix() {
        assert_eq!(
            RemarkCommandParser::parse("2"),
            Ok(Command::Remark {
                index: Index::from_zero_based(1),
                remark: Remark::default(),
            })
        );
        assert_eq!(
            RemarkCommandParser::parse("2 /r Likes to swim."),
            Ok(Command::Remark {
                index: Index::from_zero_based(1),
                remark: Remark::new("Likes to swim.").unwrap(),
            })
        );
    }

    #[test]
    fn remark_bad_index_shows_usage() {
        assert_parse_failure(RemarkCommandParser::parse("x /r hi"), &invalid_format(RemarkCommandParser::USAGE));
    }

    #[test]
    fn parse_command_routes_by_word() {
        assert_eq!(parse_command("list"), Ok(Command::List));
        assert_eq!(parse_command("  delete 1"), Ok(Command::Delete(Index::from_zero_based(0))));
        assert!(matches!(parse_command("find /n Alice"), Ok(Command::Find(_))));
        assert_eq!(
            parse_command("frobnicate 1"),
            Err(ParseError::UnknownCommand {
                word: "frobnicate".to_string()
            })
        );
        assert_eq!(
            parse_command("   "),
            Err(ParseError::InvalidFormat { usage: COMMAND_SUMMARY })
        );
    }

    #[test]
    fn usage_lookup() {
        assert_eq!(usage_for("find"), Some(FindCommandParser::USAGE));
        assert_eq!(usage_for("nope"), None);
    }

    #[test]
    fn command_display() {
        let command = parse_command("find /n Alice /id a1234567e").unwrap();
        assert_eq!(command.to_string(), "find where name contains any of [Alice] AND student id = A1234567E");
        assert_eq!(parse_command("remark 3").unwrap().to_string(), "clear remark on #3");
    }
}
