//! Turns tokenized argument values into typed fields and commands.
//!
//! [`FieldParser`] is bound to the prefix family of the calling command so that a value which
//! fails validation while still containing a `/` can point the user at the prefixes that
//! command actually understands.

pub mod commands;
pub mod prefix;
pub mod tokenizer;

use std::num::NonZeroUsize;

use log::debug;

use crate::errors::{ParseError, ParseResult};
use crate::fields::{Group, ValidatedField};
use crate::groups::GroupList;
use crate::index::Index;
use crate::validators::PREFIX_MARKER;

pub use commands::{Command, EditStudentDescriptor, parse_command};
pub use prefix::Prefix;
pub use tokenizer::{ArgumentMultimap, tokenize};

/// Most leading zeros an index token may carry.
pub const MAX_LEADING_ZEROS: usize = 0;

/// Whether an empty value is accepted as the field's unset value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Required,
    Optional,
}

/// Field parsing for one command family.
#[derive(Debug, Clone, Copy)]
pub struct FieldParser {
    prefixes: &'static [Prefix],
}

impl FieldParser {
    pub const fn new(prefixes: &'static [Prefix]) -> Self {
        Self { prefixes }
    }

    /// Trims `raw` and validates it as a `T`.
    ///
    /// With [`Presence::Optional`], blank input yields the field's unset value when it has one.
    pub fn parse<T: ValidatedField>(&self, raw: &str, presence: Presence) -> ParseResult<T> {
        let trimmed = raw.trim();

        if presence == Presence::Optional
            && trimmed.is_empty()
            && let Some(unset) = T::empty()
        {
            return Ok(unset);
        }

        T::new(trimmed).map_err(|violation| {
            debug!("rejected {:?} for {:?}", trimmed, T::KIND);
            if trimmed.contains(PREFIX_MARKER) {
                ParseError::Constraint(violation.with_hint(&self.prefix_hint()))
            } else {
                ParseError::Constraint(violation)
            }
        })
    }

    pub fn parse_required<T: ValidatedField>(&self, raw: &str) -> ParseResult<T> {
        self.parse(raw, Presence::Required)
    }

    pub fn parse_optional<T: ValidatedField>(&self, raw: &str) -> ParseResult<T> {
        self.parse(raw, Presence::Optional)
    }

    /// Parses every raw group name into a frozen list, stopping at the first invalid one.
    pub fn parse_groups<I, S>(&self, raw_groups: I) -> ParseResult<GroupList>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups = GroupList::new();
        for raw in raw_groups {
            let group: Group = self.parse_required(raw.as_ref())?;
            groups.add(group)?;
        }
        Ok(groups.freeze())
    }

    /// Secondary message listing the prefixes of this command family.
    pub fn prefix_hint(&self) -> String {
        let example = self.prefixes.first().map_or("/n", |prefix| prefix.as_str());
        let supported: Vec<&str> = self.prefixes.iter().map(|prefix| prefix.as_str()).collect();
        format!(
            "If you are trying to use a prefix (eg. '{example}'), ensure the prefix is valid for this command \
             and there is a space before it.\nSupported prefixes: {}",
            supported.join(", ")
        )
    }
}

/// Parses a one-based index, trimming surrounding whitespace.
///
/// Checks run in a fixed order, each with its own error: digits only, leading zeros,
/// `i32` range, then non-zero.
pub fn parse_index(raw: &str) -> ParseResult<Index> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    if leading_zeros(trimmed) > MAX_LEADING_ZEROS {
        return Err(ParseError::ExcessiveLeadingZeros);
    }
    let value: i32 = trimmed.parse().map_err(|_| ParseError::IndexOverflow)?;

    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .map(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

// The last digit is the value itself, so "0" has no leading zeros.
fn leading_zeros(digits: &str) -> usize {
    digits[..digits.len() - 1].bytes().take_while(|b| *b == b'0').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{InstitutionalEmail, Major, Name, StudentId, Year};
    use crate::parser::prefix::{COMMENT_PREFIXES, RECORD_PREFIXES};
    use crate::validators::{MESSAGE_GROUP, MESSAGE_NAME, MESSAGE_STUDENT_ID, MESSAGE_YEAR};

    const PARSER: FieldParser = FieldParser::new(RECORD_PREFIXES);

    fn constraint_message(err: ParseError) -> String {
        match err {
            ParseError::Constraint(violation) => violation.message,
            other => panic!("expected a constraint violation, got {other:?}"),
        }
    }

    #[test]
    fn parse_index_accepts_positive_integers() {
        assert_eq!(parse_index("1").unwrap().one_based(), 1);
        assert_eq!(parse_index("  10  ").unwrap().zero_based(), 9);
        assert_eq!(parse_index("2147483647").unwrap().one_based(), 2_147_483_647);
    }

    #[test]
    fn parse_index_rejects_non_numbers() {
        assert_eq!(parse_index("abc"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("-1"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("+1"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("1 2"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index(""), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("   "), Err(ParseError::InvalidIndex));
    }

    #[test]
    fn parse_index_rejects_zero() {
        assert_eq!(parse_index("0"), Err(ParseError::InvalidIndex));
    }

    #[test]
    fn parse_index_rejects_leading_zeros() {
        assert_eq!(parse_index("01"), Err(ParseError::ExcessiveLeadingZeros));
        assert_eq!(parse_index("00"), Err(ParseError::ExcessiveLeadingZeros));
        // leading zeros are reported before overflow
        assert_eq!(parse_index("0099999999999"), Err(ParseError::ExcessiveLeadingZeros));
    }

    #[test]
    fn parse_index_rejects_overflow() {
        assert_eq!(parse_index("2147483648"), Err(ParseError::IndexOverflow));
        assert_eq!(parse_index("99999999999999999999"), Err(ParseError::IndexOverflow));
    }

    #[test]
    fn parse_trims_input() {
        let name: Name = PARSER.parse_required("  Alice Pauline ").unwrap();
        assert_eq!(name.as_str(), "Alice Pauline");
    }

    #[test]
    fn parse_failure_without_marker_has_bare_message() {
        let err = PARSER.parse_required::<Year>("7").unwrap_err();
        assert_eq!(constraint_message(err), MESSAGE_YEAR);
    }

    #[test]
    fn parse_failure_with_marker_lists_prefixes() {
        let err = PARSER.parse_required::<StudentId>("A1234567E /x").unwrap_err();
        let message = constraint_message(err);
        assert!(message.starts_with(MESSAGE_STUDENT_ID));
        assert!(message.ends_with("Supported prefixes: /n, /id, /nid, /m, /y, /g"));
    }

    #[test]
    fn hint_uses_the_callers_family() {
        let parser = FieldParser::new(COMMENT_PREFIXES);
        let err = parser.parse_required::<Year>("3/").unwrap_err();
        assert!(constraint_message(err).ends_with("Supported prefixes: /c"));
    }

    #[test]
    fn name_with_slash_still_reports_name_rule() {
        let err = PARSER.parse_required::<Name>("Alice*/o").unwrap_err();
        assert!(constraint_message(err).starts_with(MESSAGE_NAME));
    }

    #[test]
    fn optional_accepts_blank_as_unset() {
        let major: Major = PARSER.parse_optional("   ").unwrap();
        assert!(major.is_empty());
        let email: InstitutionalEmail = PARSER.parse_optional("").unwrap();
        assert!(email.is_empty());
    }

    #[test]
    fn optional_still_validates_content() {
        assert!(PARSER.parse_optional::<Year>("9").is_err());
        let email: InstitutionalEmail = PARSER.parse_optional(" e1234567 ").unwrap();
        assert_eq!(email.as_str(), "e1234567@u.nus.edu");
    }

    #[test]
    fn optional_blank_fails_for_fields_without_unset() {
        assert!(PARSER.parse_optional::<Name>("").is_err());
        assert!(PARSER.parse_required::<Major>("").is_err());
    }

    #[test]
    fn parse_groups_builds_frozen_list() {
        let groups = PARSER.parse_groups(["group 1", " group 2 ", "group 1"]).unwrap();
        assert_eq!(groups.len(), 2);
        assert!(groups.is_frozen());
    }

    #[test]
    fn parse_groups_fails_fast() {
        let err = PARSER.parse_groups(vec!["group 1".to_string(), "Group 2".to_string()]).unwrap_err();
        assert_eq!(constraint_message(err), MESSAGE_GROUP);
    }

    #[test]
    fn parse_groups_of_nothing_is_empty() {
        let groups = PARSER.parse_groups(Vec::<String>::new()).unwrap();
        assert!(groups.is_empty());
    }
}
