//! Field rules for every value a student record carries.
//!
//! Each field is described by a static [`FieldRule`]: an optional pattern, a normaliser applied
//! after a successful check, the fixed constraint message and whether an empty value is an
//! accepted "unset" state. The typed values in [`crate::fields`] and the parser both go through
//! these descriptors, so live input and persisted data share one rule set.

use email_address::EmailAddress;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ConstraintViolation;

/// Character that marks a prefix (`/n`, `/id`, ...) in command input.
pub const PREFIX_MARKER: char = '/';

/// Domain appended to every NetId to form the stored institutional email.
pub const INSTITUTIONAL_DOMAIN: &str = "@u.nus.edu";

pub const MESSAGE_NAME: &str = "Names should only contain letters, digits, spaces and the characters , . ' - / ( ) @, \
     should start with a letter or digit, and should not be blank";
pub const MESSAGE_STUDENT_ID: &str =
    "Student ID should be a letter, followed by 7 digits, and end with a letter (e.g. A1234567E)";
pub const MESSAGE_NET_ID: &str =
    "NetID should be the letter e followed by 7 digits (e.g. e1234567); @u.nus.edu is added automatically";
pub const MESSAGE_EMAIL: &str = "Email should be a NetID followed by @u.nus.edu (e.g. e1234567@u.nus.edu)";
pub const MESSAGE_MAJOR: &str =
    "Major should start with a letter and only contain letters, spaces and the characters & , ( ) . -";
pub const MESSAGE_YEAR: &str = "Year should be a single digit from 1 to 6";
pub const MESSAGE_GROUP: &str = "Group is written as /g group [number] (in lowercase)";

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Alphabetic}0-9][\p{Alphabetic}0-9 ,.'\-/()@]*$").expect("name pattern"));
static STUDENT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][0-9]{7}[A-Za-z]$").expect("student id pattern"));
static NET_ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[eE][0-9]{7}$").expect("netid pattern"));
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[eE][0-9]{7}@u\.nus\.edu$").expect("email pattern"));
static MAJOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z &,().\-]*$").expect("major pattern"));
static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-6]$").expect("year pattern"));
static GROUP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^group [0-9]+$").expect("group pattern"));

/// The fields of a student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Name,
    StudentId,
    Email,
    Major,
    Year,
    Group,
    Comment,
    Remark,
}

impl FieldKind {
    /// Human-readable label used in user-facing messages.
    pub const fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::StudentId => "Student ID",
            FieldKind::Email => "NetID",
            FieldKind::Major => "Major",
            FieldKind::Year => "Year",
            FieldKind::Group => "Group",
            FieldKind::Comment => "Comment",
            FieldKind::Remark => "Remark",
        }
    }

    /// Type name used when persisted data is missing the field.
    pub const fn type_name(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::StudentId => "StudentId",
            FieldKind::Email => "Email",
            FieldKind::Major => "Major",
            FieldKind::Year => "Year",
            FieldKind::Group => "Group",
            FieldKind::Comment => "Comment",
            FieldKind::Remark => "Remark",
        }
    }

    pub fn rule(self) -> &'static FieldRule {
        match self {
            FieldKind::Name => &NAME_RULE,
            FieldKind::StudentId => &STUDENT_ID_RULE,
            FieldKind::Email => &NET_ID_RULE,
            FieldKind::Major => &MAJOR_RULE,
            FieldKind::Year => &YEAR_RULE,
            FieldKind::Group => &GROUP_RULE,
            FieldKind::Comment => &COMMENT_RULE,
            FieldKind::Remark => &REMARK_RULE,
        }
    }
}

/// Descriptor for one field's syntax.
pub struct FieldRule {
    pub kind: FieldKind,
    pub message: &'static str,
    /// Whether `""` is an accepted unset value in optional parsing.
    pub allows_empty: bool,
    pattern: Option<&'static Lazy<Regex>>,
    normalize: fn(&str) -> String,
}

impl FieldRule {
    /// Returns `true` if `raw` satisfies the rule as given (no trimming).
    pub fn is_valid(&self, raw: &str) -> bool {
        match self.pattern {
            Some(pattern) => pattern.is_match(raw),
            None => true,
        }
    }

    /// Validates `raw` and returns the normalised stored value.
    pub fn check(&self, raw: &str) -> Result<String, ConstraintViolation> {
        if self.is_valid(raw) {
            Ok((self.normalize)(raw))
        } else {
            Err(ConstraintViolation::new(self.kind, self.message))
        }
    }
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("kind", &self.kind)
            .field("pattern", &self.pattern.map(|p| p.as_str()))
            .field("allows_empty", &self.allows_empty)
            .finish()
    }
}

fn keep(raw: &str) -> String {
    raw.to_string()
}

fn upper(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

fn net_id_to_email(raw: &str) -> String {
    format!("{}{}", raw.to_ascii_lowercase(), INSTITUTIONAL_DOMAIN)
}

static NAME_RULE: FieldRule = FieldRule {
    kind: FieldKind::Name,
    message: MESSAGE_NAME,
    allows_empty: false,
    pattern: Some(&NAME_PATTERN),
    normalize: keep,
};

static STUDENT_ID_RULE: FieldRule = FieldRule {
    kind: FieldKind::StudentId,
    message: MESSAGE_STUDENT_ID,
    allows_empty: false,
    pattern: Some(&STUDENT_ID_PATTERN),
    normalize: upper,
};

static NET_ID_RULE: FieldRule = FieldRule {
    kind: FieldKind::Email,
    message: MESSAGE_NET_ID,
    allows_empty: true,
    pattern: Some(&NET_ID_PATTERN),
    normalize: net_id_to_email,
};

static MAJOR_RULE: FieldRule = FieldRule {
    kind: FieldKind::Major,
    message: MESSAGE_MAJOR,
    allows_empty: true,
    pattern: Some(&MAJOR_PATTERN),
    normalize: keep,
};

static YEAR_RULE: FieldRule = FieldRule {
    kind: FieldKind::Year,
    message: MESSAGE_YEAR,
    allows_empty: true,
    pattern: Some(&YEAR_PATTERN),
    normalize: keep,
};

static GROUP_RULE: FieldRule = FieldRule {
    kind: FieldKind::Group,
    message: MESSAGE_GROUP,
    allows_empty: false,
    pattern: Some(&GROUP_PATTERN),
    normalize: keep,
};

static COMMENT_RULE: FieldRule = FieldRule {
    kind: FieldKind::Comment,
    message: "",
    allows_empty: true,
    pattern: None,
    normalize: keep,
};

static REMARK_RULE: FieldRule = FieldRule {
    kind: FieldKind::Remark,
    message: "",
    allows_empty: true,
    pattern: None,
    normalize: keep,
};

/// Returns `true` if the provided string is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// Returns `true` if `value` is a complete institutional address as stored on a record.
pub fn is_valid_institutional_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value) && is_valid_email(value)
}

/// Checks a stored email value and returns it in the same form a freshly parsed NetId takes.
pub fn check_institutional_email(value: &str) -> Result<String, ConstraintViolation> {
    if is_valid_institutional_email(value) {
        Ok(value.to_ascii_lowercase())
    } else {
        Err(ConstraintViolation::new(FieldKind::Email, MESSAGE_EMAIL))
    }
}
