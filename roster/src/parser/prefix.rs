use std::fmt;

/// Marker that introduces a field's value in command arguments, e.g. `/n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }

    pub const fn len(self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("/n");
pub const PREFIX_STUDENT_ID: Prefix = Prefix::new("/id");
pub const PREFIX_NET_ID: Prefix = Prefix::new("/nid");
pub const PREFIX_MAJOR: Prefix = Prefix::new("/m");
pub const PREFIX_YEAR: Prefix = Prefix::new("/y");
pub const PREFIX_GROUP: Prefix = Prefix::new("/g");
pub const PREFIX_COMMENT: Prefix = Prefix::new("/c");
pub const PREFIX_REMARK: Prefix = Prefix::new("/r");

/// Prefixes understood by the commands that build or change a whole record.
pub const RECORD_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_STUDENT_ID,
    PREFIX_NET_ID,
    PREFIX_MAJOR,
    PREFIX_YEAR,
    PREFIX_GROUP,
];

pub const FIND_PREFIXES: &[Prefix] = &[PREFIX_NAME, PREFIX_STUDENT_ID, PREFIX_GROUP];
pub const COMMENT_PREFIXES: &[Prefix] = &[PREFIX_COMMENT];
pub const REMARK_PREFIXES: &[Prefix] = &[PREFIX_REMARK];
