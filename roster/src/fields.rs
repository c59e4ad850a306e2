//! Typed, immutable field values.
//!
//! Every value here can only be obtained through its [`FieldRule`], so holding a `Name` or a
//! `Group` means the text already passed validation and normalisation.

use std::fmt;

use crate::errors::ConstraintViolation;
use crate::validators::{FieldKind, FieldRule, INSTITUTIONAL_DOMAIN, check_institutional_email};

mod sealed {
    pub trait Wrap: Sized {
        fn wrap(value: String) -> Self;
    }
}

/// A string value checked against its field's rule.
pub trait ValidatedField: sealed::Wrap + fmt::Display {
    const KIND: FieldKind;

    fn rule() -> &'static FieldRule {
        Self::KIND.rule()
    }

    fn is_valid(raw: &str) -> bool {
        Self::rule().is_valid(raw)
    }

    /// Validates `raw` as given and wraps the normalised value.
    fn new(raw: &str) -> Result<Self, ConstraintViolation> {
        Self::rule().check(raw).map(Self::wrap)
    }

    /// The explicit unset value, for fields that have one.
    fn empty() -> Option<Self> {
        if Self::rule().allows_empty {
            Some(Self::wrap(String::new()))
        } else {
            None
        }
    }

    fn as_str(&self) -> &str;
}

macro_rules! validated_field {
    ($(#[$meta:meta])* $name:ident => $kind:expr, unset) => {
        validated_field!($(#[$meta])* $name => $kind);

        impl Default for $name {
            fn default() -> Self {
                Self(String::new())
            }
        }
    };
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl sealed::Wrap for $name {
            fn wrap(value: String) -> Self {
                Self(value)
            }
        }

        impl ValidatedField for $name {
            const KIND: FieldKind = $kind;

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl $name {
            /// Returns `true` for the unset value.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

validated_field!(
    /// A student's full name.
    Name => FieldKind::Name
);
validated_field!(
    /// Matriculation number, stored upper-cased.
    StudentId => FieldKind::StudentId
);
validated_field!(
    /// Institutional address built from a NetId.
    InstitutionalEmail => FieldKind::Email, unset
);
validated_field!(Major => FieldKind::Major, unset);
validated_field!(Year => FieldKind::Year, unset);
validated_field!(
    /// Tutorial group membership such as `group 3`.
    Group => FieldKind::Group
);
validated_field!(Comment => FieldKind::Comment, unset);
validated_field!(Remark => FieldKind::Remark, unset);

impl InstitutionalEmail {
    /// Rebuilds an address read back from storage, where the domain is already present.
    pub fn from_stored(value: &str) -> Result<Self, ConstraintViolation> {
        check_institutional_email(value).map(Self)
    }

    /// The NetId part of the address, or `""` when unset.
    pub fn net_id(&self) -> &str {
        self.0.strip_suffix(INSTITUTIONAL_DOMAIN).unwrap_or(&self.0)
    }
}

impl Group {
    /// Whitespace-delimited words of the group name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}
