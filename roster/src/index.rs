use std::fmt;
use std::num::NonZeroUsize;

/// Position of a student in the displayed list.
///
/// Users speak one-based indices; storage and list access use zero-based ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub const fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    pub const fn from_one_based(one_based: NonZeroUsize) -> Self {
        Self {
            zero_based: one_based.get() - 1,
        }
    }

    pub const fn zero_based(self) -> usize {
        self.zero_based
    }

    pub const fn one_based(self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_bases() {
        let index = Index::from_one_based(NonZeroUsize::new(3).unwrap());
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index.one_based(), 3);
        assert_eq!(index, Index::from_zero_based(2));
        assert_eq!(index.to_string(), "3");
    }
}
