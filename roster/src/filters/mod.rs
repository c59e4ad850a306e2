//! Keyword normalisers shared by the search parser and the predicates.

pub mod normalizers;

pub use normalizers::*;
