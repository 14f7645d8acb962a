// src/filtering/mod.rs

//! Decides which entries of the walk are candidates.
//!
//! `PatternSet` is the match predicate applied to file names; `is_pruned`
//! is the exclusion policy applied to directories.

mod excluded;
mod pattern;
mod shell_glob;

pub(crate) use excluded::is_pruned;
pub use pattern::PatternSet;
