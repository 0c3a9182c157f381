//! Shared utility modules used across mailfix components.

pub mod levenshtein;
pub mod lines;
