#![allow(clippy::upper_case_acronyms)]

pub mod set;

pub use set::SimpleBSTSet;
