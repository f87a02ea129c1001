//! Domain models for Dogs Core

pub mod dog;

pub use dog::*;
