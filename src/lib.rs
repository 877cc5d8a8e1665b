//! Character-class password generation backed by the OS CSPRNG.
//!
//! Every password contains at least one character from each selected class,
//! and class positions are shuffled so none is fixed.

pub mod entropy;
pub mod pass;
pub mod settings;
pub mod terminal;
