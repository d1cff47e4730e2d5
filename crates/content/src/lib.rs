#![forbid(unsafe_code)]

//! Built-in quality-engineering study content.
//!
//! Supplies the quiz engine and the reference browser with read-only
//! records: a multiple-choice question bank and an interview Q&A
//! collection covering quality systems, quality tools and Six Sigma.

mod quiz;
mod reference;

pub use quiz::builtin_bank;
pub use reference::builtin_reference;
