//! cardbox-core: Domain model for cardbox flashcards.
//!
//! This crate provides:
//! - `Flashcard`: a question/answer card tagged with categories and a
//!   difficulty rating
//! - `ValidationError`: hydration failures when parsing untrusted input
//!
//! Storage and transport layers build on top of this crate. Untrusted data
//! (e.g. JSON from storage or a request body) is hydrated through
//! [`Flashcard::from_value`]; already-validated data is constructed directly.

pub mod card;
pub mod error;

pub use card::{DEFAULT_DIFFICULTY, Flashcard, MAX_DIFFICULTY, MIN_DIFFICULTY};
pub use error::{Result, ValidationError};
