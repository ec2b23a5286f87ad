//! Error type shared by the fallible operations of this crate.
//!
//! Parsing a mode or portfolio type reports `Validation`; curation edits
//! that address a position past the end of a collection report `NotFound`.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} at index {index}")]
    NotFound { entity: &'static str, index: usize },

    #[error("Validation failed: {0}")]
    Validation(String),
}
