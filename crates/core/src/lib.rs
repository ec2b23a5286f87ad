//! `folio-core`: portfolio aggregation and validation engine.
//!
//! Pure domain logic with no I/O. The presentation layer composes the
//! pieces: intake payloads go through [`intake::scan`], persisted team
//! records through [`merge::merge`], and every list is presented with
//! [`ordering::order`].

pub mod curation;
pub mod dates;
pub mod error;
pub mod highlights;
pub mod intake;
pub mod merge;
pub mod ordering;
pub mod records;

pub use error::CoreError;
pub use highlights::HighlightItem;
pub use intake::{MissingFieldEntry, PortfolioType};
pub use ordering::SortMode;
pub use records::{MemberContribution, Portfolio, Record, RecordKind, TeamAggregate};
