//! bug2test Domain Layer
//!
//! This crate contains the data model shared by the parser, the generator and
//! the command-line tool. It depends on nothing but `uuid` and defines the
//! fundamental value objects and trait interfaces the other layers build on.
//!
//! ## Key Concepts
//!
//! - **BugReport**: the structured form of a free-text bug report
//! - **GeneratedCase**: a rendered regression-test stub derived from one report
//! - **ConversionOutcome**: a report, its generated case, and a completeness score
//! - **RecordId**: a validated, opaque identifier for reports and cases
//! - **IdGenerator**: the injectable source of fresh identifiers
//!
//! ## Architecture
//!
//! - Pure data and validation only
//! - No I/O, no global state
//! - Identifier generation is a trait so callers can supply deterministic ids

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case;
pub mod confidence;
pub mod id;
pub mod outcome;
pub mod report;
pub mod traits;

// Re-exports for convenience
pub use case::GeneratedCase;
pub use confidence::Confidence;
pub use id::{RecordId, SequentialIdGenerator, UuidIdGenerator};
pub use outcome::ConversionOutcome;
pub use report::BugReport;
pub use traits::IdGenerator;
