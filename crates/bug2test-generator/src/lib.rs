//! bug2test Generator
//!
//! Turns structured [`BugReport`]s into pytest regression cases and exports
//! them as a flat test directory.
//!
//! # Overview
//!
//! - **Scoring**: four completeness checks, a quarter of the confidence each
//! - **Rendering**: a fixed test module with the report's steps as comments
//!   and an unconditional `NotImplementedError` standing in for the assertion
//! - **Tagging**: a base tag, plus error and exception tags derived from the
//!   actual behavior
//! - **Export**: one `test_<id>.py` per case and a `conftest.py` created only
//!   when absent
//!
//! # Usage
//!
//! ```no_run
//! use bug2test_extractor::BugParser;
//! use bug2test_generator::{CaseGenerator, CaseSuite};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = BugParser::default_config()?;
//! let generator = CaseGenerator::default_config()?;
//!
//! let report = parser.parse("## Title\nCrash on save\n## Actual Behavior\nValueError\n");
//! let outcome = generator.convert(&report);
//! println!("confidence: {}", outcome.confidence);
//!
//! let mut suite = CaseSuite::new();
//! suite.add(outcome.case);
//! let summary = suite.export("benchmark")?;
//! println!("{}", summary.summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! base_tag = "regression"
//! error_tag = "error-handling"
//! exception_tag = "exception"
//! marker_file = "conftest.py"
//! artifact_prefix = "test_"
//! artifact_extension = "py"
//! ```
//!
//! [`BugReport`]: bug2test_domain::BugReport

#![warn(missing_docs)]

mod error;
mod config;
pub mod template;
mod generator;
mod summary;
mod suite;

pub use error::GeneratorError;
pub use config::GeneratorConfig;
pub use generator::{CaseGenerator, DEFAULT_EXPECTED_RESULT};
pub use summary::ExportSummary;
pub use suite::{CaseSuite, MARKER_CONTENT};
