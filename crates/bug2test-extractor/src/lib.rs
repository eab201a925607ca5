//! bug2test Extractor
//!
//! Converts unstructured bug report text into structured [`BugReport`]s.
//!
//! # Overview
//!
//! The Extractor is the entry point for ingesting bug reports written in
//! Markdown or plain text, and for issues pulled from an issue tracker. It is
//! purely heuristic: fixed rule tables recognise section headings, inline
//! labels, list items and key/value lines. No input ever makes a parse fail;
//! missing structure degrades to fallback values.
//!
//! # Architecture
//!
//! ```text
//! Text → PatternLibrary → section spans → extract_* → BugReport
//! ```
//!
//! # Example Usage
//!
//! ```
//! use bug2test_extractor::{BugParser, IssuePayload};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = BugParser::default_config()?;
//!
//! let report = parser.parse("## Steps to Reproduce\n- Step one\n- Step two\n");
//! assert_eq!(report.steps().len(), 2);
//!
//! let issue = IssuePayload::from_json(r#"{"number": 42, "title": "Bug title", "body": ""}"#)?;
//! let report = parser.parse_external_issue(&issue);
//! assert_eq!(report.id().as_str(), "gh-42");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! [`BugReport`]: bug2test_domain::BugReport

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod extract;
pub mod patterns;
mod parser;


pub use error::ExtractorError;
pub use config::ParserConfig;
pub use types::{IssueKey, IssuePayload};
pub use extract::{
    extract_environment, extract_steps, sanitize_identifier,
    FALLBACK_IDENTIFIER, MAX_IDENTIFIER_LEN,
};
pub use patterns::{PatternLibrary, Section, SectionHit};
pub use parser::BugParser;
