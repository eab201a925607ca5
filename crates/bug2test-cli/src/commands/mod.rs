//! Command implementations.

pub mod batch;
pub mod convert;
pub mod parse;

pub use self::batch::{collect_inputs, execute_batch, glob_to_regex};
pub use self::convert::execute_convert;
pub use self::parse::{execute_parse, read_report};
