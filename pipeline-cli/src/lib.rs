//! pipeline-cli library: read a pipeline JSON document, validate it, render the report.
//!
//! ## Usage
//!
//! ```rust,no_run
//! let report = pipeline_cli::check_path("pipeline.json").unwrap();
//! println!("{}", pipeline_cli::render(&report, true).unwrap());
//! ```

mod check;

pub use check::{check_path, check_reader, check_str, render, CliError, STDIN_PATH};
pub use pipeline_validator::PipelineReport;

#[cfg(test)]
mod tests;
