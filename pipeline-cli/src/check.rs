//! Reads a pipeline from a file, stdin or string and validates it.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use pipeline_validator::{parse_pipeline, Pipeline, PipelineReport, ValidationError};

/// Path argument that means "read from stdin".
pub const STDIN_PATH: &str = "-";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid pipeline JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Validates the pipeline JSON at `path`, or stdin when `path` is [`STDIN_PATH`].
pub fn check_path(path: impl AsRef<Path>) -> Result<PipelineReport, CliError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    if display == STDIN_PATH {
        return check_reader(io::stdin().lock());
    }
    let file = File::open(path).map_err(|source| CliError::Io {
        path: display,
        source,
    })?;
    check_reader(BufReader::new(file))
}

pub fn check_reader(reader: impl Read) -> Result<PipelineReport, CliError> {
    let pipeline: Pipeline = serde_json::from_reader(reader)?;
    Ok(parse_pipeline(&pipeline)?)
}

pub fn check_str(json: &str) -> Result<PipelineReport, CliError> {
    let pipeline: Pipeline = serde_json::from_str(json)?;
    Ok(parse_pipeline(&pipeline)?)
}

/// Renders the report as the same JSON the HTTP endpoint returns.
pub fn render(report: &PipelineReport, pretty: bool) -> Result<String, CliError> {
    let out = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(out)
}
