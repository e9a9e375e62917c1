//! # Pipeline Validator
//!
//! Validates pipeline graphs drawn in a visual editor: counts nodes and edges,
//! checks that the graph is a DAG, and reports per-node connectivity health.
//! Everything is a pure function of the submitted pipeline; nothing is kept
//! between calls.
//!
//! ## Main Modules
//!
//! - [`model`]: `Node`, `Edge`, `Pipeline`, `NodeHealth`, `PipelineReport`.
//! - [`graph`]: `DirectedGraph`, `build` (drops dangling edges), `is_dag` / `find_cycle`.
//! - [`health`]: `HealthReason` and the per-node decision table `evaluate`.
//! - [`error`]: `ValidationError`.
//!
//! ## Features
//!
//! - `tracing`: structured logging of dropped edges, cycles and reports.
//!
//! ## Quick Start
//!
//! ```rust
//! use pipeline_validator::{parse_pipeline, Edge, Node, Pipeline};
//!
//! let pipeline = Pipeline::new(
//!     vec![Node::new("a", "input"), Node::new("b", "output")],
//!     vec![Edge::new("e1", "a", "b")],
//! );
//! let report = parse_pipeline(&pipeline).unwrap();
//! assert!(report.is_dag);
//! assert!(report.node_health.iter().all(|h| h.healthy));
//! ```

pub mod error;
pub mod graph;
pub mod health;
pub mod logging;
pub mod model;
mod parse;

pub use error::ValidationError;
pub use graph::{build, find_cycle, is_dag, DirectedGraph};
pub use health::{classify, evaluate, evaluate_with, Connectivity, HealthReason};
pub use model::{
    Edge, Node, NodeData, NodeHealth, NodeKind, Pipeline, PipelineReport, Position, INPUT_TYPE,
    OUTPUT_TYPE,
};
pub use parse::parse_pipeline;
