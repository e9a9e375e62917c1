//! Pipeline data model: nodes, edges and the per-node health report.
//!
//! Mirrors the JSON payload a visual pipeline editor submits: node `type` is a
//! free-form tag, edges may carry handle ids, and position / label data ride
//! along untouched. Everything here is a plain value record; the graph and
//! health logic live in [`crate::graph`] and [`crate::health`].

use serde::{Deserialize, Serialize};

/// Type tag of a node that feeds data into the pipeline.
pub const INPUT_TYPE: &str = "input";

/// Type tag of a node that receives the pipeline's result.
pub const OUTPUT_TYPE: &str = "output";

/// Canvas position of a node. Not used by validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Editor data attached to a node. Not used by validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A pipeline node as submitted by the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier, unique within one pipeline.
    pub id: String,
    /// Type tag: `"input"`, `"output"`, or any processing type (`"llm"`, `"text"`, ...).
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: NodeData,
}

impl Node {
    /// Creates a node with the given id and type tag; position and data are defaulted.
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            position: Position::default(),
            data: NodeData::default(),
        }
    }

    /// Classifies this node by its type tag.
    pub fn kind(&self) -> NodeKind {
        NodeKind::from_type(&self.node_type)
    }
}

/// Role of a node for health evaluation.
///
/// Only `"input"` and `"output"` are special; every other tag (including
/// `"base"`) is a processing node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Input,
    Output,
    Processing,
}

impl NodeKind {
    pub fn from_type(node_type: &str) -> Self {
        match node_type {
            INPUT_TYPE => NodeKind::Input,
            OUTPUT_TYPE => NodeKind::Output,
            _ => NodeKind::Processing,
        }
    }
}

/// A directed edge between two nodes.
///
/// Several edges may join the same pair through different handles; only
/// `source` and `target` matter for validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(
        rename = "sourceHandle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_handle: Option<String>,
    #[serde(
        rename = "targetHandle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub target_handle: Option<String>,
}

impl Edge {
    /// Creates an edge without handles.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
        }
    }
}

/// Nodes and edges submitted in one validation request.
///
/// Missing `nodes` or `edges` deserialize as empty lists; an empty node list is
/// rejected later by [`crate::parse_pipeline`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Pipeline {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }
}

/// Health verdict for one node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeHealth {
    pub node_id: String,
    pub healthy: bool,
    pub reason: String,
}

/// Result of validating a pipeline.
///
/// `num_nodes` and `num_edges` count the submitted lists as-is, dangling edges
/// included. `node_health` follows the submitted node order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
    pub node_health: Vec<NodeHealth>,
}
