//! Directed graph over pipeline node ids: build from nodes + edges, check for cycles.
//!
//! [`build`] keeps only edges whose endpoints are both declared nodes; [`is_dag`]
//! runs a depth-first search over the result.

mod builder;
mod cycle;
mod directed;

pub use builder::build;
pub use cycle::{find_cycle, is_dag};
pub use directed::DirectedGraph;
