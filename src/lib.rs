// Validation and layered layout core for a pipeline DAG editor.
// The editor owns the node/edge collections; every call here takes a
// snapshot and returns a new result, never retaining or mutating input.

#![deny(clippy::all)]

// Internal modules (implementation details)
mod rank;

// Public modules (user-facing API)
pub mod error;
pub mod export;
pub mod graph;
pub mod layout;
pub mod types;
pub mod validate;

// WASM bindings (exposed to the browser editor)
#[cfg(feature = "wasm")]
pub mod wasm;

// ===== Essential Public API (for 99% of users) =====
/// Structural validation - reports whether a snapshot is a well-formed DAG
pub use validate::{validate, PipelineStatus, ValidationReport};

/// Layered layout - recomputes every node position
pub use layout::{grid_positions, layout, layout_with_config};

/// Input/output types shared with the editor
pub use types::{Edge, Layout, LayoutConfig, Node, Position};

// ===== Advanced Public API =====
/// Normalized adjacency snapshot for direct inspection
pub use graph::{check_connection, edge_id, PipelineGraph};

/// Pipeline JSON document (clipboard / download shape)
pub use export::PipelineDocument;

/// Contract-violation and connection-rejection error kinds
pub use error::{ConnectionError, InputError};
