use serde::{Deserialize, Serialize};

// Default spacing between layers (x) and between rows within a layer (y)
pub const DEFAULT_HORIZONTAL_SPACING: f64 = 200.0;
pub const DEFAULT_VERTICAL_SPACING: f64 = 150.0;

fn default_node_kind() -> String {
    "custom".to_string()
}

fn default_edge_kind() -> String {
    "default".to_string()
}

// 2D coordinate for node placement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Node in the pipeline graph.
///
/// `kind` is an opaque role tag carried for the editor; validation and
/// layout treat every kind uniformly. On the wire it is named `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub position: Position,
    #[serde(rename = "type", default = "default_node_kind")]
    pub kind: String,
}

impl Node {
    pub fn new(id: &str, label: &str) -> Self {
        Node {
            id: id.to_string(),
            label: label.to_string(),
            position: Position::default(),
            kind: default_node_kind(),
        }
    }
}

/// Directed edge `source -> target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default = "default_edge_kind")]
    pub kind: String,
}

impl Edge {
    /// Edge with the deterministic id for its `(source, target)` pair.
    pub fn between(source: &str, target: &str) -> Self {
        Edge {
            id: crate::graph::edge_id(source, target),
            source: source.to_string(),
            target: target.to_string(),
            kind: default_edge_kind(),
        }
    }
}

// Spacing options for the layout algorithm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub horizontal_spacing: f64,
    pub vertical_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            horizontal_spacing: DEFAULT_HORIZONTAL_SPACING,
            vertical_spacing: DEFAULT_VERTICAL_SPACING,
        }
    }
}

/// Result of a layout pass: repositioned nodes, edges passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}
