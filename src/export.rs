use crate::types::{Edge, Node, Position};
use serde::{Deserialize, Serialize};

/// The JSON document the editor copies to the clipboard and downloads.
///
/// Positions are rounded to whole units on export; the clipboard and
/// download mechanics themselves stay with the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineDocument {
    pub pipeline: Pipeline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub metadata: PipelineMetadata,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineMetadata {
    pub name: String,
    /// Caller-supplied creation timestamp; the core performs no clock I/O.
    pub created: String,
    pub node_count: usize,
    pub edge_count: usize,
}

impl PipelineDocument {
    pub fn new(name: &str, created: &str, nodes: &[Node], edges: &[Edge]) -> Self {
        let rounded: Vec<Node> = nodes
            .iter()
            .map(|node| Node {
                position: Position {
                    x: node.position.x.round(),
                    y: node.position.y.round(),
                },
                ..node.clone()
            })
            .collect();

        PipelineDocument {
            pipeline: Pipeline {
                metadata: PipelineMetadata {
                    name: name.to_string(),
                    created: created.to_string(),
                    node_count: rounded.len(),
                    edge_count: edges.len(),
                },
                nodes: rounded,
                edges: edges.to_vec(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
