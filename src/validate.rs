use crate::error::InputError;
use crate::graph::PipelineGraph;
use crate::types::{Edge, Node};
use ahash::AHashSet as HashSet;
use log::debug;
use serde::{Deserialize, Serialize};

/// Outcome of a validation pass.
///
/// Errors make the pipeline invalid; warnings are advisory and never affect
/// `is_valid`. Both lists keep the check priority order: dangling edges,
/// self-loops, duplicate connections, cycles, then isolation warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Three-way rollup for the editor's status pill.
    pub fn status(&self) -> PipelineStatus {
        if !self.errors.is_empty() {
            PipelineStatus::Invalid
        } else if !self.warnings.is_empty() {
            PipelineStatus::Incomplete
        } else {
            PipelineStatus::Valid
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStatus {
    Valid,
    Invalid,
    Incomplete,
}

/// Validate a node/edge snapshot as a pipeline DAG.
///
/// Pure and synchronous; identical input yields an identical report. All
/// checks run independently (an edge can be reported as both dangling and
/// duplicated), except that malformed edges are kept out of cycle analysis,
/// where they cannot meaningfully participate.
///
/// `Err` is reserved for snapshots that break the id-uniqueness contract;
/// every user-editable defect comes back inside the report.
pub fn validate(nodes: &[Node], edges: &[Edge]) -> Result<ValidationReport, InputError> {
    let graph = PipelineGraph::build(nodes, edges)?;

    let mut errors = Vec::new();
    for (edge_id, node_id) in &graph.dangling {
        errors.push(format!("Edge {edge_id} references unknown node {node_id}"));
    }
    for (_, node_id) in &graph.self_loops {
        errors.push(format!("Node {node_id} cannot connect to itself"));
    }
    for (source, target) in &graph.duplicates {
        errors.push(format!("Duplicate connection from {source} to {target}"));
    }
    for node_id in find_cycles(&graph) {
        errors.push(format!("Cycle detected involving node {node_id}"));
    }

    let mut warnings = Vec::new();
    if nodes.len() > 1 {
        for node in nodes {
            let connected = graph.node(&node.id).is_some_and(|n| n.connected);
            if !connected {
                warnings.push(format!(
                    "Node {} ({}) is not connected to the pipeline",
                    node.id, node.label
                ));
            }
        }
    }

    debug!(
        "validated {} nodes / {} edges: {} errors, {} warnings",
        nodes.len(),
        edges.len(),
        errors.len(),
        warnings.len()
    );

    Ok(ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    })
}

enum StackItem<'a> {
    Node(&'a str),
    Exit(&'a str),
}

/// Three-color depth-first sweep over the deduplicated, non-dangling,
/// non-self-loop edge set. An edge into a node still on the current path is
/// a back edge and names one node on its cycle; restarting from every
/// unvisited node keeps disjoint cycles from masking each other.
fn find_cycles(graph: &PipelineGraph) -> Vec<&str> {
    let mut on_cycle = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut path: HashSet<&str> = HashSet::new();
    let mut stack: Vec<StackItem> = graph
        .nodes
        .keys()
        .rev()
        .map(|id| StackItem::Node(id.as_str()))
        .collect();

    while let Some(item) = stack.pop() {
        match item {
            StackItem::Exit(v) => {
                path.remove(v);
            }
            StackItem::Node(v) => {
                if visited.contains(v) {
                    continue;
                }
                visited.insert(v);
                path.insert(v);
                stack.push(StackItem::Exit(v));

                if let Some(node) = graph.node(v) {
                    for next in node.successors.iter().rev() {
                        if path.contains(next.as_str()) {
                            on_cycle.push(next.as_str());
                        } else {
                            stack.push(StackItem::Node(next.as_str()));
                        }
                    }
                }
            }
        }
    }

    on_cycle
}
