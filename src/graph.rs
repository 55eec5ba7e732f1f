use crate::error::{ConnectionError, InputError};
use crate::types::{Edge, Node};
use ahash::AHashSet as HashSet;
use indexmap::IndexMap;

/// Deterministic edge id for a `source -> target` connection.
///
/// Matches the editor's id convention, so drawing the same connection twice
/// collides on the id instead of silently coexisting.
pub fn edge_id(source: &str, target: &str) -> String {
    format!("e{source}-{target}")
}

// Normalized per-node view consumed by the validator and the layout engine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphNode {
    /// Outgoing neighbors, deduplicated, in edge insertion order.
    pub successors: Vec<String>,
    /// Incoming edge count over the same deduplicated edge set.
    pub indegree: usize,
    /// Whether any raw edge references this node at all.
    pub connected: bool,
}

/// Normalized snapshot of a node/edge collection.
///
/// Built fresh on every call; never holds onto the caller's collections.
/// Structural defects are recorded rather than dropped or panicked on:
/// dangling endpoints, self-loops, and duplicate pairs each land in their
/// own list, and only well-formed first-occurrence edges feed the adjacency
/// used for cycle analysis and layering. Node and edge iteration order is
/// the caller's insertion order, which the layout tie-breaking relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineGraph {
    pub nodes: IndexMap<String, GraphNode>,
    /// `(edge id, missing node id)` per unknown endpoint.
    pub dangling: Vec<(String, String)>,
    /// `(edge id, node id)` per `source == target` edge.
    pub self_loops: Vec<(String, String)>,
    /// `(source, target)`, recorded once per duplicated pair.
    pub duplicates: Vec<(String, String)>,
}

impl PipelineGraph {
    pub fn build(nodes: &[Node], edges: &[Edge]) -> Result<Self, InputError> {
        let mut graph_nodes: IndexMap<String, GraphNode> = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            if graph_nodes
                .insert(node.id.clone(), GraphNode::default())
                .is_some()
            {
                return Err(InputError::DuplicateNodeId(node.id.clone()));
            }
        }

        let mut edge_ids: HashSet<&str> = HashSet::with_capacity(edges.len());
        let mut seen_pairs: HashSet<(&str, &str)> = HashSet::with_capacity(edges.len());
        let mut reported_pairs: HashSet<(&str, &str)> = HashSet::new();

        let mut dangling = Vec::new();
        let mut self_loops = Vec::new();
        let mut duplicates = Vec::new();

        for edge in edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(InputError::DuplicateEdgeId(edge.id.clone()));
            }

            // Each sweep below classifies the edge independently; an edge can
            // be dangling and duplicated at the same time.
            let source_known = graph_nodes.contains_key(edge.source.as_str());
            let target_known = graph_nodes.contains_key(edge.target.as_str());
            if !source_known {
                dangling.push((edge.id.clone(), edge.source.clone()));
            }
            if !target_known {
                dangling.push((edge.id.clone(), edge.target.clone()));
            }
            if edge.source == edge.target {
                self_loops.push((edge.id.clone(), edge.source.clone()));
            }

            let pair = (edge.source.as_str(), edge.target.as_str());
            let first_occurrence = seen_pairs.insert(pair);
            if !first_occurrence && reported_pairs.insert(pair) {
                duplicates.push((edge.source.clone(), edge.target.clone()));
            }

            if let Some(node) = graph_nodes.get_mut(edge.source.as_str()) {
                node.connected = true;
            }
            if let Some(node) = graph_nodes.get_mut(edge.target.as_str()) {
                node.connected = true;
            }

            if first_occurrence && source_known && target_known && edge.source != edge.target {
                if let Some(node) = graph_nodes.get_mut(edge.source.as_str()) {
                    node.successors.push(edge.target.clone());
                }
                if let Some(node) = graph_nodes.get_mut(edge.target.as_str()) {
                    node.indegree += 1;
                }
            }
        }

        Ok(PipelineGraph {
            nodes: graph_nodes,
            dangling,
            self_loops,
            duplicates,
        })
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Pre-validate a connection the user is about to draw.
///
/// Mirrors the editor's connect handler: both endpoints must exist, a node
/// cannot connect to itself, and a `(source, target)` pair may only exist
/// once.
pub fn check_connection(
    nodes: &[Node],
    edges: &[Edge],
    source: &str,
    target: &str,
) -> Result<(), ConnectionError> {
    if !nodes.iter().any(|n| n.id == source) {
        return Err(ConnectionError::UnknownEndpoint(source.to_string()));
    }
    if !nodes.iter().any(|n| n.id == target) {
        return Err(ConnectionError::UnknownEndpoint(target.to_string()));
    }
    if source == target {
        return Err(ConnectionError::SelfConnection);
    }
    if edges.iter().any(|e| e.source == source && e.target == target) {
        return Err(ConnectionError::DuplicateConnection {
            source: source.to_string(),
            target: target.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> Node {
        Node::new(id, id)
    }

    #[test]
    fn edge_ids_collide_for_the_same_pair() {
        assert_eq!(edge_id("n1", "n2"), "en1-n2");
        assert_eq!(Edge::between("n1", "n2").id, edge_id("n1", "n2"));
    }

    #[test]
    fn adjacency_follows_insertion_order() {
        let nodes = vec![node("a"), node("b"), node("c")];
        let edges = vec![Edge::between("a", "c"), Edge::between("a", "b")];
        let graph = PipelineGraph::build(&nodes, &edges).unwrap();

        assert_eq!(graph.node("a").unwrap().successors, vec!["c", "b"]);
        assert_eq!(graph.node("a").unwrap().indegree, 0);
        assert_eq!(graph.node("b").unwrap().indegree, 1);
        assert_eq!(graph.node("c").unwrap().indegree, 1);
        let ids: Vec<&str> = graph.nodes.keys().map(|k| k.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn dangling_endpoints_are_recorded_not_dropped() {
        let nodes = vec![node("a")];
        let edges = vec![Edge::between("a", "ghost"), Edge::between("ghost", "a")];
        let graph = PipelineGraph::build(&nodes, &edges).unwrap();

        assert_eq!(
            graph.dangling,
            vec![
                ("ea-ghost".to_string(), "ghost".to_string()),
                ("eghost-a".to_string(), "ghost".to_string()),
            ]
        );
        // The dangling edges stay out of the adjacency entirely.
        assert!(graph.node("a").unwrap().successors.is_empty());
        assert_eq!(graph.node("a").unwrap().indegree, 0);
        // They still count as connections for the touched node.
        assert!(graph.node("a").unwrap().connected);
    }

    #[test]
    fn duplicate_pairs_recorded_once() {
        let nodes = vec![node("a"), node("b")];
        let edges = vec![
            Edge::between("a", "b"),
            Edge {
                id: "dup1".to_string(),
                ..Edge::between("a", "b")
            },
            Edge {
                id: "dup2".to_string(),
                ..Edge::between("a", "b")
            },
        ];
        let graph = PipelineGraph::build(&nodes, &edges).unwrap();

        assert_eq!(graph.duplicates, vec![("a".to_string(), "b".to_string())]);
        // Adjacency keeps the first occurrence only.
        assert_eq!(graph.node("a").unwrap().successors, vec!["b"]);
        assert_eq!(graph.node("b").unwrap().indegree, 1);
    }

    #[test]
    fn self_loops_are_recorded() {
        let nodes = vec![node("a")];
        let edges = vec![Edge::between("a", "a")];
        let graph = PipelineGraph::build(&nodes, &edges).unwrap();

        assert_eq!(
            graph.self_loops,
            vec![("ea-a".to_string(), "a".to_string())]
        );
        assert!(graph.node("a").unwrap().successors.is_empty());
    }

    #[test]
    fn duplicate_node_id_is_a_contract_error() {
        let nodes = vec![node("a"), node("a")];
        assert_eq!(
            PipelineGraph::build(&nodes, &[]),
            Err(InputError::DuplicateNodeId("a".to_string()))
        );
    }

    #[test]
    fn duplicate_edge_id_is_a_contract_error() {
        let nodes = vec![node("a"), node("b"), node("c")];
        let edges = vec![
            Edge {
                id: "e1".to_string(),
                ..Edge::between("a", "b")
            },
            Edge {
                id: "e1".to_string(),
                ..Edge::between("b", "c")
            },
        ];
        assert_eq!(
            PipelineGraph::build(&nodes, &edges),
            Err(InputError::DuplicateEdgeId("e1".to_string()))
        );
    }

    #[test]
    fn connection_prechecks() {
        let nodes = vec![node("a"), node("b")];
        let edges = vec![Edge::between("a", "b")];

        assert_eq!(
            check_connection(&nodes, &edges, "ghost", "b"),
            Err(ConnectionError::UnknownEndpoint("ghost".to_string()))
        );
        assert_eq!(
            check_connection(&nodes, &edges, "a", "a"),
            Err(ConnectionError::SelfConnection)
        );
        assert_eq!(
            check_connection(&nodes, &edges, "a", "b"),
            Err(ConnectionError::DuplicateConnection {
                source: "a".to_string(),
                target: "b".to_string(),
            })
        );
        assert_eq!(check_connection(&nodes, &edges, "b", "a"), Ok(()));
    }
}
