use crate::graph::PipelineGraph;
use ahash::AHashSet as HashSet;
use indexmap::IndexMap;
use std::collections::VecDeque;

/// Assign every node its layer: 0 for nodes with no incoming edges,
/// otherwise one past its deepest predecessor (longest-path layering).
///
/// Nodes stranded on a cycle never reach indegree zero; they are appended in
/// insertion order and layered best-effort from whatever already propagated
/// to them. Work stays bounded on any snapshot, cyclic or not.
pub(crate) fn assign_layers(graph: &PipelineGraph) -> IndexMap<String, usize> {
    let mut indegree: IndexMap<&str, usize> = graph
        .nodes
        .iter()
        .map(|(id, node)| (id.as_str(), node.indegree))
        .collect();

    let mut queue: VecDeque<&str> = indegree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(id, _)| *id)
        .collect();

    let mut order: Vec<&str> = Vec::with_capacity(graph.nodes.len());
    while let Some(id) = queue.pop_front() {
        order.push(id);
        if let Some(node) = graph.node(id) {
            for next in &node.successors {
                if let Some(degree) = indegree.get_mut(next.as_str()) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(next.as_str());
                    }
                }
            }
        }
    }

    if order.len() < graph.nodes.len() {
        let seen: HashSet<&str> = order.iter().copied().collect();
        for id in graph.nodes.keys() {
            if !seen.contains(id.as_str()) {
                order.push(id.as_str());
            }
        }
    }

    let mut layers: IndexMap<String, usize> = IndexMap::with_capacity(graph.nodes.len());
    for id in &order {
        let layer = *layers.entry((*id).to_string()).or_insert(0);
        if let Some(node) = graph.node(id) {
            for next in &node.successors {
                let entry = layers.entry(next.clone()).or_insert(0);
                if *entry < layer + 1 {
                    *entry = layer + 1;
                }
            }
        }
    }

    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Edge, Node};

    fn graph(node_ids: &[&str], edges: &[(&str, &str)]) -> PipelineGraph {
        let nodes: Vec<Node> = node_ids.iter().map(|id| Node::new(id, id)).collect();
        let edges: Vec<Edge> = edges.iter().map(|(s, t)| Edge::between(s, t)).collect();
        PipelineGraph::build(&nodes, &edges).unwrap()
    }

    #[test]
    fn chain_layers_increase() {
        let layers = assign_layers(&graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]));
        assert_eq!(layers["a"], 0);
        assert_eq!(layers["b"], 1);
        assert_eq!(layers["c"], 2);
    }

    #[test]
    fn fan_out_shares_a_layer() {
        let layers = assign_layers(&graph(&["n1", "n2", "n3"], &[("n1", "n2"), ("n1", "n3")]));
        assert_eq!(layers["n1"], 0);
        assert_eq!(layers["n2"], 1);
        assert_eq!(layers["n3"], 1);
    }

    #[test]
    fn layer_is_longest_path_not_shortest() {
        // d is reachable both directly from a and through b -> c.
        let layers = assign_layers(&graph(
            &["a", "b", "c", "d"],
            &[("a", "d"), ("a", "b"), ("b", "c"), ("c", "d")],
        ));
        assert_eq!(layers["d"], 3);
    }

    #[test]
    fn cyclic_input_terminates_with_every_node_layered() {
        let layers = assign_layers(&graph(
            &["a", "b", "c"],
            &[("a", "b"), ("b", "a"), ("b", "c")],
        ));
        assert_eq!(layers.len(), 3);
    }

    #[test]
    fn unconnected_nodes_sit_on_layer_zero() {
        let layers = assign_layers(&graph(&["a", "b"], &[]));
        assert_eq!(layers["a"], 0);
        assert_eq!(layers["b"], 0);
    }
}
