use crate::error::InputError;
use crate::graph::PipelineGraph;
use crate::rank::assign_layers;
use crate::types::{
    Edge, Layout, LayoutConfig, Node, Position, DEFAULT_HORIZONTAL_SPACING,
    DEFAULT_VERTICAL_SPACING,
};
use ahash::AHashMap as HashMap;
use log::debug;

// Column count and origin offset for the fallback grid arrangement
const GRID_COLUMNS: usize = 3;
const GRID_ORIGIN: f64 = 100.0;

/// Layered layout with the default spacing (200 x 150).
pub fn layout(nodes: &[Node], edges: &[Edge]) -> Result<Layout, InputError> {
    layout_with_config(nodes, edges, &LayoutConfig::default())
}

/// Recompute every node position into a layered arrangement.
///
/// Returns fresh node records with only `position` replaced; edges pass
/// through untouched and the inputs are never mutated. A node's x is its
/// layer, its y the row it occupies within that layer, rows following the
/// caller's insertion order so repeated runs over similar graphs move as
/// little as possible. A cyclic snapshot still gets a best-effort layering
/// instead of an error, since the editor calls this mid-edit.
pub fn layout_with_config(
    nodes: &[Node],
    edges: &[Edge],
    config: &LayoutConfig,
) -> Result<Layout, InputError> {
    // The editor only offers auto-layout from two nodes up; smaller
    // snapshots pass through unchanged.
    if nodes.len() < 2 {
        return Ok(Layout {
            nodes: nodes.to_vec(),
            edges: edges.to_vec(),
        });
    }

    let graph = PipelineGraph::build(nodes, edges)?;
    let layers = assign_layers(&graph);

    let mut rows: HashMap<usize, usize> = HashMap::new();
    let mut placed = Vec::with_capacity(nodes.len());
    for node in nodes {
        let layer = layers.get(&node.id).copied().unwrap_or(0);
        let row = rows.entry(layer).or_insert(0);
        let position = Position {
            x: layer as f64 * config.horizontal_spacing,
            y: *row as f64 * config.vertical_spacing,
        };
        *row += 1;
        placed.push(Node {
            position,
            ..node.clone()
        });
    }

    debug!(
        "laid out {} nodes across {} layers",
        placed.len(),
        rows.len()
    );

    Ok(Layout {
        nodes: placed,
        edges: edges.to_vec(),
    })
}

/// Re-place nodes on the editor's 3-column reset grid, in input order.
pub fn grid_positions(nodes: &[Node]) -> Vec<Node> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| Node {
            position: Position {
                x: (index % GRID_COLUMNS) as f64 * DEFAULT_HORIZONTAL_SPACING + GRID_ORIGIN,
                y: (index / GRID_COLUMNS) as f64 * DEFAULT_VERTICAL_SPACING + GRID_ORIGIN,
            },
            ..node.clone()
        })
        .collect()
}
