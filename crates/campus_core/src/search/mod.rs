use rustc_hash::FxHashMap;

use crate::{
    constants::Distance,
    error::GraphError,
    graph::{Graph, NodeIndex},
};

use self::{
    dijkstra::Dijkstra,
    shortest_path::{PathResult, ShortestPath},
};

pub mod dijkstra;
pub mod shortest_path;

/// Minimum weight path between the locations `start` and `end`.
///
/// Fails with [`GraphError::UnknownNode`] if either name is not part of `g`
/// (`start` is checked first). A query from a location to itself yields the
/// trivial path `[start]` with weight 0.
pub fn shortest_path(g: &Graph, start: &str, end: &str) -> Result<PathResult, GraphError> {
    Dijkstra::new(g).search(start, end)
}

/// Follows the predecessor links in `node_data` from `target` back to `source`.
pub fn reconstruct_path(
    g: &Graph,
    target: NodeIndex,
    source: NodeIndex,
    node_data: &FxHashMap<NodeIndex, (Distance, Option<NodeIndex>)>,
) -> Option<ShortestPath> {
    let weight = node_data.get(&target)?.0;

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        current = node_data.get(&current)?.1?;
        path.push(current);
    }
    path.reverse();

    let nodes = path
        .into_iter()
        .map(|node_idx| g.name(node_idx).to_string())
        .collect();
    Some(ShortestPath::new(nodes, weight))
}

#[cfg(test)]
pub(crate) fn assert_no_path(result: Result<PathResult, GraphError>) {
    assert_eq!(Ok(PathResult::NotFound), result);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<&str>,
    expected_weight: Distance,
    result: Result<PathResult, GraphError>,
) {
    let nodes = expected_path.into_iter().map(String::from).collect();
    assert_eq!(
        Ok(PathResult::Found(ShortestPath::new(nodes, expected_weight))),
        result
    );
}
