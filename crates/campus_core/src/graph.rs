use crate::constants::{NodeName, RawWeight, Weight};
use crate::error::{GraphError, InvalidEdgeReason};
use anyhow::Context;
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default integer typer for node and edge indices
pub type DefaultIdx = u32;

/// Node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(DefaultIdx);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        EdgeIndex(DefaultIdx::MAX)
    }
}

/// A named location on the map, e.g. a campus building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: NodeName,
}

impl Node {
    pub fn new(name: impl Into<NodeName>) -> Self {
        Node { name: name.into() }
    }
}

/// Edge as supplied by the caller: two endpoint names and an unvalidated weight.
///
/// Also the record type of the CSV edge list (`source,target,weight`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EdgeSpec {
    pub source: NodeName,
    pub target: NodeName,
    pub weight: RawWeight,
}

impl EdgeSpec {
    pub fn new(
        source: impl Into<NodeName>,
        target: impl Into<NodeName>,
        weight: RawWeight,
    ) -> Self {
        EdgeSpec {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    fn invalid(&self, reason: InvalidEdgeReason) -> GraphError {
        GraphError::InvalidEdge {
            from: self.source.clone(),
            to: self.target.clone(),
            weight: self.weight,
            reason,
        }
    }
}

/// Undirected edge. Stored once and traversable in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    /// Returns the endpoint opposite to `node`.
    #[inline]
    pub fn other(&self, node: NodeIndex) -> NodeIndex {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }

    #[inline]
    pub fn connects(&self, a: NodeIndex, b: NodeIndex) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Undirected, weighted graph of named locations.
///
/// The graph is immutable once built. Nodes are indexed in the order their
/// names first appear in the input, which makes every traversal (and therefore
/// every search tie-break) deterministic for a given input.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeIndex>>,
    index_by_name: FxHashMap<NodeName, NodeIndex>,
}

impl Graph {
    /// Builds a graph from an edge list. The node set is the union of all
    /// endpoint names.
    ///
    /// Fails with [`GraphError::InvalidEdge`] on a negative weight or an edge
    /// whose endpoints are the same node. Duplicate edges between the same
    /// pair (in either direction) collapse into one edge with the minimum
    /// weight.
    pub fn build<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = EdgeSpec>,
    {
        Self::build_with_nodes(std::iter::empty::<NodeName>(), edges)
    }

    /// Like [`Graph::build`], but registers `nodes` first so that locations
    /// without any edge are part of the graph.
    pub fn build_with_nodes<N, S, I>(nodes: N, edges: I) -> Result<Self, GraphError>
    where
        N: IntoIterator<Item = S>,
        S: Into<NodeName>,
        I: IntoIterator<Item = EdgeSpec>,
    {
        let mut g = Graph::default();

        for name in nodes {
            g.add_node(name.into());
        }

        for spec in edges {
            if spec.weight < 0 {
                return Err(spec.invalid(InvalidEdgeReason::NegativeWeight));
            }
            if spec.source == spec.target {
                return Err(spec.invalid(InvalidEdgeReason::SelfLoop));
            }

            let weight = spec.weight as Weight;
            let source = g.add_node(spec.source);
            let target = g.add_node(spec.target);
            g.add_edge(Edge::new(source, target, weight));
        }

        debug!(
            "Built graph with {} nodes and {} edges",
            g.nodes.len(),
            g.edges.len()
        );

        Ok(g)
    }

    /// Loads an edge list from a CSV file with the header `source,target,weight`.
    pub fn from_csv(path: &Path) -> anyhow::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Could not open edge list {}", path.display()))?;

        let mut edges = Vec::new();
        for result in reader.deserialize() {
            let edge: EdgeSpec = result.context("Failed to parse Edge")?;
            edges.push(edge);
        }

        let g = Graph::build(edges)
            .with_context(|| format!("Invalid edge list {}", path.display()))?;
        Ok(g)
    }

    /// Returns the index of an existing node with that name or appends a new one.
    fn add_node(&mut self, name: NodeName) -> NodeIndex {
        if let Some(idx) = self.index_by_name.get(&name) {
            return *idx;
        }

        let node_idx = NodeIndex::new(self.nodes.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.adjacency.push(Vec::new());
        self.index_by_name.insert(name.clone(), node_idx);
        self.nodes.push(Node::new(name));

        node_idx
    }

    /// Adds `edge`, or lowers the weight of an existing edge between the same
    /// two nodes. Returns the index of the stored edge.
    fn add_edge(&mut self, edge: Edge) -> EdgeIndex {
        for edge_idx in &self.adjacency[edge.source.index()] {
            let old_edge = &mut self.edges[edge_idx.index()];
            if old_edge.connects(edge.source, edge.target) {
                if edge.weight < old_edge.weight {
                    debug!(
                        "Duplicate edge {} <=> {}: weight {} replaced by {}",
                        self.nodes[edge.source.index()].name,
                        self.nodes[edge.target.index()].name,
                        old_edge.weight,
                        edge.weight
                    );
                    old_edge.weight = edge.weight;
                }
                return *edge_idx;
            }
        }

        let edge_idx = EdgeIndex::new(self.edges.len());

        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.adjacency[edge.source.index()].push(edge_idx);
        self.adjacency[edge.target.index()].push(edge_idx);
        self.edges.push(edge);

        edge_idx
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_by_name.contains_key(name)
    }

    /// Resolves a name to its index, failing with [`GraphError::UnknownNode`].
    pub fn node_index(&self, name: &str) -> Result<NodeIndex, GraphError> {
        self.index_by_name
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    /// Name of the node at `node_idx`.
    ///
    /// **Panics** if the index does not belong to this graph
    pub fn name(&self, node_idx: NodeIndex) -> &str {
        &self.nodes[node_idx.index()].name
    }

    /// Returns an iterator over all node names in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.name.as_str())
    }

    /// Node names sorted alphabetically, the way a selection list shows them.
    pub fn sorted_nodes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.nodes().collect();
        names.sort_unstable();
        names
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Edges incident to `node_idx` as `(neighbor, weight)`, in insertion order.
    pub fn neighbors_of(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.adjacency[node_idx.index()].iter().map(move |edge_idx| {
            let edge = &self.edges[edge_idx.index()];
            (edge.other(node_idx), edge.weight)
        })
    }

    /// Locations reachable from `name` over a single edge, with the edge weight.
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&str, Weight)>, GraphError> {
        let node_idx = self.node_index(name)?;
        Ok(self
            .neighbors_of(node_idx)
            .map(|(neighbor, weight)| (self.name(neighbor), weight))
            .collect())
    }

    /// Weight of the edge between `a` and `b`, `None` if they are not adjacent.
    pub fn edge_weight(&self, a: &str, b: &str) -> Result<Option<Weight>, GraphError> {
        let a = self.node_index(a)?;
        let b = self.node_index(b)?;
        Ok(self.weight_between(a, b))
    }

    pub(crate) fn weight_between(&self, a: NodeIndex, b: NodeIndex) -> Option<Weight> {
        self.neighbors_of(a)
            .find(|(neighbor, _)| *neighbor == b)
            .map(|(_, weight)| weight)
    }
}

/// Macro to create an [`EdgeSpec`] between two named nodes with a weight
///
/// edge!("Library South", "Langdale Hall", 137)
#[macro_export]
macro_rules! edge {
    ($source:expr, $target:expr, $weight:expr) => {
        $crate::graph::EdgeSpec::new($source, $target, $weight)
    };
}
