use crate::{
    constants::{Distance, NodeName, Weight},
    graph::Graph,
};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<NodeName>,
    pub weight: Distance,
}

/// One edge of a found path.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Leg<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeName>, weight: Distance) -> Self {
        ShortestPath { nodes, weight }
    }

    pub fn source(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn target(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    /// Consecutive node pairs of the path with the weight of the edge joining
    /// them in `g`. Pairs that are not adjacent in `g` are skipped.
    pub fn legs<'a>(&'a self, g: &Graph) -> Vec<Leg<'a>> {
        self.nodes
            .windows(2)
            .filter_map(|pair| {
                let weight = g.edge_weight(&pair[0], &pair[1]).ok().flatten()?;
                Some(Leg {
                    from: &pair[0],
                    to: &pair[1],
                    weight,
                })
            })
            .collect()
    }
}

/// Outcome of a shortest path query. `NotFound` is a regular outcome, not an error.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PathResult {
    Found(ShortestPath),
    NotFound,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn path(&self) -> Option<&ShortestPath> {
        match self {
            PathResult::Found(sp) => Some(sp),
            PathResult::NotFound => None,
        }
    }

    pub fn weight(&self) -> Option<Distance> {
        self.path().map(|sp| sp.weight)
    }

    pub fn into_path(self) -> Option<ShortestPath> {
        match self {
            PathResult::Found(sp) => Some(sp),
            PathResult::NotFound => None,
        }
    }
}

impl From<Option<ShortestPath>> for PathResult {
    fn from(sp: Option<ShortestPath>) -> Self {
        match sp {
            Some(sp) => PathResult::Found(sp),
            None => PathResult::NotFound,
        }
    }
}
