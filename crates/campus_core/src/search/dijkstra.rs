use std::cmp::Reverse;

use crate::constants::Distance;
use crate::error::GraphError;
use crate::graph::*;
use crate::search::shortest_path::{PathResult, ShortestPath};
use crate::statistics::SearchStats;
use log::{debug, info, trace};
use priority_queue::PriorityQueue;
use rustc_hash::FxHashMap;

/// Dijkstra search on a [`Graph`].
///
/// Candidates are ordered by `(distance, NodeIndex)`, so nodes with the same
/// tentative distance are settled in index order and repeated searches on the
/// same graph always return the same path. Each search owns its working state;
/// several `Dijkstra` instances may share one graph across threads.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Shortest path between two locations given by name.
    pub fn search(&mut self, start: &str, end: &str) -> Result<PathResult, GraphError> {
        let source = self.g.node_index(start)?;
        let target = self.g.node_index(end)?;

        Ok(self.search_by_index(source, target))
    }

    /// **Panics** if `source` or `target` is not a node of the graph
    pub fn search_by_index(&mut self, source: NodeIndex, target: NodeIndex) -> PathResult {
        self.stats.init();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            let nodes = vec![self.g.name(source).to_string()];
            return PathResult::Found(ShortestPath::new(nodes, 0));
        }

        let mut node_data: FxHashMap<NodeIndex, (Distance, Option<NodeIndex>)> =
            FxHashMap::default();
        node_data.insert(source, (0, None));

        let mut queue: PriorityQueue<NodeIndex, Reverse<(Distance, NodeIndex)>> =
            PriorityQueue::new();
        queue.push(source, Reverse((0, source)));

        while let Some((node_idx, Reverse((weight, _)))) = queue.pop() {
            self.stats.nodes_settled += 1;

            if node_idx == target {
                break;
            }

            for (neighbor, edge_weight) in self.g.neighbors_of(node_idx) {
                let new_distance = weight + Distance::from(edge_weight);
                let old_distance = node_data.get(&neighbor).map(|(distance, _)| *distance);

                if old_distance.map_or(true, |old_distance| new_distance < old_distance) {
                    trace!(
                        "Relax {} -> {}: {} < {:?}",
                        self.g.name(node_idx),
                        self.g.name(neighbor),
                        new_distance,
                        old_distance
                    );
                    node_data.insert(neighbor, (new_distance, Some(node_idx)));
                    queue.push_increase(neighbor, Reverse((new_distance, neighbor)));
                }
            }
        }
        self.stats.finish();

        let sp = super::reconstruct_path(self.g, target, source, &node_data);
        if sp.is_some() {
            debug!("Path found: {:?}", sp);
            info!(
                "Path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        } else {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        }

        sp.into()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        edge,
        search::{assert_no_path, assert_path, shortest_path},
        util::campus_map::{campus_graph, generate_complex_graph, generate_disconnected_graph},
    };

    use super::*;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn campus_route_via_langdale() {
        init_log();
        let g = campus_graph();
        let mut d = Dijkstra::new(&g);

        assert_path(
            vec!["Library South", "Langdale Hall", "Aderhold"],
            781,
            d.search("Library South", "Aderhold"),
        );
        assert_path(
            vec!["Aderhold", "Langdale Hall", "Library South"],
            781,
            d.search("Aderhold", "Library South"),
        );
        assert_path(
            vec!["Library South", "Langdale Hall", "25 Park Place", "55 Park Place"],
            1264,
            d.search("Library South", "55 Park Place"),
        );
        assert_path(
            vec!["Library South", "University Lofts", "University Commons"],
            1288,
            d.search("Library South", "University Commons"),
        );
    }

    #[test]
    fn same_start_and_end() {
        let g = campus_graph();

        for name in g.nodes() {
            assert_path(vec![name], 0, shortest_path(&g, name, name));
        }
    }

    #[test]
    fn unknown_node() {
        let g = campus_graph();

        assert_eq!(
            shortest_path(&g, "Nonexistent Hall", "Aderhold"),
            Err(GraphError::UnknownNode("Nonexistent Hall".to_string()))
        );
        assert_eq!(
            shortest_path(&g, "Aderhold", "Nonexistent Hall"),
            Err(GraphError::UnknownNode("Nonexistent Hall".to_string()))
        );
        // start is checked first
        assert_eq!(
            shortest_path(&g, "Nowhere", "Nonexistent Hall"),
            Err(GraphError::UnknownNode("Nowhere".to_string()))
        );
    }

    #[test]
    fn disconnected_graph() {
        // A - B - C    D - E    Island
        let g = generate_disconnected_graph();
        let mut d = Dijkstra::new(&g);

        assert_no_path(d.search("A", "D"));
        assert_no_path(d.search("E", "C"));
        assert_no_path(d.search("A", "Island"));
        assert_no_path(d.search("Island", "A"));
        assert_path(vec!["A", "B", "C"], 3, d.search("A", "C"));
        assert_path(vec!["E", "D"], 3, d.search("E", "D"));
        assert_path(vec!["Island"], 0, d.search("Island", "Island"));
    }

    #[test]
    fn go_around() {
        // A - B
        // |   |
        // C - D
        let g = Graph::build(vec![
            edge!("A", "B", 10),
            edge!("A", "C", 1),
            edge!("C", "D", 1),
            edge!("D", "B", 1),
        ])
        .unwrap();
        let mut d = Dijkstra::new(&g);

        assert_path(vec!["A", "C", "D", "B"], 3, d.search("A", "B"));
        assert_path(vec!["B", "D", "C", "A"], 3, d.search("B", "A"));
    }

    #[test]
    fn complex_graph() {
        let g = generate_complex_graph();
        let mut d = Dijkstra::new(&g);

        assert_path(vec!["A", "K", "J", "H", "F"], 10, d.search("A", "F"));
        assert_path(vec!["G", "H", "J", "K"], 8, d.search("G", "K"));
        assert_path(vec!["E", "J", "C"], 5, d.search("E", "C"));
    }

    #[test]
    fn zero_weight_edges() {
        let g = Graph::build(vec![
            edge!("A", "B", 0),
            edge!("B", "C", 0),
            edge!("A", "C", 1),
        ])
        .unwrap();

        assert_path(vec!["A", "B", "C"], 0, shortest_path(&g, "A", "C"));
    }

    #[test]
    fn ties_follow_insertion_order() {
        // Both A - B - D and A - C - D weigh 2
        let g = Graph::build(vec![
            edge!("A", "B", 1),
            edge!("A", "C", 1),
            edge!("B", "D", 1),
            edge!("C", "D", 1),
        ])
        .unwrap();
        assert_path(vec!["A", "B", "D"], 2, shortest_path(&g, "A", "D"));

        let g = Graph::build(vec![
            edge!("A", "C", 1),
            edge!("A", "B", 1),
            edge!("C", "D", 1),
            edge!("B", "D", 1),
        ])
        .unwrap();
        assert_path(vec!["A", "C", "D"], 2, shortest_path(&g, "A", "D"));

        for _ in 0..10 {
            assert_path(vec!["A", "C", "D"], 2, shortest_path(&g, "A", "D"));
        }
    }

    #[test]
    fn duplicate_edges_use_minimum() {
        let g = Graph::build(vec![
            edge!("A", "B", 7),
            edge!("B", "C", 1),
            edge!("B", "A", 2),
        ])
        .unwrap();

        assert_path(vec!["A", "B", "C"], 3, shortest_path(&g, "A", "C"));
    }

    #[test]
    fn sums_beyond_edge_weight_range() {
        let max = i64::MAX;
        let g = Graph::build(vec![
            edge!("A", "B", max),
            edge!("B", "C", max),
            edge!("C", "D", max),
        ])
        .unwrap();
        let max = Distance::from(max as u64);

        assert_path(vec!["A", "B", "C"], 2 * max, shortest_path(&g, "A", "C"));
        assert_path(vec!["A", "B", "C", "D"], 3 * max, shortest_path(&g, "A", "D"));
        assert_path(vec!["D", "C", "B", "A"], 3 * max, shortest_path(&g, "D", "A"));
    }

    #[test]
    fn long_paths_keep_their_minimum() {
        // A - B - C - D weighs 3 * max, A - E - F - D one less
        let max = i64::MAX;
        let g = Graph::build(vec![
            edge!("A", "B", max),
            edge!("B", "C", max),
            edge!("C", "D", max),
            edge!("A", "E", max),
            edge!("E", "F", max),
            edge!("F", "D", max - 1),
        ])
        .unwrap();
        let max = Distance::from(max as u64);

        assert_path(vec!["A", "E", "F", "D"], 3 * max - 1, shortest_path(&g, "A", "D"));
    }

    #[test]
    fn legs_of_path() {
        let g = campus_graph();
        let sp = shortest_path(&g, "Library South", "Aderhold")
            .unwrap()
            .into_path()
            .unwrap();

        let legs = sp.legs(&g);
        assert_eq!(legs.len(), 2);
        assert_eq!(
            (legs[0].from, legs[0].to, legs[0].weight),
            ("Library South", "Langdale Hall", 137)
        );
        assert_eq!(
            (legs[1].from, legs[1].to, legs[1].weight),
            ("Langdale Hall", "Aderhold", 644)
        );
        let total: Distance = legs.iter().map(|leg| Distance::from(leg.weight)).sum();
        assert_eq!(total, sp.weight);
    }

    #[test]
    fn parallel_queries() {
        let g = campus_graph();
        let names: Vec<&str> = g.nodes().collect();

        std::thread::scope(|s| {
            for start in &names {
                let g = &g;
                let names = &names;
                s.spawn(move || {
                    for end in names {
                        let forward = shortest_path(g, start, end).unwrap();
                        let backward = shortest_path(g, end, start).unwrap();
                        assert_eq!(forward.weight(), backward.weight());
                    }
                });
            }
        });
    }

    /// Distances of all pairs via Floyd-Warshall, `None` for unreachable pairs.
    fn all_pairs(g: &Graph) -> Vec<Vec<Option<Distance>>> {
        let n = g.num_nodes();
        let mut dist = vec![vec![None; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = Some(0);
        }
        for edge in g.edges() {
            let (s, t) = (edge.source.index(), edge.target.index());
            dist[s][t] = Some(Distance::from(edge.weight));
            dist[t][s] = Some(Distance::from(edge.weight));
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                        if dist[i][j].map_or(true, |ij| ik + kj < ij) {
                            dist[i][j] = Some(ik + kj);
                        }
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn campus_properties() {
        let g = campus_graph();
        let num_nodes = g.num_nodes();

        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&(0..num_nodes, 0..num_nodes), |(a, b)| {
                let a = g.name(node_index(a));
                let b = g.name(node_index(b));

                let forward = shortest_path(&g, a, b).unwrap().into_path().unwrap();
                let backward = shortest_path(&g, b, a).unwrap().into_path().unwrap();
                assert_eq!(forward.weight, backward.weight);
                assert_eq!(forward.source(), Some(a));
                assert_eq!(forward.target(), Some(b));

                for m in &forward.nodes {
                    let to_m = shortest_path(&g, a, m).unwrap().weight().unwrap();
                    let from_m = shortest_path(&g, m, b).unwrap().weight().unwrap();
                    assert_eq!(forward.weight, to_m + from_m);
                }
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn matches_floyd_warshall_on_random_graphs() {
        use proptest::collection::vec;

        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&vec((0..8usize, 0..8usize, 0..50i64), 0..20), |raw_edges| {
                let edges = raw_edges
                    .into_iter()
                    .filter(|(a, b, _)| a != b)
                    .map(|(a, b, w)| edge!(format!("n{a}"), format!("n{b}"), w));
                let g = Graph::build(edges).unwrap();
                let dist = all_pairs(&g);

                for s in 0..g.num_nodes() {
                    for t in 0..g.num_nodes() {
                        let mut d = Dijkstra::new(&g);
                        let result = d.search_by_index(node_index(s), node_index(t));
                        assert_eq!(result.weight(), dist[s][t]);

                        if let Some(sp) = result.path() {
                            let legs = sp.legs(&g);
                            assert_eq!(legs.len() + 1, sp.nodes.len());
                            let total: Distance =
                                legs.iter().map(|leg| Distance::from(leg.weight)).sum();
                            assert_eq!(total, sp.weight);
                        }
                    }
                }
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn negative_weights_are_rejected() {
        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&(-1000i64..0, 0..5usize), |(weight, position)| {
                let mut edges: Vec<EdgeSpec> =
                    (0..5).map(|i| edge!(format!("n{i}"), format!("n{}", i + 1), 1)).collect();
                edges[position].weight = weight;

                assert!(matches!(
                    Graph::build(edges),
                    Err(GraphError::InvalidEdge { .. })
                ));
                Ok(())
            })
            .unwrap();
    }
}
