//! 最短增广路径（SAP）
//!
//! 单位边权的 Dijkstra：只走残余容量大于 0 的边，按跳数松弛。

use super::path_search::{resolve_endpoints, AugmentingPath, PathSelector, SearchTree};
use crate::error::Result;
use crate::graph::{FlowGraph, VertexId};
use crate::types::Strategy;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use tracing::trace;

/// 最短增广路径选择器
#[derive(Debug, Default, Clone, Copy)]
pub struct Sap;

impl Sap {
    pub fn new() -> Self {
        Self
    }
}

impl PathSelector for Sap {
    fn strategy(&self) -> Strategy {
        Strategy::Sap
    }

    fn find_path(
        &mut self,
        graph: &FlowGraph,
        source: VertexId,
        sink: VertexId,
    ) -> Result<AugmentingPath> {
        let (source_slot, sink_slot) = resolve_endpoints(graph, source, sink)?;

        let mut tree: SearchTree<usize> = SearchTree::new(graph.vertex_count(), source_slot, 0);
        let mut queue = PriorityQueue::new();
        queue.push(source_slot, Reverse(0usize));

        while let Some((current, Reverse(distance))) = queue.pop() {
            if current == sink_slot {
                break;
            }

            for (neighbor, capacity) in graph.slot(current).neighbors() {
                if capacity == 0 {
                    continue;
                }
                let candidate = distance + 1;
                let improves = tree.label(neighbor).map_or(true, |d| candidate < d);
                if improves {
                    tree.settle(neighbor, candidate, current);
                    queue.push(neighbor, Reverse(candidate));
                }
            }
        }

        let path = tree.path_to(graph, sink_slot);
        trace!(source = %source, sink = %sink, hops = path.len().saturating_sub(1), "SAP 搜索结束");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    #[test]
    fn test_simple_chain() {
        let graph = FlowGraph::from_arcs([(1, 2, 5), (2, 3, 3)]);
        let path = Sap::new()
            .find_path(&graph, VertexId::new(1), VertexId::new(3))
            .unwrap();
        assert_eq!(path, ids(&[1, 2, 3]));
    }

    #[test]
    fn test_prefers_fewest_hops() {
        // 1 -> 2 -> 3 -> 4 与 1 -> 5 -> 4
        let graph = FlowGraph::from_arcs([
            (1, 2, 9),
            (2, 3, 9),
            (3, 4, 9),
            (1, 5, 1),
            (5, 4, 1),
        ]);
        let path = Sap::new()
            .find_path(&graph, VertexId::new(1), VertexId::new(4))
            .unwrap();
        assert_eq!(path, ids(&[1, 5, 4]));
    }

    #[test]
    fn test_ignores_saturated_edges() {
        let graph = FlowGraph::from_arcs([(1, 3, 0), (1, 2, 4), (2, 3, 4)]);
        let path = Sap::new()
            .find_path(&graph, VertexId::new(1), VertexId::new(3))
            .unwrap();
        assert_eq!(path, ids(&[1, 2, 3]));
    }

    #[test]
    fn test_unreachable_sink() {
        let graph = FlowGraph::from_arcs([(1, 2, 5), (9, 3, 1)]);
        let path = Sap::new()
            .find_path(&graph, VertexId::new(1), VertexId::new(9))
            .unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_source_equals_sink() {
        let graph = FlowGraph::from_arcs([(1, 2, 5)]);
        let path = Sap::new()
            .find_path(&graph, VertexId::new(1), VertexId::new(1))
            .unwrap();
        assert_eq!(path, ids(&[1]));
    }
}
