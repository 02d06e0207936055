//! 类 DFS 增广路径
//!
//! 与 SAP 使用同一搜索骨架，但顶点第一次被发现时被赋予一个递减计数器的值，
//! 之后不再改变。最小堆因此总是先弹出最近发现的顶点，近似深度优先。

use super::path_search::{resolve_endpoints, AugmentingPath, PathSelector, SearchTree};
use crate::error::Result;
use crate::graph::{FlowGraph, VertexId};
use crate::types::Strategy;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use tracing::trace;

/// 类 DFS 选择器
#[derive(Debug, Default, Clone, Copy)]
pub struct DfsLike;

impl DfsLike {
    pub fn new() -> Self {
        Self
    }
}

impl PathSelector for DfsLike {
    fn strategy(&self) -> Strategy {
        Strategy::DfsLike
    }

    fn find_path(
        &mut self,
        graph: &FlowGraph,
        source: VertexId,
        sink: VertexId,
    ) -> Result<AugmentingPath> {
        let (source_slot, sink_slot) = resolve_endpoints(graph, source, sink)?;

        let mut tree: SearchTree<i64> = SearchTree::new(graph.vertex_count(), source_slot, 0);
        let mut queue = PriorityQueue::new();
        queue.push(source_slot, Reverse(0i64));
        let mut counter = 0i64;

        while let Some((current, _)) = queue.pop() {
            if current == sink_slot {
                break;
            }

            for (neighbor, capacity) in graph.slot(current).neighbors() {
                // 只在第一次发现时赋键
                if capacity == 0 || tree.is_reached(neighbor) {
                    continue;
                }
                let key = counter;
                counter -= 1;
                tree.settle(neighbor, key, current);
                queue.push(neighbor, Reverse(key));
            }
        }

        let path = tree.path_to(graph, sink_slot);
        trace!(source = %source, sink = %sink, hops = path.len().saturating_sub(1), "DFS 搜索结束");
        Ok(path)
    }
}
