//! 最大容量增广路径（最宽路径）
//!
//! 以"到目前为止的瓶颈容量"为优先级的最大堆。汇点必须被弹出（定标）
//! 后才停止，仅仅被发现时其宽度还可能继续变大。

use super::path_search::{resolve_endpoints, AugmentingPath, PathSelector, SearchTree};
use crate::error::Result;
use crate::graph::{FlowGraph, VertexId};
use crate::types::{Strategy, Width};
use priority_queue::PriorityQueue;
use tracing::trace;

/// 最宽路径选择器
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxCapacity;

impl MaxCapacity {
    pub fn new() -> Self {
        Self
    }
}

impl PathSelector for MaxCapacity {
    fn strategy(&self) -> Strategy {
        Strategy::MaxCapacity
    }

    fn find_path(
        &mut self,
        graph: &FlowGraph,
        source: VertexId,
        sink: VertexId,
    ) -> Result<AugmentingPath> {
        let (source_slot, sink_slot) = resolve_endpoints(graph, source, sink)?;

        let mut tree: SearchTree<Width> =
            SearchTree::new(graph.vertex_count(), source_slot, Width::Unbounded);
        let mut queue = PriorityQueue::new();
        queue.push(source_slot, Width::Unbounded);

        while let Some((current, width)) = queue.pop() {
            if current == sink_slot {
                break;
            }

            for (neighbor, capacity) in graph.slot(current).neighbors() {
                if capacity == 0 {
                    continue;
                }
                let candidate = width.through(capacity);
                let wider = tree.label(neighbor).map_or(true, |w| candidate > w);
                if wider {
                    tree.settle(neighbor, candidate, current);
                    queue.push(neighbor, candidate);
                }
            }
        }

        let path = tree.path_to(graph, sink_slot);
        trace!(
            source = %source,
            sink = %sink,
            width = ?tree.label(sink_slot).and_then(Width::finite),
            "最宽路径搜索结束"
        );
        Ok(path)
    }
}
