//! 随机键增广路径
//!
//! 与类 DFS 策略相同，只是新发现的顶点得到一个均匀随机的键。
//! 随机源由调用方注入，测试中使用固定种子即可复现。

use super::path_search::{resolve_endpoints, AugmentingPath, PathSelector, SearchTree};
use crate::error::Result;
use crate::graph::{FlowGraph, VertexId};
use crate::types::Strategy;
use priority_queue::PriorityQueue;
use rand::Rng;
use std::cmp::Reverse;
use tracing::trace;

/// 随机键选择器
#[derive(Debug)]
pub struct RandomKey<R> {
    rng: R,
}

impl<R: Rng> RandomKey<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// 取回随机源
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> PathSelector for RandomKey<R> {
    fn strategy(&self) -> Strategy {
        Strategy::Random
    }

    fn find_path(
        &mut self,
        graph: &FlowGraph,
        source: VertexId,
        sink: VertexId,
    ) -> Result<AugmentingPath> {
        let (source_slot, sink_slot) = resolve_endpoints(graph, source, sink)?;

        let mut tree: SearchTree<u32> = SearchTree::new(graph.vertex_count(), source_slot, 0);
        let mut queue = PriorityQueue::new();
        queue.push(source_slot, Reverse(0u32));

        while let Some((current, _)) = queue.pop() {
            if current == sink_slot {
                break;
            }

            for (neighbor, capacity) in graph.slot(current).neighbors() {
                if capacity == 0 || tree.is_reached(neighbor) {
                    continue;
                }
                let key: u32 = self.rng.gen();
                tree.settle(neighbor, key, current);
                queue.push(neighbor, Reverse(key));
            }
        }

        let path = tree.path_to(graph, sink_slot);
        trace!(source = %source, sink = %sink, hops = path.len().saturating_sub(1), "随机键搜索结束");
        Ok(path)
    }
}
