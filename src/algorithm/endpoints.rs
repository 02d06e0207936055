//! 源点和汇点选择
//!
//! 随机选取一个有出边的顶点作为源点，再用 BFS 找到离它最远（跳数最多）
//! 的顶点作为汇点。

use crate::error::{Error, Result};
use crate::graph::{FlowGraph, VertexId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// 在至少有一条出边的顶点中随机选一个
pub fn random_source<R: Rng + ?Sized>(graph: &FlowGraph, rng: &mut R) -> Option<VertexId> {
    let candidates: Vec<VertexId> = graph
        .vertices()
        .filter(|v| v.out_degree() > 0)
        .map(|v| v.id())
        .collect();
    candidates.choose(rng).copied()
}

/// BFS 找最远顶点，返回 (顶点, 跳数)
///
/// 忽略容量，只看邻接关系。距离相同时取最先发现的顶点；
/// 源点没有出边时返回源点自身，距离为 0。
pub fn farthest_vertex(graph: &FlowGraph, source: VertexId) -> Result<(VertexId, usize)> {
    let source_slot = graph
        .slot_of(source)
        .ok_or(Error::VertexNotFound(source))?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    visited[source_slot] = true;
    queue.push_back((source_slot, 0usize));

    let mut farthest = (source_slot, 0);

    while let Some((current, distance)) = queue.pop_front() {
        for (neighbor, _) in graph.slot(current).neighbors() {
            if !visited[neighbor] {
                let d = distance + 1;
                visited[neighbor] = true;
                queue.push_back((neighbor, d));
                if d > farthest.1 {
                    farthest = (neighbor, d);
                }
            }
        }
    }

    Ok((graph.id_at(farthest.0), farthest.1))
}
