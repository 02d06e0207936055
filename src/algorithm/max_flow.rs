//! Ford-Fulkerson 增广
//!
//! 计算增广路径的瓶颈并更新残余图：正向减少、反向增加（不存在则创建）

use super::path_search::is_sentinel;
use crate::error::{Error, Result};
use crate::graph::{FlowGraph, VertexId};
use crate::types::Capacity;
use tracing::trace;

/// Ford-Fulkerson 增广步骤
pub struct FordFulkerson;

impl FordFulkerson {
    /// 路径上最小的正向残余容量
    pub fn bottleneck(graph: &FlowGraph, path: &[VertexId]) -> Result<Capacity> {
        if is_sentinel(path) {
            return Err(Error::InvalidArgument(format!(
                "路径至少需要两个顶点, 实际为 {}",
                path.len()
            )));
        }

        let mut bottleneck = Capacity::MAX;
        for pair in path.windows(2) {
            let (u, v) = (pair[0], pair[1]);
            let capacity = graph.residual(u, v).ok_or(Error::EdgeNotFound(u, v))?;
            bottleneck = bottleneck.min(capacity);
        }
        Ok(bottleneck)
    }

    /// 沿路径推送 amount 单位流量
    ///
    /// 先检查整条路径，任何一条边不足时返回 `NegativeCapacity`，
    /// 反向容量超出 `Capacity::MAX` 时返回 `CapacityOverflow`，两种情况都不修改图。
    pub fn augment(graph: &mut FlowGraph, path: &[VertexId], amount: Capacity) -> Result<()> {
        let mut arcs = Vec::with_capacity(path.len().saturating_sub(1));
        for pair in path.windows(2) {
            let (u, v) = (pair[0], pair[1]);
            let u_slot = graph.slot_of(u).ok_or(Error::VertexNotFound(u))?;
            let v_slot = graph.slot_of(v).ok_or(Error::VertexNotFound(v))?;
            let residual = graph
                .slot(u_slot)
                .residual(v_slot)
                .ok_or(Error::EdgeNotFound(u, v))?;
            if residual < amount {
                return Err(Error::NegativeCapacity {
                    from: u,
                    to: v,
                    residual,
                    amount,
                });
            }
            let reverse = graph.slot(v_slot).residual(u_slot).unwrap_or(0);
            let reverse = reverse.checked_add(amount).ok_or_else(|| {
                Error::CapacityOverflow(format!("{} -> {} 反向容量 {} + {}", v, u, reverse, amount))
            })?;
            arcs.push((u_slot, v_slot, residual - amount, reverse));
        }

        for (u_slot, v_slot, forward, reverse) in arcs {
            graph.slot_mut(u_slot).set_residual(v_slot, forward);
            graph.slot_mut(v_slot).set_residual(u_slot, reverse);
        }

        trace!(amount, hops = path.len().saturating_sub(1), "残余图已更新");
        Ok(())
    }

    /// 计算瓶颈并增广，返回推送的流量
    pub fn augment_path(graph: &mut FlowGraph, path: &[VertexId]) -> Result<Capacity> {
        let bottleneck = Self::bottleneck(graph, path)?;
        Self::augment(graph, path, bottleneck)?;
        Ok(bottleneck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_bottleneck() {
        let graph = FlowGraph::from_arcs([(1, 2, 5), (2, 3, 3)]);
        assert_eq!(FordFulkerson::bottleneck(&graph, &ids(&[1, 2, 3])).unwrap(), 3);
        assert_eq!(FordFulkerson::bottleneck(&graph, &ids(&[1, 2])).unwrap(), 5);
    }

    #[test]
    fn test_bottleneck_rejects_short_path() {
        let graph = FlowGraph::from_arcs([(1, 2, 5)]);
        assert!(matches!(
            FordFulkerson::bottleneck(&graph, &ids(&[1])),
            Err(Error::InvalidArgument(_))
        ));
        assert!(FordFulkerson::bottleneck(&graph, &[]).is_err());
    }

    #[test]
    fn test_bottleneck_missing_edge() {
        let graph = FlowGraph::from_arcs([(1, 2, 5), (3, 1, 1)]);
        assert!(matches!(
            FordFulkerson::bottleneck(&graph, &ids(&[1, 3])),
            Err(Error::EdgeNotFound(a, b)) if a == v(1) && b == v(3)
        ));
    }

    #[test]
    fn test_augment_creates_reverse_edges() {
        let mut graph = FlowGraph::from_arcs([(1, 2, 5), (2, 3, 3)]);
        let pushed = FordFulkerson::augment_path(&mut graph, &ids(&[1, 2, 3])).unwrap();

        assert_eq!(pushed, 3);
        assert_eq!(graph.residual(v(1), v(2)), Some(2));
        assert_eq!(graph.residual(v(2), v(3)), Some(0));
        assert_eq!(graph.residual(v(2), v(1)), Some(3));
        assert_eq!(graph.residual(v(3), v(2)), Some(3));
        assert_eq!(graph.total_edge_count(), 4);
    }

    #[test]
    fn test_augment_conserves_capacity() {
        let mut graph = FlowGraph::from_arcs([(1, 2, 6), (2, 1, 2), (2, 3, 4)]);
        let path = ids(&[1, 2, 3]);
        let before: Vec<_> = path
            .windows(2)
            .map(|p| {
                graph.residual(p[0], p[1]).unwrap() + graph.residual(p[1], p[0]).unwrap_or(0)
            })
            .collect();

        FordFulkerson::augment(&mut graph, &path, 4).unwrap();

        let after: Vec<_> = path
            .windows(2)
            .map(|p| graph.residual(p[0], p[1]).unwrap() + graph.residual(p[1], p[0]).unwrap())
            .collect();
        assert_eq!(before, after);
        // 已存在的反向边在原值上增加
        assert_eq!(graph.residual(v(2), v(1)), Some(6));
        assert_eq!(graph.residual(v(1), v(2)), Some(2));
    }

    #[test]
    fn test_augment_rejects_overdraw_without_mutation() {
        let mut graph = FlowGraph::from_arcs([(1, 2, 5), (2, 3, 3)]);
        let snapshot = graph.clone();

        let result = FordFulkerson::augment(&mut graph, &ids(&[1, 2, 3]), 4);
        assert!(matches!(
            result,
            Err(Error::NegativeCapacity { residual: 3, amount: 4, .. })
        ));
        let before: Vec<_> = snapshot.arcs().collect();
        let after: Vec<_> = graph.arcs().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_augment_rejects_reverse_overflow_without_mutation() {
        let mut graph = FlowGraph::from_arcs([(1, 2, Capacity::MAX), (2, 1, Capacity::MAX)]);
        let snapshot: Vec<_> = graph.arcs().collect();

        let result = FordFulkerson::augment_path(&mut graph, &ids(&[1, 2]));
        assert!(matches!(result, Err(Error::CapacityOverflow(_))));
        assert_eq!(graph.arcs().collect::<Vec<_>>(), snapshot);
    }
}
