//! 增广路径搜索的公共骨架
//!
//! 四种策略都是在残余图上做标号设定式搜索，差别只在优先级函数和
//! 更新规则。这里提供它们共享的部分：端点校验、标号/前驱表和路径重构。

use crate::error::{Error, Result};
use crate::graph::{FlowGraph, VertexId};
use crate::types::Strategy;

/// 增广路径：源点在前，汇点在后
///
/// 长度不超过 1 的路径（空路径或只有源点）表示不存在增广路径。
pub type AugmentingPath = Vec<VertexId>;

/// 路径是否为终止哨兵
pub fn is_sentinel(path: &[VertexId]) -> bool {
    path.len() <= 1
}

/// 增广路径选择器
pub trait PathSelector {
    /// 所属策略
    fn strategy(&self) -> Strategy;

    /// 在当前残余图上寻找一条从 source 到 sink 的增广路径
    ///
    /// 汇点不可达时返回空路径。
    fn find_path(
        &mut self,
        graph: &FlowGraph,
        source: VertexId,
        sink: VertexId,
    ) -> Result<AugmentingPath>;
}

/// 校验端点并返回它们的槽位
pub(crate) fn resolve_endpoints(
    graph: &FlowGraph,
    source: VertexId,
    sink: VertexId,
) -> Result<(usize, usize)> {
    if graph.is_empty() {
        return Err(Error::InvalidArgument("图为空".to_string()));
    }
    let source_slot = graph
        .slot_of(source)
        .ok_or_else(|| Error::InvalidArgument(format!("源点 {} 不在图中", source)))?;
    let sink_slot = graph
        .slot_of(sink)
        .ok_or_else(|| Error::InvalidArgument(format!("汇点 {} 不在图中", sink)))?;
    Ok((source_slot, sink_slot))
}

/// 搜索树：每个槽位的标号和前驱
///
/// 标号为 `None` 表示尚未到达。
pub(crate) struct SearchTree<L> {
    labels: Vec<Option<L>>,
    predecessors: Vec<Option<usize>>,
}

impl<L: Copy> SearchTree<L> {
    pub(crate) fn new(size: usize, source: usize, source_label: L) -> Self {
        let mut labels = vec![None; size];
        labels[source] = Some(source_label);
        Self {
            labels,
            predecessors: vec![None; size],
        }
    }

    pub(crate) fn label(&self, slot: usize) -> Option<L> {
        self.labels[slot]
    }

    pub(crate) fn is_reached(&self, slot: usize) -> bool {
        self.labels[slot].is_some()
    }

    /// 更新标号并记录前驱
    pub(crate) fn settle(&mut self, slot: usize, label: L, predecessor: usize) {
        self.labels[slot] = Some(label);
        self.predecessors[slot] = Some(predecessor);
    }

    /// 沿前驱从汇点回溯到源点，再反转
    pub(crate) fn path_to(&self, graph: &FlowGraph, sink: usize) -> AugmentingPath {
        if !self.is_reached(sink) {
            return Vec::new();
        }

        let mut path = vec![graph.id_at(sink)];
        let mut current = sink;
        while let Some(prev) = self.predecessors[current] {
            path.push(graph.id_at(prev));
            current = prev;
        }
        path.reverse();
        path
    }
}
