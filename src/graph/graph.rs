//! 残余容量图
//!
//! 顶点按 ID 存放在 arena 中，邻接关系记录为 槽位 -> 残余容量。
//! `Clone` 即深拷贝：每个策略在独立副本上运行，互不影响。

use super::vertex::{FlowVertex, VertexId};
use crate::error::{Error, Result};
use crate::types::Capacity;
use indexmap::IndexMap;

/// 残余容量图
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    /// 顶点 arena（插入顺序即槽位）
    vertices: IndexMap<VertexId, FlowVertex>,
}

impl FlowGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 从边列表构建
    pub fn from_arcs<I>(arcs: I) -> Self
    where
        I: IntoIterator<Item = (u64, u64, Capacity)>,
    {
        let mut graph = Self::new();
        for (from, to, capacity) in arcs {
            graph.add_arc(VertexId::new(from), VertexId::new(to), capacity);
        }
        graph
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点（已存在则直接返回其槽位）
    pub fn add_vertex(&mut self, id: VertexId) -> usize {
        if let Some(slot) = self.vertices.get_index_of(&id) {
            return slot;
        }
        let (slot, _) = self.vertices.insert_full(id, FlowVertex::new(id));
        slot
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Result<&FlowVertex> {
        self.vertices.get(&id).ok_or(Error::VertexNotFound(id))
    }

    /// 是否包含顶点
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 所有顶点 ID（按插入顺序）
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// 所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &FlowVertex> + '_ {
        self.vertices.values()
    }

    // ==================== 边操作 ====================

    /// 添加弧，按需创建两端顶点；重复添加同一有序对时覆盖容量
    pub fn add_arc(&mut self, from: VertexId, to: VertexId, capacity: Capacity) {
        let from_slot = self.add_vertex(from);
        let to_slot = self.add_vertex(to);
        self.vertices[from_slot].set_residual(to_slot, capacity);
    }

    /// 查询残余容量
    pub fn residual(&self, from: VertexId, to: VertexId) -> Option<Capacity> {
        let from_slot = self.slot_of(from)?;
        let to_slot = self.slot_of(to)?;
        self.vertices[from_slot].residual(to_slot)
    }

    /// 邻接表条目总数（包括容量为 0 的残余边）
    pub fn total_edge_count(&self) -> usize {
        self.vertices.values().map(FlowVertex::out_degree).sum()
    }

    /// 遍历所有弧 (from, to, 残余容量)
    pub fn arcs(&self) -> impl Iterator<Item = (VertexId, VertexId, Capacity)> + '_ {
        self.vertices.values().flat_map(move |v| {
            v.neighbors()
                .map(move |(slot, cap)| (v.id(), self.id_at(slot), cap))
        })
    }

    /// 某顶点的出弧 (to, 残余容量)
    pub fn out_arcs(&self, id: VertexId) -> Result<Vec<(VertexId, Capacity)>> {
        let vertex = self.vertex(id)?;
        Ok(vertex
            .neighbors()
            .map(|(slot, cap)| (self.id_at(slot), cap))
            .collect())
    }

    // ==================== 槽位访问（算法内部使用） ====================

    pub(crate) fn slot_of(&self, id: VertexId) -> Option<usize> {
        self.vertices.get_index_of(&id)
    }

    pub(crate) fn id_at(&self, slot: usize) -> VertexId {
        self.vertices[slot].id()
    }

    pub(crate) fn slot(&self, slot: usize) -> &FlowVertex {
        &self.vertices[slot]
    }

    pub(crate) fn slot_mut(&mut self, slot: usize) -> &mut FlowVertex {
        &mut self.vertices[slot]
    }
}
