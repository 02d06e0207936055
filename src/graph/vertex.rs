//! 顶点定义

use crate::types::Capacity;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（由外部数据提供，图内唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点
///
/// 邻接表以图内槽位为键，值为残余容量。
/// 槽位只在所属图中有意义，因此不同图副本的顶点不会相互引用。
#[derive(Debug, Clone)]
pub struct FlowVertex {
    /// 顶点 ID
    id: VertexId,
    /// 邻接槽位 -> 残余容量
    neighbors: IndexMap<usize, Capacity>,
}

impl FlowVertex {
    /// 创建新顶点
    pub(crate) fn new(id: VertexId) -> Self {
        Self {
            id,
            neighbors: IndexMap::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 出边数量（包括容量为 0 的残余边）
    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }

    /// 按插入顺序遍历邻接槽位和残余容量
    pub(crate) fn neighbors(&self) -> impl Iterator<Item = (usize, Capacity)> + '_ {
        self.neighbors.iter().map(|(&slot, &cap)| (slot, cap))
    }

    pub(crate) fn residual(&self, slot: usize) -> Option<Capacity> {
        self.neighbors.get(&slot).copied()
    }

    /// 设置残余容量（覆盖已有值）
    pub(crate) fn set_residual(&mut self, slot: usize, capacity: Capacity) {
        self.neighbors.insert(slot, capacity);
    }
}
