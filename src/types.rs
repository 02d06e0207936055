//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// 残余容量（非负整数）
pub type Capacity = u64;

/// 路径宽度（瓶颈容量）
///
/// 源点的宽度不受任何边限制，用 `Unbounded` 表示，
/// 比任意有限容量都大。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    Finite(Capacity),
    Unbounded,
}

impl Width {
    /// 与一条边的容量取较小者
    pub fn through(self, capacity: Capacity) -> Width {
        match self {
            Width::Unbounded => Width::Finite(capacity),
            Width::Finite(w) => Width::Finite(w.min(capacity)),
        }
    }

    pub fn finite(self) -> Option<Capacity> {
        match self {
            Width::Finite(w) => Some(w),
            Width::Unbounded => None,
        }
    }
}

impl Ord for Width {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Width::Finite(a), Width::Finite(b)) => a.cmp(b),
            (Width::Finite(_), Width::Unbounded) => Ordering::Less,
            (Width::Unbounded, Width::Finite(_)) => Ordering::Greater,
            (Width::Unbounded, Width::Unbounded) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Width {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 增广路径选择策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// 最短增广路径（按跳数）
    #[serde(rename = "SAP", alias = "Sap")]
    Sap,
    /// 类深度优先的发现顺序
    #[serde(rename = "DFS", alias = "DfsLike")]
    DfsLike,
    /// 最大容量（最宽路径）
    #[serde(rename = "Max-Cap", alias = "MaxCapacity")]
    MaxCapacity,
    /// 随机键顺序
    Random,
}

impl Strategy {
    /// 全部策略，按报告顺序排列
    pub const ALL: [Strategy; 4] = [
        Strategy::Sap,
        Strategy::DfsLike,
        Strategy::MaxCapacity,
        Strategy::Random,
    ];

    /// 报告中使用的名称，与序列化名称一致
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sap => "SAP",
            Strategy::DfsLike => "DFS",
            Strategy::MaxCapacity => "Max-Cap",
            Strategy::Random => "Random",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sap" => Ok(Strategy::Sap),
            "dfs" | "dfs-like" | "dfslike" => Ok(Strategy::DfsLike),
            "max-cap" | "maxcap" | "max-capacity" => Ok(Strategy::MaxCapacity),
            "random" => Ok(Strategy::Random),
            other => Err(crate::Error::ParseError(format!("未知策略: {}", other))),
        }
    }
}
