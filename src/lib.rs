//! FlowSim - 增广路径策略对比模拟
//!
//! 在随机几何流网络上运行 Ford-Fulkerson，比较四种增广路径选择策略：
//! - 最短增广路径（SAP）
//! - 类深度优先（DFS-like）
//! - 最大容量（最宽路径）
//! - 随机键
//!
//! 每种策略在图的独立副本上运行到没有增广路径为止，并记录统计结果。

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod generate;
pub mod graph;
pub mod import;
pub mod simulation;
pub mod types;

// 重导出常用类型
pub use algorithm::{AugmentingPath, DfsLike, FordFulkerson, MaxCapacity, PathSelector, RandomKey, Sap};
pub use error::{Error, Result};
pub use generate::{generate_graph, GeneratorConfig};
pub use graph::{FlowGraph, FlowVertex, VertexId};
pub use simulation::{SimulationConfig, SimulationOutcome, SimulationRunner, SimulationState};
pub use types::{Capacity, Strategy, Width};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
