//! 图算法模块
//!
//! 包含四种增广路径选择策略、Ford-Fulkerson 增广以及端点选择

mod dfs_like;
pub mod endpoints;
mod max_capacity;
mod max_flow;
mod path_search;
mod random_key;
mod sap;

pub use dfs_like::DfsLike;
pub use max_capacity::MaxCapacity;
pub use max_flow::FordFulkerson;
pub use path_search::{is_sentinel, AugmentingPath, PathSelector};
pub use random_key::RandomKey;
pub use sap::Sap;
