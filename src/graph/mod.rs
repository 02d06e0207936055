//! 图核心模块
//!
//! 定义顶点和残余容量图

mod graph;
mod vertex;

pub use graph::FlowGraph;
pub use vertex::{FlowVertex, VertexId};
