//! 错误类型定义

use crate::graph::VertexId;
use crate::types::Capacity;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("边不存在: {0} -> {1}")]
    EdgeNotFound(VertexId, VertexId),

    #[error("残余容量不足: {from} -> {to} 剩余 {residual}, 需推送 {amount}")]
    NegativeCapacity {
        from: VertexId,
        to: VertexId,
        residual: Capacity,
        amount: Capacity,
    },

    #[error("容量溢出: {0}")]
    CapacityOverflow(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("生成错误: {0}")]
    GenerateError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV 错误: {0}")]
    CsvError(#[from] csv::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}
