//! 命令行输出
//!
//! 把模拟结果渲染为表格、垂直列表或 JSON

mod printer;

pub use printer::{PrintMode, Printer};
