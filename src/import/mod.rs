//! 邻接表导入导出
//!
//! 文件格式：每行一个顶点，无表头
//!
//! ```text
//! u,v1:c1,v2:c2,...
//! ```
//!
//! 只有 `u` 的行声明一个没有出边的顶点。容量必须为正数，
//! 写出残余图时容量为 0 的弧被省略。

use crate::error::{Error, Result};
use crate::graph::{FlowGraph, VertexId};
use crate::types::Capacity;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub arcs_imported: usize,
    pub skipped_lines: usize,
    pub skipped_entries: usize,
    pub duration_ms: u64,
}

/// 一行邻接记录
pub type AdjacencyRow = (VertexId, Vec<(VertexId, Capacity)>);

/// 解析一行邻接记录
pub fn parse_adjacency_line(line: &str) -> Result<AdjacencyRow> {
    parse_fields(line.split(','))
}

fn parse_fields<'a, I>(mut fields: I) -> Result<AdjacencyRow>
where
    I: Iterator<Item = &'a str>,
{
    let from = parse_head(&mut fields)?;
    let arcs = fields
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(parse_entry)
        .collect::<Result<Vec<_>>>()?;
    Ok((from, arcs))
}

fn parse_head<'a, I>(fields: &mut I) -> Result<VertexId>
where
    I: Iterator<Item = &'a str>,
{
    let head = fields
        .next()
        .ok_or_else(|| Error::ParseError("空行".to_string()))?;
    parse_id(head)
}

/// 解析一个 `v:c` 邻接项
fn parse_entry(field: &str) -> Result<(VertexId, Capacity)> {
    let (to, capacity) = field
        .split_once(':')
        .ok_or_else(|| Error::ParseError(format!("邻接项缺少 ':': {}", field)))?;
    let to = parse_id(to)?;
    let capacity: Capacity = capacity
        .trim()
        .parse()
        .map_err(|e| Error::ParseError(format!("容量 {:?} 无效: {}", capacity, e)))?;
    if capacity == 0 {
        return Err(Error::ParseError(format!("容量必须为正数: {}", field)));
    }
    Ok((to, capacity))
}

fn parse_id(raw: &str) -> Result<VertexId> {
    raw.trim()
        .parse::<u64>()
        .map(VertexId::new)
        .map_err(|e| Error::ParseError(format!("顶点 ID {:?} 无效: {}", raw, e)))
}

/// 从任意读取器加载邻接表
pub fn load_adjacency<R: Read>(reader: R) -> Result<(FlowGraph, ImportStats)> {
    let start = std::time::Instant::now();
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut graph = FlowGraph::new();
    let mut stats = ImportStats::default();
    let mut record = StringRecord::new();
    let mut line = 0usize;

    while csv_reader.read_record(&mut record)? {
        line += 1;
        let mut fields = record.iter();
        let from = match parse_head(&mut fields) {
            Ok(from) => from,
            Err(e) => {
                warn!(line, error = %e, "跳过无效行");
                stats.skipped_lines += 1;
                continue;
            }
        };

        graph.add_vertex(from);
        for field in fields.map(str::trim).filter(|field| !field.is_empty()) {
            // 坏的邻接项只丢弃自身，同一行的其他弧照常导入
            match parse_entry(field) {
                Ok((to, capacity)) => {
                    graph.add_arc(from, to, capacity);
                    stats.arcs_imported += 1;
                }
                Err(e) => {
                    warn!(line, error = %e, "跳过无效邻接项");
                    stats.skipped_entries += 1;
                }
            }
        }
    }

    stats.vertices_imported = graph.vertex_count();
    stats.duration_ms = start.elapsed().as_millis() as u64;
    Ok((graph, stats))
}

/// 从 CSV 文件加载邻接表
pub fn load_adjacency_csv<P: AsRef<Path>>(path: P) -> Result<(FlowGraph, ImportStats)> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| Error::ImportError(format!("无法打开 {}: {}", path.display(), e)))?;
    let (graph, stats) = load_adjacency(file)?;

    info!(
        path = %path.display(),
        vertices = stats.vertices_imported,
        arcs = stats.arcs_imported,
        skipped_lines = stats.skipped_lines,
        skipped_entries = stats.skipped_entries,
        "邻接表已加载"
    );
    Ok((graph, stats))
}

/// 把邻接表写入任意输出
pub fn write_adjacency<W: Write>(graph: &FlowGraph, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    for vertex in graph.vertices() {
        let mut row = vec![vertex.id().to_string()];
        for (to, capacity) in graph.out_arcs(vertex.id())? {
            if capacity == 0 {
                continue;
            }
            row.push(format!("{}:{}", to, capacity));
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// 把邻接表写入 CSV 文件
pub fn write_adjacency_csv<P: AsRef<Path>>(graph: &FlowGraph, path: P) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_adjacency(graph, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::FordFulkerson;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_parse_line() {
        let (from, arcs) = parse_adjacency_line("3,7:12,9:4").unwrap();
        assert_eq!(from, v(3));
        assert_eq!(arcs, vec![(v(7), 12), (v(9), 4)]);

        let (from, arcs) = parse_adjacency_line("5").unwrap();
        assert_eq!(from, v(5));
        assert!(arcs.is_empty());
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(parse_adjacency_line("x,1:2").is_err());
        assert!(parse_adjacency_line("1,2-3").is_err());
        assert!(parse_adjacency_line("1,2:abc").is_err());
        assert!(parse_adjacency_line("1,2:0").is_err());
    }

    #[test]
    fn test_load_csv() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1,2:5,3:2").unwrap();
        writeln!(file, "2,3:3").unwrap();
        writeln!(file, "bad,row").unwrap();
        writeln!(file, "4").unwrap();

        let (graph, stats) = load_adjacency_csv(file.path()).unwrap();
        assert_eq!(stats.vertices_imported, 4);
        assert_eq!(stats.arcs_imported, 3);
        assert_eq!(stats.skipped_lines, 1);
        assert_eq!(graph.residual(v(1), v(3)), Some(2));
        assert!(graph.contains(v(4)));
    }

    #[test]
    fn test_duplicate_arcs_overwrite() {
        let data = "1,2:5\n1,2:8\n";
        let (graph, stats) = load_adjacency(data.as_bytes()).unwrap();
        assert_eq!(stats.arcs_imported, 2);
        assert_eq!(graph.total_edge_count(), 1);
        assert_eq!(graph.residual(v(1), v(2)), Some(8));
    }

    #[test]
    fn test_write_then_load() {
        let graph = FlowGraph::from_arcs([(1, 2, 5), (2, 3, 3), (1, 3, 9)]);
        let file = NamedTempFile::new().unwrap();
        write_adjacency_csv(&graph, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "1,2:5,3:9\n2,3:3\n3\n");

        let (loaded, _) = load_adjacency_csv(file.path()).unwrap();
        assert_eq!(
            loaded.arcs().collect::<Vec<_>>(),
            graph.arcs().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_bad_entry_keeps_rest_of_row() {
        let data = "1,2:5,3:0,4:x,5:1\n";
        let (graph, stats) = load_adjacency(data.as_bytes()).unwrap();

        assert_eq!(stats.arcs_imported, 2);
        assert_eq!(stats.skipped_entries, 2);
        assert_eq!(stats.skipped_lines, 0);
        assert_eq!(graph.residual(v(1), v(2)), Some(5));
        assert_eq!(graph.residual(v(1), v(5)), Some(1));
        assert!(!graph.contains(v(3)));
    }

    #[test]
    fn test_write_augmented_graph_then_load() {
        let mut graph = FlowGraph::from_arcs([(1, 2, 5), (2, 3, 3)]);
        let path = [v(1), v(2), v(3)];
        FordFulkerson::augment_path(&mut graph, &path).unwrap();
        assert_eq!(graph.residual(v(2), v(3)), Some(0));

        let mut buffer = Vec::new();
        write_adjacency(&graph, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "1,2:2\n2,1:3\n3,2:3\n");

        let (loaded, stats) = load_adjacency(buffer.as_slice()).unwrap();
        assert_eq!(stats.skipped_lines, 0);
        assert_eq!(stats.skipped_entries, 0);
        let positive: Vec<_> = graph.arcs().filter(|&(_, _, cap)| cap > 0).collect();
        assert_eq!(loaded.arcs().collect::<Vec<_>>(), positive);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_adjacency_csv("/nonexistent/graph.csv"),
            Err(Error::ImportError(_))
        ));
    }
}
