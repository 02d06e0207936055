//! 随机几何图生成
//!
//! 在单位正方形内均匀撒 n 个点，距离不超过 r 的每对点之间连一条弧，
//! 方向随机，容量在 1..=upper_cap 内均匀分布。

use crate::error::{Error, Result};
use crate::graph::{FlowGraph, VertexId};
use crate::types::Capacity;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// 生成参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// 顶点数 n
    pub vertices: usize,
    /// 连边半径 r
    pub radius: f64,
    /// 容量上限
    pub upper_cap: Capacity,
}

impl GeneratorConfig {
    /// 校验参数
    pub fn validate(&self) -> Result<()> {
        if self.vertices == 0 {
            return Err(Error::GenerateError("顶点数必须大于 0".to_string()));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::GenerateError(format!(
                "半径必须为正数, 实际为 {}",
                self.radius
            )));
        }
        if self.upper_cap == 0 {
            return Err(Error::GenerateError("容量上限必须至少为 1".to_string()));
        }
        Ok(())
    }

    /// 默认输出文件名
    pub fn file_name(&self) -> String {
        format!(
            "graph_adjacency_list_{}_{}_{}.csv",
            self.vertices, self.radius, self.upper_cap
        )
    }

    /// 从默认文件名中还原生成参数
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name
            .strip_prefix("graph_adjacency_list_")?
            .strip_suffix(".csv")?;
        let mut parts = stem.splitn(3, '_');
        let vertices = parts.next()?.parse().ok()?;
        let radius = parts.next()?.parse().ok()?;
        let upper_cap = parts.next()?.parse().ok()?;
        Some(Self {
            vertices,
            radius,
            upper_cap,
        })
    }
}

/// 生成随机几何流网络，顶点 ID 为 1..=n
pub fn generate_graph<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<FlowGraph> {
    config.validate()?;

    let points: Vec<(f64, f64)> = (0..config.vertices)
        .map(|_| (rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();

    let mut graph = FlowGraph::new();
    for i in 0..config.vertices {
        graph.add_vertex(vertex_id(i));
    }

    let radius_sq = config.radius * config.radius;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let dx = points[i].0 - points[j].0;
            let dy = points[i].1 - points[j].1;
            if dx * dx + dy * dy > radius_sq {
                continue;
            }

            let capacity = rng.gen_range(1..=config.upper_cap);
            let (from, to) = if rng.gen_bool(0.5) { (i, j) } else { (j, i) };
            graph.add_arc(vertex_id(from), vertex_id(to), capacity);
        }
    }

    info!(
        vertices = graph.vertex_count(),
        edges = graph.total_edge_count(),
        radius = config.radius,
        upper_cap = config.upper_cap,
        "随机图已生成"
    );
    Ok(graph)
}

fn vertex_id(index: usize) -> VertexId {
    VertexId::new(index as u64 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(vertices: usize, radius: f64, upper_cap: Capacity) -> GeneratorConfig {
        GeneratorConfig {
            vertices,
            radius,
            upper_cap,
        }
    }

    #[test]
    fn test_generate_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = generate_graph(&config(50, 0.25, 10), &mut rng).unwrap();

        assert_eq!(graph.vertex_count(), 50);
        for (from, to, cap) in graph.arcs() {
            assert!((1..=10).contains(&cap));
            assert_ne!(from, to);
            // 每对顶点最多一个方向
            assert_eq!(graph.residual(to, from), None);
        }
    }

    #[test]
    fn test_full_radius_connects_every_pair() {
        let mut rng = StdRng::seed_from_u64(8);
        let graph = generate_graph(&config(10, 2.0, 3), &mut rng).unwrap();
        assert_eq!(graph.total_edge_count(), 10 * 9 / 2);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = generate_graph(&config(30, 0.3, 50), &mut StdRng::seed_from_u64(77)).unwrap();
        let b = generate_graph(&config(30, 0.3, 50), &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a.arcs().collect::<Vec<_>>(), b.arcs().collect::<Vec<_>>());
    }

    #[test]
    fn test_invalid_config() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_graph(&config(0, 0.3, 5), &mut rng).is_err());
        assert!(generate_graph(&config(10, 0.0, 5), &mut rng).is_err());
        assert!(generate_graph(&config(10, f64::NAN, 5), &mut rng).is_err());
        assert!(generate_graph(&config(10, 0.3, 0), &mut rng).is_err());
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            config(100, 0.2, 50).file_name(),
            "graph_adjacency_list_100_0.2_50.csv"
        );

        let parsed = GeneratorConfig::from_file_name("graph_adjacency_list_200_0.3_50.csv").unwrap();
        assert_eq!(parsed.vertices, 200);
        assert_eq!(parsed.radius, 0.3);
        assert_eq!(parsed.upper_cap, 50);
        assert!(GeneratorConfig::from_file_name("graph.csv").is_none());
    }
}
