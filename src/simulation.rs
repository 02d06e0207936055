//! 模拟运行
//!
//! 对同一张图和同一对端点，用每种策略反复"选路 -> 增广"直到没有增广路径，
//! 并统计路径数、平均长度、平均比例长度、初始边数和最大流。
//! 每个策略都在图的独立副本上运行。

use crate::algorithm::{
    is_sentinel, AugmentingPath, DfsLike, FordFulkerson, MaxCapacity, PathSelector, RandomKey,
    Sap,
};
use crate::error::{Error, Result};
use crate::graph::{FlowGraph, VertexId};
use crate::types::{Capacity, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// 模拟状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Running,
    Done,
}

/// 单轮结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Round {
    /// 沿路径推送了 bottleneck 单位流量
    Augmented {
        path: AugmentingPath,
        bottleneck: Capacity,
    },
    /// 没有增广路径了
    Done,
}

/// 模拟结果（构造后不可变）
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    strategy: Strategy,
    max_flow: Capacity,
    paths: usize,
    mean_length: f64,
    mean_proportional_length: f64,
    total_edges: usize,
}

impl SimulationOutcome {
    /// 策略名称
    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// 最大流
    pub fn max_flow(&self) -> Capacity {
        self.max_flow
    }

    /// 增广路径数
    pub fn paths(&self) -> usize {
        self.paths
    }

    /// 平均路径长度（顶点数）；没有增广路径时为 NaN
    pub fn mean_length(&self) -> f64 {
        self.mean_length
    }

    /// 平均长度 / 最长路径长度；没有增广路径时为 NaN
    pub fn mean_proportional_length(&self) -> f64 {
        self.mean_proportional_length
    }

    /// 开始时残余图的边数
    pub fn total_edges(&self) -> usize {
        self.total_edges
    }
}

/// 累计统计
#[derive(Debug, Clone, Default)]
struct FlowStats {
    paths: usize,
    total_length: usize,
    max_length: usize,
    max_flow: Capacity,
}

impl FlowStats {
    /// 累计流量加上 bottleneck 后的值，超出 `Capacity::MAX` 时报错
    fn flow_after(&self, bottleneck: Capacity) -> Result<Capacity> {
        self.max_flow.checked_add(bottleneck).ok_or_else(|| {
            Error::CapacityOverflow(format!("累计流量 {} + {}", self.max_flow, bottleneck))
        })
    }

    fn record(&mut self, path_len: usize, flow: Capacity) {
        self.paths += 1;
        self.total_length += path_len;
        self.max_length = self.max_length.max(path_len);
        self.max_flow = flow;
    }

    fn finish(&self, strategy: Strategy, total_edges: usize) -> SimulationOutcome {
        let (mean_length, mean_proportional_length) = if self.paths == 0 || self.max_length == 0 {
            (f64::NAN, f64::NAN)
        } else {
            let mean = self.total_length as f64 / self.paths as f64;
            (mean, mean / self.max_length as f64)
        };

        SimulationOutcome {
            strategy,
            max_flow: self.max_flow,
            paths: self.paths,
            mean_length,
            mean_proportional_length,
            total_edges,
        }
    }
}

/// 一次策略运行：在给定的残余图上反复增广
pub struct Simulation<'g, S> {
    graph: &'g mut FlowGraph,
    selector: S,
    source: VertexId,
    sink: VertexId,
    state: SimulationState,
    stats: FlowStats,
    total_edges: usize,
}

impl<'g, S: PathSelector> Simulation<'g, S> {
    /// 创建运行实例，同时记录初始边数
    pub fn new(graph: &'g mut FlowGraph, selector: S, source: VertexId, sink: VertexId) -> Self {
        let total_edges = graph.total_edge_count();
        Self {
            graph,
            selector,
            source,
            sink,
            state: SimulationState::Running,
            stats: FlowStats::default(),
            total_edges,
        }
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// 当前累计的流量
    pub fn flow(&self) -> Capacity {
        self.stats.max_flow
    }

    /// 执行一轮：选路，若有路径则增广
    pub fn step(&mut self) -> Result<Round> {
        if self.state == SimulationState::Done {
            return Ok(Round::Done);
        }

        let path = self.selector.find_path(self.graph, self.source, self.sink)?;
        if is_sentinel(&path) {
            self.state = SimulationState::Done;
            return Ok(Round::Done);
        }

        let bottleneck = FordFulkerson::bottleneck(self.graph, &path)?;
        let flow = self.stats.flow_after(bottleneck)?;
        FordFulkerson::augment(self.graph, &path, bottleneck)?;
        self.stats.record(path.len(), flow);
        debug!(
            strategy = %self.selector.strategy(),
            round = self.stats.paths,
            bottleneck,
            path = ?path.iter().map(VertexId::as_u64).collect::<Vec<_>>(),
            "增广"
        );

        Ok(Round::Augmented { path, bottleneck })
    }

    /// 运行到没有增广路径为止
    pub fn run(mut self) -> Result<SimulationOutcome> {
        while self.step()? != Round::Done {}
        Ok(self.stats.finish(self.selector.strategy(), self.total_edges))
    }
}

/// 模拟配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// 随机种子；为空时从系统熵初始化
    pub seed: Option<u64>,
    /// 需要运行的策略（按顺序）
    pub strategies: Vec<Strategy>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl SimulationConfig {
    /// 按配置构造随机源
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// 策略运行器
///
/// 持有只读的原始图，每次运行前克隆出独立副本。
pub struct SimulationRunner<'a> {
    graph: &'a FlowGraph,
    source: VertexId,
    sink: VertexId,
}

impl<'a> SimulationRunner<'a> {
    pub fn new(graph: &'a FlowGraph, source: VertexId, sink: VertexId) -> Self {
        Self {
            graph,
            source,
            sink,
        }
    }

    /// 用给定选择器在图副本上运行
    pub fn run<S: PathSelector>(&self, selector: S) -> Result<SimulationOutcome> {
        let strategy = selector.strategy();
        info!(strategy = %strategy, source = %self.source, sink = %self.sink, "开始模拟");

        let mut graph = self.graph.clone();
        let outcome = Simulation::new(&mut graph, selector, self.source, self.sink).run()?;

        info!(
            strategy = %strategy,
            max_flow = outcome.max_flow(),
            paths = outcome.paths(),
            "模拟完成"
        );
        Ok(outcome)
    }

    /// 按策略运行
    pub fn run_strategy<R: Rng + ?Sized>(
        &self,
        strategy: Strategy,
        rng: &mut R,
    ) -> Result<SimulationOutcome> {
        match strategy {
            Strategy::Sap => self.run(Sap::new()),
            Strategy::DfsLike => self.run(DfsLike::new()),
            Strategy::MaxCapacity => self.run(MaxCapacity::new()),
            Strategy::Random => self.run(RandomKey::new(rng)),
        }
    }

    /// 依次运行配置中的所有策略
    ///
    /// 某个策略失败不影响其他策略，各自的结果单独返回。
    pub fn run_all<R: Rng + ?Sized>(
        &self,
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Vec<(Strategy, Result<SimulationOutcome>)> {
        config
            .strategies
            .iter()
            .map(|&strategy| {
                let result = self.run_strategy(strategy, rng);
                if let Err(e) = &result {
                    warn!(strategy = %strategy, error = %e, "模拟失败");
                }
                (strategy, result)
            })
            .collect()
    }
}
