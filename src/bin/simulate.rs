//! FlowSim 模拟入口
//!
//! 加载邻接表，选定源点和汇点，依次运行各策略并输出对比结果

use anyhow::{bail, Context};
use clap::Parser;
use flowsim::algorithm::endpoints::{farthest_vertex, random_source};
use flowsim::cli::{PrintMode, Printer};
use flowsim::import::load_adjacency_csv;
use flowsim::{GeneratorConfig, SimulationConfig, SimulationRunner, Strategy, VertexId};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flowsim")]
#[command(about = "比较增广路径选择策略的 Ford-Fulkerson 模拟")]
struct Args {
    /// 邻接表 CSV 文件
    #[arg(short, long)]
    input: PathBuf,

    /// 源点 ID（默认随机选取）
    #[arg(long)]
    source: Option<u64>,

    /// 汇点 ID（默认取离源点最远的顶点）
    #[arg(long)]
    sink: Option<u64>,

    /// 随机种子
    #[arg(long)]
    seed: Option<u64>,

    /// 运行的策略，可重复：sap, dfs, max-cap, random（默认全部）
    #[arg(short, long = "strategy")]
    strategies: Vec<Strategy>,

    /// 输出格式: table, vertical, json
    #[arg(short, long, default_value = "table")]
    format: String,

    /// 输出每条增广路径
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mode = match args.format.as_str() {
        "table" => PrintMode::Table,
        "vertical" => PrintMode::Vertical,
        "json" => PrintMode::Json,
        other => bail!("不支持的格式: {}", other),
    };

    let (graph, stats) = load_adjacency_csv(&args.input)
        .with_context(|| format!("加载 {:?} 失败", args.input))?;
    if stats.skipped_lines > 0 || stats.skipped_entries > 0 {
        info!(
            skipped_lines = stats.skipped_lines,
            skipped_entries = stats.skipped_entries,
            "部分内容无法解析，已跳过"
        );
    }

    let mut config = SimulationConfig {
        seed: args.seed,
        ..SimulationConfig::default()
    };
    if !args.strategies.is_empty() {
        config.strategies = args.strategies.clone();
    }
    let mut rng = config.rng();

    let source = match args.source {
        Some(id) => VertexId::new(id),
        None => random_source(&graph, &mut rng).context("图中没有带出边的顶点")?,
    };
    let sink = match args.sink {
        Some(id) => VertexId::new(id),
        None => {
            let (sink, hops) = farthest_vertex(&graph, source)
                .with_context(|| format!("源点 {} 不在图中", source))?;
            info!(sink = %sink, hops, "已选取最远顶点作为汇点");
            sink
        }
    };
    info!(
        vertices = graph.vertex_count(),
        edges = graph.total_edge_count(),
        source = %source,
        sink = %sink,
        "开始对比"
    );

    let runner = SimulationRunner::new(&graph, source, sink);
    let mut outcomes = Vec::new();
    for (strategy, result) in runner.run_all(&config, &mut rng) {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => error!(strategy = %strategy, error = %e, "策略运行失败"),
        }
    }
    if outcomes.is_empty() {
        bail!("所有策略均运行失败");
    }

    let params = args
        .input
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(GeneratorConfig::from_file_name);
    let output = Printer::new(mode).render(&outcomes, params.as_ref())?;
    print!("{}", output);

    Ok(())
}
