//! FlowSim 随机图生成工具
//!
//! 生成随机几何流网络并保存为邻接表 CSV

use anyhow::Context;
use clap::Parser;
use flowsim::import::write_adjacency_csv;
use flowsim::{generate_graph, GeneratorConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flowsim-generate")]
#[command(about = "FlowSim 随机图生成工具")]
struct Args {
    /// 顶点数
    vertices: usize,

    /// 连边半径（单位正方形内）
    radius: f64,

    /// 容量上限
    upper_cap: u64,

    /// 输出文件（默认 graph_adjacency_list_{n}_{r}_{upperCap}.csv）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 随机种子
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = GeneratorConfig {
        vertices: args.vertices,
        radius: args.radius,
        upper_cap: args.upper_cap,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let graph = generate_graph(&config, &mut rng).context("生成随机图失败")?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(config.file_name()));
    write_adjacency_csv(&graph, &output)
        .with_context(|| format!("写入 {:?} 失败", output))?;

    info!(path = %output.display(), "邻接表已保存");
    println!("{}", output.display());

    Ok(())
}
