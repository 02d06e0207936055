//! 结果打印器
//!
//! 提供表格、垂直和 JSON 格式的模拟结果输出

use crate::error::{Error, Result};
use crate::generate::GeneratorConfig;
use crate::simulation::SimulationOutcome;
use prettytable::{format, Cell, Row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
    /// JSON
    Json,
}

/// 表头
const COLUMNS: [&str; 9] = [
    "Algorithm",
    "n",
    "r",
    "upperCap",
    "paths",
    "ML",
    "MPL",
    "totalEdges",
    "maxFlow",
];

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 渲染模拟结果
    ///
    /// `params` 为生成图时的参数，未知时对应列输出 `-`。
    pub fn render(
        &self,
        outcomes: &[SimulationOutcome],
        params: Option<&GeneratorConfig>,
    ) -> Result<String> {
        if outcomes.is_empty() {
            return Ok("Empty set\n".to_string());
        }

        match self.mode {
            PrintMode::Json => serde_json::to_string_pretty(outcomes)
                .map(|s| s + "\n")
                .map_err(|e| Error::SerializationError(e.to_string())),
            PrintMode::Table => Ok(self.format_table(&Self::rows(outcomes, params))),
            PrintMode::Vertical => Ok(self.format_vertical(&Self::rows(outcomes, params))),
        }
    }

    fn rows(outcomes: &[SimulationOutcome], params: Option<&GeneratorConfig>) -> Vec<Vec<String>> {
        let (n, r, upper_cap) = match params {
            Some(p) => (
                p.vertices.to_string(),
                format!("{:.2}", p.radius),
                p.upper_cap.to_string(),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };

        outcomes
            .iter()
            .map(|o| {
                vec![
                    o.name().to_string(),
                    n.clone(),
                    r.clone(),
                    upper_cap.clone(),
                    o.paths().to_string(),
                    format_mean(o.mean_length()),
                    format_mean(o.mean_proportional_length()),
                    o.total_edges().to_string(),
                    o.max_flow().to_string(),
                ]
            })
            .collect()
    }

    /// 表格格式
    fn format_table(&self, rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = COLUMNS.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, rows: &[Vec<String>]) -> String {
        let max_col_width = COLUMNS.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in COLUMNS.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }
}

/// NaN 表示没有增广路径，输出 `-`
fn format_mean(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{:.2}", value)
    }
}
