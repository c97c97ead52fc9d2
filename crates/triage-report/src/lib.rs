//! # Triage Report
//!
//! 純文字報表：病患清單、方案摘要與 DP 表格
//!
//! 只讀取 `Patient` 與 `SolveResult`，不接觸求解器內部。

pub mod render;
pub mod table;

// Re-export 主要類型
pub use render::{
    render_dp_table, render_patients, render_plan_summary, sampled_column_indices, PlanSummary,
};
pub use table::TextTable;
