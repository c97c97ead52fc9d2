//! # Triage Calculation Engine
//!
//! 時間預算與床位兩組 0/1 背包動態規劃，以及床位上限的事後修正

pub mod bed_knapsack;
pub mod reconcile;
pub mod solver;
pub mod time_knapsack;

use serde::{Deserialize, Serialize};
use triage_core::Patient;

// Re-export 主要類型
pub use bed_knapsack::{BedKnapsackSolution, BedKnapsackSolver};
pub use reconcile::{Reconciler, Reconciliation};
pub use solver::{solve, TriageCalculator};
pub use time_knapsack::{TimeKnapsackSolution, TimeKnapsackSolver};

/// DP 表格第一列（尚未考慮任何病患）的標籤
pub const INITIAL_ROW_LABEL: &str = "Initial (0)";

/// 帶標籤的 DP 表格（供檢視與視覺化）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpTable {
    /// 列標籤：`Initial (0)` 之後為各病患描述
    pub row_labels: Vec<String>,

    /// 欄標籤：`T=0..` 或 `B=0..`
    pub column_labels: Vec<String>,

    /// 儲存格：各列累計考慮的病患、各欄容量下的最大嚴重度
    pub cells: Vec<Vec<u32>>,
}

impl DpTable {
    /// 以病患順序與欄位前綴建立表格
    pub fn labeled(
        patients: &[Patient],
        column_prefix: &str,
        cells: Vec<Vec<u32>>,
    ) -> Self {
        let row_labels = std::iter::once(INITIAL_ROW_LABEL.to_string())
            .chain(patients.iter().map(Patient::descriptor))
            .collect();

        let column_count = cells.first().map(Vec::len).unwrap_or(0);
        let column_labels = (0..column_count)
            .map(|c| format!("{}={}", column_prefix, c))
            .collect();

        Self {
            row_labels,
            column_labels,
            cells,
        }
    }

    /// 讀取單一儲存格
    pub fn get(&self, row: usize, column: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_labels.len()
    }
}

/// 檢傷求解結果
///
/// 兩組選擇彼此獨立：時間方案先依時間預算求最佳解，再以床位上限截斷；
/// 床位方案只考慮床位數量，完全忽略治療時間。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResult {
    /// 時間方案選中的病患（治療時間遞增；截斷時為嚴重度遞減）
    pub time_selection: Vec<Patient>,

    /// 時間預算下的最佳嚴重度總和（`dp[n][T]`，截斷前的值）
    pub time_value: u32,

    /// 因床位上限而自時間方案移除的病患
    pub dropped_by_bed_limit: Vec<Patient>,

    /// 床位方案選中的病患（原始順序）
    pub bed_selection: Vec<Patient>,

    /// 床位限制下的最佳嚴重度總和（未設床位時為 None）
    pub bed_value: Option<u32>,

    /// 時間 DP 表格：(n+1) × (max_time+1)
    pub time_table: DpTable,

    /// 床位 DP 表格（轉置為 列=病患、欄=床位）：(n+1) × (max_beds+1)
    pub bed_table: Option<DpTable>,

    /// 計算訊息
    pub messages: Vec<String>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u64>,
}

impl SolveResult {
    /// 時間方案使用的總治療時間
    pub fn time_plan_duration(&self) -> u64 {
        total_treatment_time(&self.time_selection)
    }

    /// 時間方案實際選中病患的嚴重度總和（截斷後可能低於 `time_value`）
    pub fn time_plan_severity(&self) -> u64 {
        total_severity(&self.time_selection)
    }

    /// 床位方案使用的總治療時間（可能超出時間預算）
    pub fn bed_plan_duration(&self) -> u64 {
        total_treatment_time(&self.bed_selection)
    }

    /// 時間方案是否因床位上限被截斷
    pub fn was_truncated(&self) -> bool {
        !self.dropped_by_bed_limit.is_empty()
    }

    /// 序列化為 JSON
    pub fn to_json(&self) -> triage_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 嚴重度總和
pub fn total_severity(patients: &[Patient]) -> u64 {
    patients.iter().map(|p| u64::from(p.severity)).sum()
}

/// 治療時間總和（以 u64 累加，單一病患的時間可達 `u32::MAX`）
pub fn total_treatment_time(patients: &[Patient]) -> u64 {
    patients.iter().map(|p| u64::from(p.treatment_time)).sum()
}
