//! 檢傷主計算器

use triage_core::{Patient, TriageConfig, WaitingRoom};

use crate::{
    BedKnapsackSolver, DpTable, Reconciler, SolveResult, TimeKnapsackSolver,
};

/// 檢傷計算器
pub struct TriageCalculator {
    /// 約束配置
    config: TriageConfig,
}

impl TriageCalculator {
    /// 創建新的檢傷計算器（配置先經過驗證）
    pub fn new(config: TriageConfig) -> triage_core::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 對候診室快照求解
    pub fn calculate(&self, room: &WaitingRoom) -> triage_core::Result<SolveResult> {
        solve(room.patients(), self.config.max_time, self.config.max_beds)
    }

    /// 獲取配置引用
    pub fn config(&self) -> &TriageConfig {
        &self.config
    }
}

/// 主求解入口
///
/// 1. 時間預算背包（依治療時間排序後求解）
/// 2. 以床位上限截斷時間方案
/// 3. 床位背包（原始順序，與步驟 1 無關）
/// 4. 組裝兩張 DP 表格與標籤
///
/// 病患為空時不視為錯誤，兩組結果皆為 0 與空選擇。
pub fn solve(
    patients: &[Patient],
    max_time: u32,
    max_beds: Option<u32>,
) -> triage_core::Result<SolveResult> {
    tracing::info!(
        "開始檢傷計算：病患 {} 位，可用時間 {}，床位 {:?}",
        patients.len(),
        max_time,
        max_beds
    );

    for patient in patients {
        patient.validate()?;
    }

    let start_time = std::time::Instant::now();
    let mut messages = Vec::new();

    // Step 1: 時間預算背包
    tracing::debug!("Step 1: 時間預算背包");
    let time_solution = TimeKnapsackSolver::solve(patients, max_time);

    // Step 2: 床位上限修正
    tracing::debug!("Step 2: 床位上限修正");
    let reconciliation = Reconciler::apply(&time_solution.selected, max_beds);
    if !reconciliation.dropped.is_empty() {
        messages.push(format!(
            "時間方案選中 {} 位，超過床位上限，依嚴重度保留 {} 位（非雙重限制下的最佳解）",
            time_solution.selected.len(),
            reconciliation.kept.len()
        ));
    }

    // Step 3: 床位背包
    tracing::debug!("Step 3: 床位背包");
    let bed_solution = max_beds.map(|beds| BedKnapsackSolver::solve(patients, beds));

    // Step 4: 組裝表格
    tracing::debug!("Step 4: 組裝 DP 表格");
    let time_table = DpTable::labeled(&time_solution.ordered_patients, "T", time_solution.table);

    let (bed_selection, bed_value, bed_table) = match bed_solution {
        Some(solution) => {
            let table = DpTable::labeled(patients, "B", solution.transposed());
            (solution.selected, Some(solution.max_severity), Some(table))
        }
        None => {
            messages.push("未設定床位上限，略過床位方案".to_string());
            (Vec::new(), None, None)
        }
    };

    let elapsed = start_time.elapsed();
    let result = SolveResult {
        time_selection: reconciliation.kept,
        time_value: time_solution.max_severity,
        dropped_by_bed_limit: reconciliation.dropped,
        bed_selection,
        bed_value,
        time_table,
        bed_table,
        messages,
        calculation_time_ms: Some(elapsed.as_millis() as u64),
    };

    tracing::info!("檢傷計算完成，耗時 {:?}", elapsed);
    tracing::info!(
        "時間方案：嚴重度 {}，選中 {} 位；床位方案：嚴重度 {:?}，選中 {} 位",
        result.time_value,
        result.time_selection.len(),
        result.bed_value,
        result.bed_selection.len()
    );

    Ok(result)
}
