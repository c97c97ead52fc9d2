//! 床位背包（基數限制）

use triage_core::Patient;

/// 床位背包求解結果
#[derive(Debug, Clone)]
pub struct BedKnapsackSolution {
    /// 最大嚴重度總和 `dp[B][n]`
    pub max_severity: u32,

    /// 選中的病患（原始順序）
    pub selected: Vec<Patient>,

    /// DP 表格：列 = 床位 0..=B，欄 = 已考慮病患數
    pub table: Vec<Vec<u32>>,
}

impl BedKnapsackSolution {
    /// 轉置表格為 列 = 病患、欄 = 床位，與時間表格的方向一致
    pub fn transposed(&self) -> Vec<Vec<u32>> {
        let beds = self.table.len();
        let columns = self.table.first().map(Vec::len).unwrap_or(0);

        (0..columns)
            .map(|i| (0..beds).map(|b| self.table[b][i]).collect())
            .collect()
    }
}

/// 床位背包求解器
///
/// 每位病患佔用一張床，至多選 `max_beds` 位，使嚴重度總和最大。
/// 不考慮治療時間，也不依賴時間背包的排序。
pub struct BedKnapsackSolver;

impl BedKnapsackSolver {
    /// 求解
    pub fn solve(patients: &[Patient], max_beds: u32) -> BedKnapsackSolution {
        let beds = max_beds as usize;

        tracing::debug!("床位背包：病患 {} 位，床位 B={}", patients.len(), max_beds);

        let table = Self::fill_table(patients, beds);
        let max_severity = table[beds][patients.len()];
        let selected = Self::backtrack(&table, patients, beds);

        tracing::debug!(
            "床位背包完成：最大嚴重度 {}，選中 {} 位",
            max_severity,
            selected.len()
        );

        BedKnapsackSolution {
            max_severity,
            selected,
            table,
        }
    }

    /// 填表
    ///
    /// `dp[0][i] = 0`；`b >= 1` 時 `dp[b][i] = max(dp[b][i-1], dp[b-1][i-1] + severity(i))`。
    fn fill_table(patients: &[Patient], beds: usize) -> Vec<Vec<u32>> {
        let n = patients.len();
        let mut dp = vec![vec![0u32; n + 1]; beds + 1];

        for b in 1..=beds {
            for i in 1..=n {
                let take = dp[b - 1][i - 1] + patients[i - 1].severity;
                dp[b][i] = dp[b][i - 1].max(take);
            }
        }

        dp
    }

    /// 回溯選中的病患
    fn backtrack(dp: &[Vec<u32>], patients: &[Patient], beds: usize) -> Vec<Patient> {
        let mut selected = Vec::new();
        let mut remaining_beds = beds;

        for i in (1..=patients.len()).rev() {
            if dp[remaining_beds][i] != dp[remaining_beds][i - 1] {
                selected.push(patients[i - 1].clone());
                remaining_beds -= 1;
            }
        }

        selected.reverse();
        selected
    }
}
