//! 時間預算背包

use triage_core::Patient;

/// 時間預算背包求解結果
#[derive(Debug, Clone)]
pub struct TimeKnapsackSolution {
    /// 最大嚴重度總和 `dp[n][T]`
    pub max_severity: u32,

    /// 選中的病患（依治療時間遞增）
    pub selected: Vec<Patient>,

    /// 排序後的病患，對應 DP 表格第 1..=n 列
    pub ordered_patients: Vec<Patient>,

    /// DP 表格：列 = 已考慮病患數，欄 = 時間容量 0..=T
    pub table: Vec<Vec<u32>>,
}

/// 時間預算背包求解器
///
/// 在治療時間總和不超過 `max_time` 的條件下，使嚴重度總和最大，每位病患至多一次。
/// 時間與空間複雜度皆為 O(n·T)。
pub struct TimeKnapsackSolver;

impl TimeKnapsackSolver {
    /// 求解
    pub fn solve(patients: &[Patient], max_time: u32) -> TimeKnapsackSolution {
        let capacity = max_time as usize;

        // 穩定排序：只影響回溯順序，不影響最佳值
        let mut ordered_patients = patients.to_vec();
        ordered_patients.sort_by_key(|p| p.treatment_time);

        tracing::debug!(
            "時間背包：病患 {} 位，容量 T={}",
            ordered_patients.len(),
            max_time
        );

        let table = Self::fill_table(&ordered_patients, capacity);
        let max_severity = table[ordered_patients.len()][capacity];
        let selected = Self::backtrack(&table, &ordered_patients, capacity);

        tracing::debug!(
            "時間背包完成：最大嚴重度 {}，選中 {} 位",
            max_severity,
            selected.len()
        );

        TimeKnapsackSolution {
            max_severity,
            selected,
            ordered_patients,
            table,
        }
    }

    /// 填表
    ///
    /// `dp[0][t] = 0`；`t < time(i)` 時沿用上一列，否則取
    /// `max(dp[i-1][t], severity(i) + dp[i-1][t - time(i)])`。
    fn fill_table(patients: &[Patient], capacity: usize) -> Vec<Vec<u32>> {
        let n = patients.len();
        let mut dp = vec![vec![0u32; capacity + 1]; n + 1];

        for i in 1..=n {
            let severity = patients[i - 1].severity;
            let time_steps = patients[i - 1].treatment_time as usize;

            for t in 0..=capacity {
                dp[i][t] = dp[i - 1][t];

                if t >= time_steps {
                    dp[i][t] = dp[i][t].max(severity + dp[i - 1][t - time_steps]);
                }
            }
        }

        dp
    }

    /// 回溯選中的病患
    ///
    /// 某列與上一列在剩餘容量處的值不同，即表示該病患被選中。
    fn backtrack(dp: &[Vec<u32>], patients: &[Patient], capacity: usize) -> Vec<Patient> {
        let mut selected = Vec::new();
        let mut remain = capacity;

        for i in (1..=patients.len()).rev() {
            if dp[i][remain] != dp[i - 1][remain] {
                selected.push(patients[i - 1].clone());
                remain -= patients[i - 1].treatment_time as usize;
            }
        }

        selected.reverse();
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{total_severity, total_treatment_time};

    fn triad() -> Vec<Patient> {
        vec![
            Patient::new(1, "Ahmed", "Cardiac Arrest", 90, 30),
            Patient::new(2, "Mostafa", "Severe Bleeding", 70, 20),
            Patient::new(3, "Yasmine", "Broken Bone", 40, 30),
        ]
    }

    #[test]
    fn test_best_pair_within_budget() {
        let solution = TimeKnapsackSolver::solve(&triad(), 60);

        assert_eq!(solution.max_severity, 160);
        let ids: Vec<_> = solution.selected.iter().map(|p| p.id).collect();
        // 依治療時間遞增：Mostafa(20) 在 Ahmed(30) 之前
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(total_treatment_time(&solution.selected), 50);
        assert_eq!(total_severity(&solution.selected), u64::from(solution.max_severity));
    }

    #[test]
    fn test_table_shape_and_base_row() {
        let solution = TimeKnapsackSolver::solve(&triad(), 60);

        assert_eq!(solution.table.len(), 4);
        assert!(solution.table.iter().all(|row| row.len() == 61));
        assert!(solution.table[0].iter().all(|&v| v == 0));

        // 排序後第一列為治療時間最短的病患
        assert_eq!(solution.ordered_patients[0].id, 2);
        assert_eq!(solution.table[1][19], 0);
        assert_eq!(solution.table[1][20], 70);
    }

    #[test]
    fn test_sort_is_stable() {
        let patients = vec![
            Patient::new(1, "a", "x", 10, 5),
            Patient::new(2, "b", "x", 20, 3),
            Patient::new(3, "c", "x", 30, 5),
        ];

        let solution = TimeKnapsackSolver::solve(&patients, 0);
        let ids: Vec<_> = solution.ordered_patients.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_zero_capacity() {
        let solution = TimeKnapsackSolver::solve(&triad(), 0);

        assert_eq!(solution.max_severity, 0);
        assert!(solution.selected.is_empty());
        assert!(solution.table.iter().all(|row| row.len() == 1));
    }

    #[test]
    fn test_no_patients() {
        let solution = TimeKnapsackSolver::solve(&[], 60);

        assert_eq!(solution.max_severity, 0);
        assert!(solution.selected.is_empty());
        assert_eq!(solution.table.len(), 1);
    }

    #[test]
    fn test_patient_longer_than_budget_never_selected() {
        let patients = vec![
            Patient::new(1, "Ahmed", "Stroke Criteria", 95, 70),
            Patient::new(2, "Mazen", "Mild Fever", 15, 10),
        ];

        let solution = TimeKnapsackSolver::solve(&patients, 60);

        assert_eq!(solution.max_severity, 15);
        assert_eq!(solution.selected.len(), 1);
        assert_eq!(solution.selected[0].id, 2);
    }

    #[test]
    fn test_equal_patients_fill_budget() {
        let patients: Vec<_> = (1..=5)
            .map(|id| Patient::new(id, "p", "Mild Fever", 10, 10))
            .collect();

        let solution = TimeKnapsackSolver::solve(&patients, 25);

        assert_eq!(solution.max_severity, 20);
        assert_eq!(solution.selected.len(), 2);
        assert!(total_treatment_time(&solution.selected) <= 25);
    }
}
