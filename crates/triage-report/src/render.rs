//! 報表輸出

use std::fmt::Write;

use triage_calc::{DpTable, SolveResult};
use triage_core::{DisplayConfig, Patient};

use crate::TextTable;

/// 病患清單
pub fn render_patients(patients: &[Patient]) -> String {
    let mut table = TextTable::new([
        "ID",
        "Name",
        "Condition",
        "Severity",
        "Treatment Time (steps)",
    ]);

    for p in patients {
        table.push_row([
            p.id.to_string(),
            p.name.clone(),
            p.condition.clone(),
            p.severity.to_string(),
            p.treatment_time.to_string(),
        ]);
    }

    table.render()
}

/// 單一方案摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub selected_patients: usize,
    pub total_severity: u32,
    pub time_used: u64,
    pub beds_used: usize,
}

impl PlanSummary {
    fn new(patients: &[Patient], total_severity: u32) -> Self {
        Self {
            selected_patients: patients.len(),
            total_severity,
            time_used: triage_calc::total_treatment_time(patients),
            beds_used: patients.len(),
        }
    }

    /// 時間方案：嚴重度取 DP 最佳值
    pub fn time_plan(result: &SolveResult) -> Self {
        Self::new(&result.time_selection, result.time_value)
    }

    /// 床位方案：未設床位時嚴重度為 0
    pub fn bed_plan(result: &SolveResult) -> Self {
        Self::new(&result.bed_selection, result.bed_value.unwrap_or(0))
    }
}

/// 兩組方案摘要與選中病患
pub fn render_plan_summary(result: &SolveResult, max_time: u32, max_beds: Option<u32>) -> String {
    let mut out = String::new();
    let beds_label = max_beds
        .map(|b| b.to_string())
        .unwrap_or_else(|| "-".to_string());

    let time_plan = PlanSummary::time_plan(result);
    let _ = writeln!(out, "#### Time-Based Optimization");
    let _ = writeln!(out, "Selected Patients: {}", time_plan.selected_patients);
    let _ = writeln!(out, "Total Severity:    {}", time_plan.total_severity);
    let _ = writeln!(out, "Time Used:         {}/{} steps", time_plan.time_used, max_time);
    let _ = writeln!(out, "Beds Used:         {}", time_plan.beds_used);
    write_selection(&mut out, &result.time_selection);

    if result.was_truncated() {
        let _ = writeln!(
            out,
            "Dropped by bed limit: {}",
            result
                .dropped_by_bed_limit
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let bed_plan = PlanSummary::bed_plan(result);
    let _ = writeln!(out);
    let _ = writeln!(out, "#### Bed-Based Optimization");
    let _ = writeln!(out, "Selected Patients: {}", bed_plan.selected_patients);
    let _ = writeln!(out, "Total Severity:    {}", bed_plan.total_severity);
    let _ = writeln!(out, "Time Used:         {} steps", bed_plan.time_used);
    let _ = writeln!(out, "Beds Used:         {}/{}", bed_plan.beds_used, beds_label);
    write_selection(&mut out, &result.bed_selection);

    out
}

fn write_selection(out: &mut String, patients: &[Patient]) {
    if patients.is_empty() {
        let _ = writeln!(out, "No patients selected.");
    } else {
        out.push_str(&render_patients(patients));
    }
}

/// 取樣欄位索引
///
/// 最後一欄的容量超過 `sample_threshold` 時，每隔 `max(1, T / max_sampled_columns)`
/// 取一欄，並保證包含最後一欄。
pub fn sampled_column_indices(column_count: usize, display: &DisplayConfig) -> Vec<usize> {
    if column_count == 0 {
        return Vec::new();
    }

    let last = column_count - 1;
    if last <= display.sample_threshold {
        return (0..column_count).collect();
    }

    let step = (last / display.max_sampled_columns.max(1)).max(1);
    let mut indices: Vec<usize> = (0..=last).step_by(step).collect();
    if indices.last() != Some(&last) {
        indices.push(last);
    }
    indices
}

/// DP 表格（時間欄位過多時取樣顯示）
pub fn render_dp_table(dp: &DpTable, display: &DisplayConfig) -> String {
    let indices = sampled_column_indices(dp.column_count(), display);

    let headers = std::iter::once(String::new())
        .chain(indices.iter().map(|&c| dp.column_labels[c].clone()));
    let mut table = TextTable::new(headers);

    for (label, row) in dp.row_labels.iter().zip(&dp.cells) {
        let cells = std::iter::once(label.clone())
            .chain(indices.iter().map(|&c| row[c].to_string()));
        table.push_row(cells);
    }

    let mut out = String::new();
    if indices.len() < dp.column_count() {
        let _ = writeln!(
            out,
            "Showing {} of {} columns (sampled). Full range: {}..{}",
            indices.len(),
            dp.column_count(),
            dp.column_labels.first().map(String::as_str).unwrap_or(""),
            dp.column_labels.last().map(String::as_str).unwrap_or("")
        );
    }
    out.push_str(&table.render());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn triad() -> Vec<Patient> {
        vec![
            Patient::new(1, "Ahmed", "Cardiac Arrest", 90, 30),
            Patient::new(2, "Mostafa", "Severe Bleeding", 70, 20),
            Patient::new(3, "Yasmine", "Broken Bone", 40, 30),
        ]
    }

    #[test]
    fn test_render_patients() {
        let rendered = render_patients(&triad());
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("ID | Name"));
        assert!(lines[0].ends_with("Treatment Time (steps)"));
        assert!(lines[2].contains("Cardiac Arrest"));
    }

    #[rstest]
    #[case(11, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10])]
    #[case(31, (0..=30).collect())]
    fn test_small_tables_not_sampled(#[case] columns: usize, #[case] expected: Vec<usize>) {
        assert_eq!(sampled_column_indices(columns, &DisplayConfig::default()), expected);
    }

    #[test]
    fn test_sampling_includes_last_column() {
        // T=60：step = 60 / 25 = 2
        let indices = sampled_column_indices(61, &DisplayConfig::default());
        assert_eq!(indices.len(), 31);
        assert_eq!(indices[1], 2);
        assert_eq!(indices.last(), Some(&60));

        // T=101：step = 4，100 不是最後一欄，需補上 101
        let indices = sampled_column_indices(102, &DisplayConfig::default());
        assert_eq!(indices[1], 4);
        assert_eq!(&indices[indices.len() - 2..], &[100, 101]);
    }

    #[test]
    fn test_render_dp_table_sampled() {
        let result = triage_calc::solve(&triad(), 60, Some(2)).unwrap();
        let rendered = render_dp_table(&result.time_table, &DisplayConfig::default());
        let lines: Vec<_> = rendered.lines().collect();

        assert!(lines[0].starts_with("Showing 31 of 61 columns"));
        assert!(lines[1].contains("T=58 | T=60"));
        assert!(lines.last().unwrap().starts_with("Yasmine (30m, 40s)"));
        assert!(lines.last().unwrap().ends_with("160"));
    }

    #[test]
    fn test_render_bed_table_full() {
        let result = triage_calc::solve(&triad(), 60, Some(2)).unwrap();
        let rendered = render_dp_table(result.bed_table.as_ref().unwrap(), &DisplayConfig::default());
        let lines: Vec<_> = rendered.lines().collect();

        assert!(lines[0].ends_with("B=0 | B=1 | B=2"));
        assert!(lines[2].starts_with("Initial (0)"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_plan_summary() {
        let result = triage_calc::solve(&triad(), 60, Some(1)).unwrap();

        let time_plan = PlanSummary::time_plan(&result);
        assert_eq!(time_plan.selected_patients, 1);
        assert_eq!(time_plan.total_severity, 160);
        assert_eq!(time_plan.time_used, 30);

        let bed_plan = PlanSummary::bed_plan(&result);
        assert_eq!(bed_plan.total_severity, 90);
        assert_eq!(bed_plan.beds_used, 1);

        let rendered = render_plan_summary(&result, 60, Some(1));
        assert!(rendered.contains("Time Used:         30/60 steps"));
        assert!(rendered.contains("Beds Used:         1/1"));
        assert!(rendered.contains("Dropped by bed limit: Mostafa"));
    }

    #[test]
    fn test_plan_summary_without_beds() {
        let result = triage_calc::solve(&[], 60, None).unwrap();
        let rendered = render_plan_summary(&result, 60, None);

        assert!(rendered.contains("Beds Used:         0/-"));
        assert_eq!(rendered.matches("No patients selected.").count(), 2);
    }

    #[test]
    fn test_plan_summary_with_huge_treatment_times() {
        // 兩位病患時間總和超過 u32 範圍
        let patients = vec![
            Patient::new(1, "Ahmed", "Cardiac Arrest", 90, 3_000_000_000),
            Patient::new(2, "Mostafa", "Severe Bleeding", 70, 3_000_000_000),
        ];
        let result = triage_calc::solve(&patients, 10, Some(2)).unwrap();

        let bed_plan = PlanSummary::bed_plan(&result);
        assert_eq!(bed_plan.time_used, 6_000_000_000);

        let rendered = render_plan_summary(&result, 10, Some(2));
        assert!(rendered.contains("Time Used:         0/10 steps"));
        assert!(rendered.contains("Time Used:         6000000000 steps"));
    }
}
