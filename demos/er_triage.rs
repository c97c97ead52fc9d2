//! 急診檢傷完整範例
//!
//! 隨機生成病患情境，執行兩組最佳化並輸出報表

use triage::report::{render_dp_table, render_patients, render_plan_summary};
use triage::{logging, ScenarioGenerator, TriageCalculator, TriageConfig, WaitingRoom};

fn main() -> anyhow::Result<()> {
    logging::init();

    println!("===== ER Triage Optimization Example =====\n");

    // 步驟 1: 約束設定（可用 TRIAGE_CONFIG 指定 JSON 配置）
    println!("[1] Constraint Settings");
    let config = match std::env::var("TRIAGE_CONFIG") {
        Ok(json) => TriageConfig::from_json_str(&json)?,
        Err(_) => TriageConfig::default(),
    };
    println!("    Available Time: {} steps", config.max_time);
    println!("    Available Beds: {:?}\n", config.max_beds);

    // 步驟 2: 生成隨機病患
    println!("[2] Generate Random Patients");
    let mut room = WaitingRoom::new();
    ScenarioGenerator::new().populate(&mut room, config.scenario_size, Some(config.max_time))?;
    tracing::info!("候診室病患 {} 位", room.len());
    println!("{}", render_patients(room.patients()));

    // 步驟 3: 執行檢傷計算
    println!("[3] Run Triage Algorithm");
    let calculator = TriageCalculator::new(config)?;
    let result = calculator.calculate(&room)?;
    let config = calculator.config();
    for message in &result.messages {
        println!("    Note: {}", message);
    }
    println!();

    // 步驟 4: 方案摘要
    println!("[4] Optimized Treatment Plans\n");
    println!("{}", render_plan_summary(&result, config.max_time, config.max_beds));

    // 步驟 5: DP 表格
    println!("[5] Time-Based DP Table");
    println!("{}", render_dp_table(&result.time_table, &config.display));

    println!("[6] Bed-Based DP Table");
    match &result.bed_table {
        Some(table) => println!("{}", render_dp_table(table, &config.display)),
        None => println!("    Bed constraint DP table not available (no bed limit specified).\n"),
    }

    println!("===== Triage Complete =====\n");

    Ok(())
}
