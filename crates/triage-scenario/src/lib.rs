//! # Triage Scenario
//!
//! 隨機病患情境生成（測試資料與示範用）
//!
//! 只產生 `triage_core::Patient`，不接觸求解器內部。

pub mod generator;

pub use generator::{ConditionProfile, ScenarioGenerator, DEFAULT_NAMES, DEFAULT_PROFILES};
