//! 病患模型

use serde::{Deserialize, Serialize};

use crate::{Result, TriageError};

/// 病患編號（正整數，建立時指派，不重複使用）
pub type PatientId = u32;

/// 嚴重度下限
pub const MIN_SEVERITY: u32 = 1;

/// 嚴重度上限
pub const MAX_SEVERITY: u32 = 100;

/// 病患
///
/// - `severity` 是背包問題中的價值
/// - `treatment_time` 是背包問題中的重量（離散時間步）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Patient {
    /// 病患編號
    pub id: PatientId,

    /// 姓名
    pub name: String,

    /// 病況
    pub condition: String,

    /// 嚴重度（1-100）
    pub severity: u32,

    /// 治療時間（時間步）
    pub treatment_time: u32,
}

impl Patient {
    /// 創建新的病患記錄
    ///
    /// 不做範圍檢查；進入求解器之前呼叫 [`Patient::validate`]。
    pub fn new(
        id: PatientId,
        name: impl Into<String>,
        condition: impl Into<String>,
        severity: u32,
        treatment_time: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            condition: condition.into(),
            severity,
            treatment_time,
        }
    }

    /// 檢查數值範圍
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&self.severity) {
            return Err(TriageError::InvalidSeverity {
                patient_id: self.id,
                severity: self.severity,
            });
        }

        if self.treatment_time == 0 {
            return Err(TriageError::InvalidTreatmentTime {
                patient_id: self.id,
                treatment_time: self.treatment_time,
            });
        }

        Ok(())
    }

    /// DP 表格列標籤，例如 `Ahmed (30m, 90s)`
    pub fn descriptor(&self) -> String {
        format!(
            "{} ({}m, {}s)",
            self.name, self.treatment_time, self.severity
        )
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Patient({}, Sev={}, Time={})",
            self.name, self.severity, self.treatment_time
        )
    }
}
