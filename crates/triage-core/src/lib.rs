//! # Triage Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod patient;
pub mod waiting_room;

// Re-export 主要類型
pub use config::{CapacityLimits, DisplayConfig, TriageConfig};
pub use patient::{Patient, PatientId, MAX_SEVERITY, MIN_SEVERITY};
pub use waiting_room::WaitingRoom;

/// 檢傷錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("病患 {patient_id} 的嚴重度無效: {severity}（必須介於 1 到 100）")]
    InvalidSeverity { patient_id: PatientId, severity: u32 },

    #[error("病患 {patient_id} 的治療時間無效: {treatment_time}（必須至少為 1）")]
    InvalidTreatmentTime {
        patient_id: PatientId,
        treatment_time: u32,
    },

    #[error("找不到病患: {0}")]
    PatientNotFound(PatientId),

    #[error("病患編號重複: {0}")]
    DuplicatePatient(PatientId),

    #[error("無效的病患編號: {0}（必須介於 1 到 {max}）", max = PatientId::MAX - 1)]
    InvalidPatientId(PatientId),

    #[error("候診室狀態不一致: {0}")]
    InconsistentWaitingRoom(String),

    #[error("{name} 超出上限: {value} > {limit}")]
    CapacityExceeded {
        name: &'static str,
        value: u32,
        limit: u32,
    },

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;
