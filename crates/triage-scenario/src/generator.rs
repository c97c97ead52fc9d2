//! 隨機病患生成器

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use triage_core::{Patient, WaitingRoom};

/// 病況範本：嚴重度與治療時間的範圍（含上下限）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionProfile {
    pub name: &'static str,
    pub min_severity: u32,
    pub max_severity: u32,
    pub min_time: u32,
    pub max_time: u32,
}

impl ConditionProfile {
    pub const fn new(
        name: &'static str,
        min_severity: u32,
        max_severity: u32,
        min_time: u32,
        max_time: u32,
    ) -> Self {
        Self {
            name,
            min_severity,
            max_severity,
            min_time,
            max_time,
        }
    }

    /// 依時間預算收斂治療時間範圍，至少為 1 個時間步
    pub fn time_range(&self, budget: Option<u32>) -> (u32, u32) {
        let (mut lo, mut hi) = (self.min_time, self.max_time);
        if let Some(budget) = budget {
            hi = hi.min(budget);
            lo = lo.min(budget);
        }
        (lo.max(1), hi.max(1))
    }
}

/// 內建病況範本
pub const DEFAULT_PROFILES: &[ConditionProfile] = &[
    ConditionProfile::new("Cardiac Arrest", 90, 100, 30, 60),
    ConditionProfile::new("Severe Bleeding", 70, 90, 20, 45),
    ConditionProfile::new("Broken Bone", 40, 60, 30, 90),
    ConditionProfile::new("Mild Fever", 10, 30, 5, 15),
    ConditionProfile::new("Allergic Reaction", 50, 80, 15, 30),
    ConditionProfile::new("Stroke Criteria", 85, 95, 40, 70),
    ConditionProfile::new("Abdominal Pain", 30, 60, 20, 45),
];

/// 內建病患姓名
pub const DEFAULT_NAMES: &[&str] = &[
    "Ahmed",
    "Mostafa",
    "Yasmine",
    "Abd Elhamed",
    "soly",
    "Caroline",
    "Mazen",
    "jennie",
    "Khadija",
    "Mohamed",
    "Khalid",
];

/// 隨機病患生成器
pub struct ScenarioGenerator {
    rng: StdRng,
    profiles: Vec<ConditionProfile>,
    names: Vec<String>,
}

impl ScenarioGenerator {
    /// 以系統亂數來源創建
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// 以固定種子創建（可重現的測試資料）
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            profiles: DEFAULT_PROFILES.to_vec(),
            names: DEFAULT_NAMES.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// 建構器模式：設置病況範本
    pub fn with_profiles(mut self, profiles: Vec<ConditionProfile>) -> Self {
        if !profiles.is_empty() {
            self.profiles = profiles;
        }
        self
    }

    /// 建構器模式：設置姓名清單
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        if !names.is_empty() {
            self.names = names;
        }
        self
    }

    /// 生成 `count` 位病患，編號 1..=count
    ///
    /// 指定 `max_time` 時，治療時間範圍會收斂至時間預算內。
    pub fn generate(&mut self, count: usize, max_time: Option<u32>) -> Vec<Patient> {
        let patients: Vec<Patient> = (1..=count as u32)
            .map(|id| self.generate_one(id, max_time))
            .collect();

        tracing::debug!("生成隨機病患 {} 位（時間預算 {:?}）", patients.len(), max_time);
        patients
    }

    /// 以隨機情境取代候診室內容（編號由候診室計數器重新指派）
    pub fn populate(
        &mut self,
        room: &mut WaitingRoom,
        count: usize,
        max_time: Option<u32>,
    ) -> triage_core::Result<()> {
        let patients = self.generate(count, max_time);
        room.replace_all(patients)
    }

    fn generate_one(&mut self, id: u32, max_time: Option<u32>) -> Patient {
        let profile = *self
            .profiles
            .choose(&mut self.rng)
            .unwrap_or(&DEFAULT_PROFILES[0]);
        let name = self
            .names
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default();

        let severity = self
            .rng
            .gen_range(profile.min_severity..=profile.max_severity);
        let (lo, hi) = profile.time_range(max_time);
        let treatment_time = self.rng.gen_range(lo..=hi);

        Patient::new(id, name, profile.name, severity, treatment_time)
    }
}

impl Default for ScenarioGenerator {
    fn default() -> Self {
        Self::new()
    }
}
