//! 檢傷配置模型

use serde::{Deserialize, Serialize};

use crate::{Result, TriageError};

/// 約束設定（時間預算與床位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// 可用時間（時間步，含上限）
    pub max_time: u32,

    /// 可用床位（None 表示不限制床位）
    pub max_beds: Option<u32>,

    /// 隨機情境的病患人數
    pub scenario_size: usize,

    /// 主機端輸入上限
    pub limits: CapacityLimits,

    /// 表格顯示設定
    pub display: DisplayConfig,
}

/// 主機端輸入上限
///
/// DP 表格大小為 O(n·T) 與 O(B·n)，求解器本身不設上限，
/// 由主機在呼叫前以此限制輸入。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityLimits {
    /// 時間預算下限
    pub min_time: u32,

    /// 時間預算上限
    pub max_time_limit: u32,

    /// 床位上限
    pub max_beds_limit: u32,
}

/// DP 表格顯示設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// 時間欄位數超過此值時改為取樣顯示
    pub sample_threshold: usize,

    /// 取樣後的目標欄位數
    pub max_sampled_columns: usize,
}

impl TriageConfig {
    /// 創建新的配置
    pub fn new(max_time: u32, max_beds: Option<u32>) -> Self {
        Self {
            max_time,
            max_beds,
            ..Self::default()
        }
    }

    /// 從 JSON 字串載入
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置時間預算
    pub fn with_max_time(mut self, max_time: u32) -> Self {
        self.max_time = max_time;
        self
    }

    /// 建構器模式：設置床位
    pub fn with_max_beds(mut self, max_beds: Option<u32>) -> Self {
        self.max_beds = max_beds;
        self
    }

    /// 建構器模式：設置隨機情境人數
    pub fn with_scenario_size(mut self, size: usize) -> Self {
        self.scenario_size = size;
        self
    }

    /// 建構器模式：設置輸入上限
    pub fn with_limits(mut self, limits: CapacityLimits) -> Self {
        self.limits = limits;
        self
    }

    /// 建構器模式：設置顯示設定
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.limits.min_time > self.limits.max_time_limit {
            return Err(TriageError::InvalidConfig(format!(
                "時間下限 {} 大於上限 {}",
                self.limits.min_time, self.limits.max_time_limit
            )));
        }

        if self.max_time < self.limits.min_time {
            return Err(TriageError::InvalidConfig(format!(
                "可用時間 {} 低於下限 {}",
                self.max_time, self.limits.min_time
            )));
        }

        if self.max_time > self.limits.max_time_limit {
            return Err(TriageError::CapacityExceeded {
                name: "max_time",
                value: self.max_time,
                limit: self.limits.max_time_limit,
            });
        }

        if let Some(beds) = self.max_beds {
            if beds > self.limits.max_beds_limit {
                return Err(TriageError::CapacityExceeded {
                    name: "max_beds",
                    value: beds,
                    limit: self.limits.max_beds_limit,
                });
            }
        }

        if self.display.max_sampled_columns == 0 {
            return Err(TriageError::InvalidConfig(
                "取樣欄位數必須大於 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            max_time: 60,
            max_beds: Some(6),
            scenario_size: 7,
            limits: CapacityLimits::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for CapacityLimits {
    fn default() -> Self {
        Self {
            min_time: 10,
            max_time_limit: 600,
            max_beds_limit: 20,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sample_threshold: 30,
            max_sampled_columns: 25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TriageConfig::default();

        assert_eq!(config.max_time, 60);
        assert_eq!(config.max_beds, Some(6));
        assert_eq!(config.scenario_size, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = TriageConfig::new(120, None)
            .with_scenario_size(12)
            .with_display(DisplayConfig {
                sample_threshold: 50,
                max_sampled_columns: 10,
            });

        assert_eq!(config.max_time, 120);
        assert_eq!(config.max_beds, None);
        assert_eq!(config.scenario_size, 12);
        assert_eq!(config.display.max_sampled_columns, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_capacity_limits() {
        let too_long = TriageConfig::default().with_max_time(10_000);
        assert!(matches!(
            too_long.validate(),
            Err(TriageError::CapacityExceeded { name: "max_time", value: 10_000, limit: 600 })
        ));

        let too_many_beds = TriageConfig::default().with_max_beds(Some(21));
        assert!(matches!(
            too_many_beds.validate(),
            Err(TriageError::CapacityExceeded { name: "max_beds", .. })
        ));

        let too_short = TriageConfig::default().with_max_time(5);
        assert!(matches!(too_short.validate(), Err(TriageError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_json_partial() {
        let config = TriageConfig::from_json_str(r#"{ "max_time": 90, "max_beds": 3 }"#).unwrap();

        assert_eq!(config.max_time, 90);
        assert_eq!(config.max_beds, Some(3));
        assert_eq!(config.limits, CapacityLimits::default());
        assert_eq!(config.display.sample_threshold, 30);
    }

    #[test]
    fn test_from_json_rejects_out_of_range() {
        let result = TriageConfig::from_json_str(r#"{ "max_time": 60, "max_beds": 50 }"#);
        assert!(matches!(result, Err(TriageError::CapacityExceeded { .. })));

        let result = TriageConfig::from_json_str("not json");
        assert!(matches!(result, Err(TriageError::Serialization(_))));
    }
}
