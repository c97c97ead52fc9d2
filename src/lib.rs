//! # Triage
//!
//! 急診資源分配：在時間預算與床位限制下，使服務的嚴重度總和最大
//!
//! ```
//! use triage::{solve, Patient};
//!
//! let patients = vec![
//!     Patient::new(1, "Ahmed", "Cardiac Arrest", 90, 30),
//!     Patient::new(2, "Mostafa", "Severe Bleeding", 70, 20),
//!     Patient::new(3, "Yasmine", "Broken Bone", 40, 30),
//! ];
//!
//! let result = solve(&patients, 60, Some(1)).unwrap();
//! assert_eq!(result.time_value, 160);
//! assert_eq!(result.bed_value, Some(90));
//! ```

pub mod logging;

pub use triage_calc::{solve, DpTable, SolveResult, TriageCalculator};
pub use triage_core::{
    CapacityLimits, DisplayConfig, Patient, PatientId, Result, TriageConfig, TriageError,
    WaitingRoom,
};
pub use triage_scenario::ScenarioGenerator;

pub use triage_calc as calc;
pub use triage_report as report;
pub use triage_scenario as scenario;
