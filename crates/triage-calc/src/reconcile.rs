//! 床位上限修正

use triage_core::Patient;

/// 修正結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// 保留的病患
    pub kept: Vec<Patient>,

    /// 被截斷的病患
    pub dropped: Vec<Patient>,
}

/// 床位上限修正器
///
/// 時間方案選中人數超過床位數時，依嚴重度遞減（穩定排序）保留前 B 位。
/// 這是事後截斷而非重新最佳化：結果在「時間 + 床位」雙重限制下不保證最佳。
pub struct Reconciler;

impl Reconciler {
    /// 套用床位上限
    pub fn apply(selection: &[Patient], max_beds: Option<u32>) -> Reconciliation {
        let beds = match max_beds {
            Some(beds) if selection.len() > beds as usize => beds as usize,
            _ => {
                return Reconciliation {
                    kept: selection.to_vec(),
                    dropped: Vec::new(),
                }
            }
        };

        let mut ranked = selection.to_vec();
        ranked.sort_by(|a, b| b.severity.cmp(&a.severity));
        let dropped = ranked.split_off(beds);

        tracing::warn!(
            "時間方案選中 {} 位，超過床位 {}，截斷 {} 位",
            selection.len(),
            beds,
            dropped.len()
        );

        Reconciliation {
            kept: ranked,
            dropped,
        }
    }
}
