//! 候診室（會話範圍內的病患登記）

use serde::{Deserialize, Serialize};

use crate::{Patient, PatientId, Result, TriageError};

/// 候診室
///
/// 取代全域可變狀態：由呼叫端持有，以參考傳入求解器。
/// 病患編號單調遞增，移除、清空或整批取代後都不會重複使用。
/// 有效編號為 1 到 `PatientId::MAX - 1`，計數器永遠大於已使用的編號。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "WaitingRoomRecord")]
pub struct WaitingRoom {
    patients: Vec<Patient>,
    next_id: PatientId,
}

/// 反序列化的原始內容，經 `TryFrom` 檢查後才成為候診室
#[derive(Deserialize)]
struct WaitingRoomRecord {
    patients: Vec<Patient>,
    next_id: PatientId,
}

impl Default for WaitingRoom {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitingRoom {
    /// 創建空的候診室
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
            next_id: 1,
        }
    }

    /// 登記新病患，指派下一個編號
    pub fn admit(
        &mut self,
        name: impl Into<String>,
        condition: impl Into<String>,
        severity: u32,
        treatment_time: u32,
    ) -> Result<&Patient> {
        let patient = Patient::new(self.next_id, name, condition, severity, treatment_time);
        patient.validate()?;
        check_id(patient.id)?;

        self.next_id = patient.id + 1;
        self.patients.push(patient);

        Ok(&self.patients[self.patients.len() - 1])
    }

    /// 加入外部建立的病患（編號由呼叫端指派）
    pub fn insert(&mut self, patient: Patient) -> Result<()> {
        patient.validate()?;
        check_id(patient.id)?;

        if self.get(patient.id).is_some() {
            return Err(TriageError::DuplicatePatient(patient.id));
        }

        // check_id 保證 id + 1 不溢位
        self.next_id = self.next_id.max(patient.id + 1);
        self.patients.push(patient);
        Ok(())
    }

    /// 以新的病患清單取代目前內容（例如隨機情境）
    ///
    /// 傳入病患的編號會被忽略，改由候診室計數器重新指派。
    /// 任何一位病患無效時，候診室保持不變。
    pub fn replace_all(&mut self, patients: Vec<Patient>) -> Result<()> {
        let mut room = Self {
            patients: Vec::with_capacity(patients.len()),
            next_id: self.next_id,
        };
        for patient in patients {
            patient.validate()?;
            let id = room.next_id;
            check_id(id)?;

            room.next_id = id + 1;
            room.patients.push(Patient { id, ..patient });
        }

        *self = room;
        Ok(())
    }

    /// 移除病患
    pub fn remove(&mut self, id: PatientId) -> Result<Patient> {
        let index = self
            .patients
            .iter()
            .position(|p| p.id == id)
            .ok_or(TriageError::PatientNotFound(id))?;

        Ok(self.patients.remove(index))
    }

    /// 清空候診室（編號計數器保留）
    pub fn clear(&mut self) {
        self.patients.clear();
    }

    /// 依編號查找病患
    pub fn get(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// 目前病患（登記順序）
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

impl TryFrom<WaitingRoomRecord> for WaitingRoom {
    type Error = TriageError;

    fn try_from(record: WaitingRoomRecord) -> Result<Self> {
        if record.next_id == 0 {
            return Err(TriageError::InconsistentWaitingRoom(
                "編號計數器必須至少為 1".to_string(),
            ));
        }

        let mut room = Self {
            patients: Vec::with_capacity(record.patients.len()),
            next_id: record.next_id,
        };
        for patient in record.patients {
            if patient.id >= record.next_id {
                return Err(TriageError::InconsistentWaitingRoom(format!(
                    "病患編號 {} 不小於計數器 {}",
                    patient.id, record.next_id
                )));
            }
            room.insert(patient)?;
        }

        Ok(room)
    }
}

/// 編號 0 保留不用；`PatientId::MAX` 會使計數器溢位
fn check_id(id: PatientId) -> Result<()> {
    if id == 0 || id == PatientId::MAX {
        return Err(TriageError::InvalidPatientId(id));
    }
    Ok(())
}
