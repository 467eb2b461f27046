use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attendance::MarkStatus;
use crate::error::AppError;

/// One student's mark for one date and subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceWrite {
    pub record_id: String,
    pub date: NaiveDate,
    pub subject: String,
    pub status: MarkStatus,
}

/// Destination for submitted attendance.
pub trait AttendanceStore {
    /// Persist a batch. Returns the number of records written.
    fn write_batch(&self, batch: &[AttendanceWrite]) -> Result<usize, AppError>;
}

/// Accepts every batch and keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAttendanceStore;

impl AttendanceStore for NoopAttendanceStore {
    fn write_batch(&self, batch: &[AttendanceWrite]) -> Result<usize, AppError> {
        tracing::info!(records = batch.len(), "attendance batch accepted (not persisted)");
        Ok(batch.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_store_reports_batch_size() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 22).unwrap();
        let batch: Vec<AttendanceWrite> = ["1", "2"]
            .iter()
            .map(|id| AttendanceWrite {
                record_id: id.to_string(),
                date,
                subject: "math".into(),
                status: MarkStatus::Present,
            })
            .collect();
        assert_eq!(NoopAttendanceStore.write_batch(&batch).unwrap(), 2);
        assert_eq!(NoopAttendanceStore.write_batch(&[]).unwrap(), 0);
    }
}
