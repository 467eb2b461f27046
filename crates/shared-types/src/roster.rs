use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attendance::{AttendanceStatus, MarkStatus, StatusCounts};
use crate::error::AppError;
use crate::persistence::{AttendanceStore, AttendanceWrite};
use crate::reports::Notice;

/// A student on the marking roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentAttendanceRow {
    pub id: String,
    pub name: String,
    pub roll_number: String,
    pub class_name: String,
    pub status: MarkStatus,
}

impl StudentAttendanceRow {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.roll_number.to_lowercase().contains(needle)
    }
}

/// Roster-wide tallies shown above the marking table.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct RosterStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
}

/// In-memory marking session for one class and subject.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct BulkEditor {
    rows: Vec<StudentAttendanceRow>,
    selected_class: String,
    selected_subject: String,
}

impl BulkEditor {
    pub fn new(rows: Vec<StudentAttendanceRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &[StudentAttendanceRow] {
        &self.rows
    }

    pub fn selected_class(&self) -> &str {
        &self.selected_class
    }

    pub fn selected_subject(&self) -> &str {
        &self.selected_subject
    }

    pub fn select_class(&mut self, class: impl Into<String>) {
        self.selected_class = class.into();
    }

    pub fn select_subject(&mut self, subject: impl Into<String>) {
        self.selected_subject = subject.into();
    }

    /// "Load Students" needs both a class and a subject.
    pub fn can_load(&self) -> bool {
        !self.selected_class.is_empty() && !self.selected_subject.is_empty()
    }

    /// The roster is fixed, so loading only records the request.
    pub fn load(&self) {
        tracing::debug!(
            class = %self.selected_class,
            subject = %self.selected_subject,
            "load students requested"
        );
    }

    /// Returns `false` when no row has `id`.
    pub fn set_status(&mut self, id: &str, status: MarkStatus) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                tracing::debug!(id, status = status.as_str(), "status changed");
                row.status = status;
                true
            }
            None => {
                tracing::debug!(id, "status change for unknown student ignored");
                false
            }
        }
    }

    /// Applies to every row regardless of any active search.
    pub fn set_all_status(&mut self, status: MarkStatus) {
        tracing::info!(rows = self.rows.len(), status = status.as_str(), "bulk status set");
        for row in &mut self.rows {
            row.status = status;
        }
    }

    /// Rows whose name or roll number contains `term`, ignoring case.
    /// The term is matched as typed, surrounding whitespace included.
    pub fn filter(&self, term: &str) -> Vec<&StudentAttendanceRow> {
        let needle = term.to_lowercase();
        self.rows.iter().filter(|row| row.matches(&needle)).collect()
    }

    pub fn stats(&self) -> RosterStats {
        let counts = StatusCounts::tally(self.rows.iter().map(|row| AttendanceStatus::from(row.status)));
        RosterStats {
            total: self.rows.len(),
            present: counts.present,
            absent: counts.absent,
            late: counts.late,
        }
    }

    pub fn to_writes(&self, date: NaiveDate, subject: &str) -> Vec<AttendanceWrite> {
        self.rows
            .iter()
            .map(|row| AttendanceWrite {
                record_id: row.id.clone(),
                date,
                subject: subject.to_string(),
                status: row.status,
            })
            .collect()
    }

    /// Hand every row to `store` and build the confirmation notice.
    pub fn save(&self, store: &dyn AttendanceStore, date: NaiveDate) -> Result<Notice, AppError> {
        let batch = self.to_writes(date, &self.selected_subject);
        let written = store.write_batch(&batch)?;
        tracing::info!(records = written, %date, "attendance saved");
        Ok(Notice {
            title: "Attendance Saved".to_string(),
            description: format!("Attendance has been marked for {} students.", self.rows.len()),
        })
    }
}
