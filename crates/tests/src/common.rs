use std::cell::RefCell;

use shared_types::{
    AppError, AttendanceDataProvider, AttendanceStore, AttendanceWrite, BulkEditor,
    MockDataProvider, Role, User,
};

/// A session user for the given role.
pub fn user(role: Role) -> User {
    User {
        name: format!("Test {}", role.display_name()),
        role,
        id: format!("{}_001", role.as_str()),
    }
}

/// Bulk editor seeded with the demo roster.
pub fn seeded_editor() -> BulkEditor {
    BulkEditor::new(MockDataProvider.roster())
}

/// Store that keeps every batch it receives.
#[derive(Default)]
pub struct RecordingStore {
    pub batches: RefCell<Vec<Vec<AttendanceWrite>>>,
}

impl AttendanceStore for RecordingStore {
    fn write_batch(&self, batch: &[AttendanceWrite]) -> Result<usize, AppError> {
        self.batches.borrow_mut().push(batch.to_vec());
        Ok(batch.len())
    }
}

/// Store that rejects everything.
pub struct RejectingStore;

impl AttendanceStore for RejectingStore {
    fn write_batch(&self, _batch: &[AttendanceWrite]) -> Result<usize, AppError> {
        Err(AppError::persistence("store offline"))
    }
}
