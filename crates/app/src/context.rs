use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{AttendanceDataProvider, AttendanceStore, ShellState};

/// The dataset provider shared by every view.
#[derive(Clone)]
pub struct DataSource(Rc<dyn AttendanceDataProvider>);

impl DataSource {
    pub fn new(provider: impl AttendanceDataProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }
}

impl std::ops::Deref for DataSource {
    type Target = dyn AttendanceDataProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Where submitted attendance goes.
#[derive(Clone)]
pub struct StoreHandle(Rc<dyn AttendanceStore>);

impl StoreHandle {
    pub fn new(store: impl AttendanceStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl std::ops::Deref for StoreHandle {
    type Target = dyn AttendanceStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

pub fn use_shell() -> Signal<ShellState> {
    use_context::<Signal<ShellState>>()
}

pub fn use_data() -> DataSource {
    use_context::<DataSource>()
}

pub fn use_store() -> StoreHandle {
    use_context::<StoreHandle>()
}
