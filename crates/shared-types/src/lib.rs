pub mod error;
pub mod config;
pub mod models;

// Attendance domain
pub mod attendance;
pub mod calendar;
pub mod dashboard;
pub mod persistence;
pub mod provider;
pub mod reports;
pub mod roster;

// Shell and navigation
pub mod navigation;
pub mod shell;
pub mod view;

pub use error::*;
pub use config::*;
pub use models::*;

pub use attendance::*;
pub use calendar::*;
pub use dashboard::*;
pub use persistence::*;
pub use provider::*;
pub use reports::*;
pub use roster::*;

pub use navigation::*;
pub use shell::*;
pub use view::*;
