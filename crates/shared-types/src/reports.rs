use serde::{Deserialize, Serialize};

use crate::attendance::AttendanceStatus;

/// Class/subject performance level used by the reports view.
///
/// Cut points differ from the student dashboard's
/// [`AttendanceBand`](crate::dashboard::AttendanceBand); the two tables are
/// kept separate on purpose.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrendLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl TrendLevel {
    /// `>=90` Excellent, `>=80` Good, `>=75` Fair, otherwise Poor.
    pub fn for_attendance(attendance: f64) -> Self {
        if attendance >= 90.0 {
            TrendLevel::Excellent
        } else if attendance >= 80.0 {
            TrendLevel::Good
        } else if attendance >= 75.0 {
            TrendLevel::Fair
        } else {
            TrendLevel::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendLevel::Excellent => "Excellent",
            TrendLevel::Good => "Good",
            TrendLevel::Fair => "Fair",
            TrendLevel::Poor => "Poor",
        }
    }

    pub fn tone(&self) -> AttendanceStatus {
        match self {
            TrendLevel::Excellent => AttendanceStatus::Present,
            TrendLevel::Good => AttendanceStatus::Leave,
            TrendLevel::Fair => AttendanceStatus::Late,
            TrendLevel::Poor => AttendanceStatus::Absent,
        }
    }

    pub fn is_rising(&self) -> bool {
        matches!(self, TrendLevel::Excellent | TrendLevel::Good)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

impl Severity {
    /// Unknown strings are treated as warnings.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "critical" => Severity::Critical,
            _ => Severity::Warning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
        }
    }

    pub fn tone(&self) -> AttendanceStatus {
        match self {
            Severity::Critical => AttendanceStatus::Absent,
            Severity::Warning => AttendanceStatus::Late,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    pub total_students: u32,
    pub average_attendance: f64,
    pub total_classes: u32,
    /// Students below 75%.
    pub low_attendance_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassReport {
    pub class_name: String,
    pub students: u32,
    pub attendance: f64,
    pub trend: TrendDirection,
}

impl ClassReport {
    pub fn level(&self) -> TrendLevel {
        TrendLevel::for_attendance(self.attendance)
    }

    /// First token of the class name, e.g. "10th" for "10th A".
    pub fn short_label(&self) -> &str {
        self.class_name.split_whitespace().next().unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectReport {
    pub subject: String,
    pub attendance: f64,
    pub classes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LowAttendanceStudent {
    pub name: String,
    pub class_name: String,
    pub attendance: u32,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSnapshot {
    pub summary: ReportSummary,
    pub class_wise: Vec<ClassReport>,
    pub subject_wise: Vec<SubjectReport>,
    pub low_attendance: Vec<LowAttendanceStudent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

/// Selections made in the report filter card.
///
/// Collected but not applied: the report dataset is shown unfiltered
/// whatever the selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportFilterState {
    pub date_range: DateRange,
    pub selected_class: String,
    pub selected_subject: String,
    pub report_type: String,
}

impl ReportFilterState {
    pub fn is_empty(&self) -> bool {
        *self == ReportFilterState::default()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Excel,
}

/// Title and body of a user-visible notice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Excel => "excel",
        }
    }

    /// Confirmation for the generate button. No file is produced.
    pub fn generated_notice(&self) -> Notice {
        tracing::info!(format = self.as_str(), "report generation requested");
        Notice {
            title: format!("{} Report Generated", self.as_str().to_uppercase()),
            description: "Your attendance report has been generated and will download shortly."
                .to_string(),
        }
    }
}
