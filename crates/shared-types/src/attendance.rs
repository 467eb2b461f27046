use serde::{Deserialize, Serialize};

/// Attendance outcome for a single day or class session.
///
/// `Leave` only appears in calendar records; the bulk editor works with
/// the narrower [`MarkStatus`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Leave,
}

/// All calendar statuses in legend order.
pub const ALL_STATUSES: &[AttendanceStatus] = &[
    AttendanceStatus::Present,
    AttendanceStatus::Absent,
    AttendanceStatus::Late,
    AttendanceStatus::Leave,
];

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Leave => "leave",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Leave => "Leave",
        }
    }

    /// Single-letter legend code. Leave is "V" (vacation) so it does not
    /// collide with Late.
    pub fn legend_code(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "P",
            AttendanceStatus::Absent => "A",
            AttendanceStatus::Late => "L",
            AttendanceStatus::Leave => "V",
        }
    }

    /// Parse a status key; unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "present" => Some(AttendanceStatus::Present),
            "absent" => Some(AttendanceStatus::Absent),
            "late" => Some(AttendanceStatus::Late),
            "leave" => Some(AttendanceStatus::Leave),
            _ => None,
        }
    }
}

/// Status a teacher can assign in the bulk editor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarkStatus {
    #[default]
    Present,
    Absent,
    Late,
}

/// Bulk editor buttons in display order.
pub const ALL_MARK_STATUSES: &[MarkStatus] = &[MarkStatus::Present, MarkStatus::Absent, MarkStatus::Late];

impl MarkStatus {
    pub fn as_str(&self) -> &'static str {
        AttendanceStatus::from(*self).as_str()
    }

    pub fn label(&self) -> &'static str {
        AttendanceStatus::from(*self).label()
    }
}

impl From<MarkStatus> for AttendanceStatus {
    fn from(status: MarkStatus) -> Self {
        match status {
            MarkStatus::Present => AttendanceStatus::Present,
            MarkStatus::Absent => AttendanceStatus::Absent,
            MarkStatus::Late => AttendanceStatus::Late,
        }
    }
}

/// Per-status tallies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub leave: usize,
}

impl StatusCounts {
    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = AttendanceStatus>,
    {
        let mut counts = StatusCounts::default();
        for status in statuses {
            counts.record(status);
        }
        counts
    }

    pub fn record(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Leave => self.leave += 1,
        }
    }

    pub fn get(&self, status: AttendanceStatus) -> usize {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::Late => self.late,
            AttendanceStatus::Leave => self.leave,
        }
    }

    pub fn total(&self) -> usize {
        self.present + self.absent + self.late + self.leave
    }
}

/// `round(part / whole * 100)`, or 0 when `whole` is zero.
pub fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}
