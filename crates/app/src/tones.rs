//! Maps attendance states onto widget tones.

use shared_types::{AttendanceBand, AttendanceStatus, MarkStatus, Severity, TrendLevel};
use shared_ui::Tone;

pub fn status_tone(status: AttendanceStatus) -> Tone {
    match status {
        AttendanceStatus::Present => Tone::Success,
        AttendanceStatus::Absent => Tone::Danger,
        AttendanceStatus::Late => Tone::Warning,
        AttendanceStatus::Leave => Tone::Info,
    }
}

pub fn mark_tone(status: MarkStatus) -> Tone {
    status_tone(status.into())
}

pub fn band_tone(band: AttendanceBand) -> Tone {
    status_tone(band.tone())
}

pub fn trend_tone(level: TrendLevel) -> Tone {
    status_tone(level.tone())
}

pub fn severity_tone(severity: Severity) -> Tone {
    status_tone(severity.tone())
}

/// Colour for a plain percentage: at or above the minimum is healthy.
pub fn percentage_tone(percentage: u32) -> Tone {
    if shared_types::meets_minimum(percentage) {
        Tone::Success
    } else {
        Tone::Danger
    }
}
