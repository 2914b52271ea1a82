//! Pure state behind the processing progress panel.
//!
//! [`ProgressModel`] mirrors what the panel shows: the file being worked on,
//! the percentage, and the derived time-remaining [`Estimate`]. The fixed
//! step schedule that drives it lives with the session; timers live in the
//! UI layer.

use std::fmt;

use crate::format::format_size;

/// Seconds of estimated work per remaining percentage point.
const SECONDS_PER_PERCENT: f64 = 0.3;

/// File line shown while no run is active.
const IDLE_FILE_LABEL: &str = "Waiting for files...";

/// Size line shown while no run is active.
const IDLE_SIZE_LABEL: &str = "0 MB";

// =============================================================================
// Estimate
// =============================================================================

/// Human-facing remaining-time estimate derived from the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimate {
    /// Nothing has happened yet (0%); the idle text stays up.
    Pending,
    /// Estimated seconds left.
    Remaining(u64),
    /// The run is at 100% and about to complete.
    AlmostDone,
}

impl Estimate {
    /// Estimate for a given percentage: `round((100 - percent) * 0.3)`
    /// seconds, with fixed wording at the endpoints.
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            0 => Estimate::Pending,
            100.. => Estimate::AlmostDone,
            p => {
                let remaining = ((100 - p) as f64 * SECONDS_PER_PERCENT).round() as u64;
                Estimate::Remaining(remaining)
            }
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimate::Pending => write!(f, "Estimating..."),
            Estimate::Remaining(seconds) => write!(f, "{}s remaining", seconds),
            Estimate::AlmostDone => write!(f, "Almost done!"),
        }
    }
}

// =============================================================================
// Model
// =============================================================================

/// The file a progress run reports on.
#[derive(Debug, Clone, PartialEq)]
struct Subject {
    name: String,
    size_bytes: u64,
}

/// Everything the progress panel renders, kept free of timers and DOM.
///
/// Inactive until [`start`](Self::start); percentage always in 0..=100.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressModel {
    subject: Option<Subject>,
    percent: u8,
    active: bool,
}

impl ProgressModel {
    /// Idle model showing the placeholder labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run over the given file: percent back to 0, panel active.
    pub fn start(&mut self, file_name: impl Into<String>, size_bytes: u64) {
        self.subject = Some(Subject {
            name: file_name.into(),
            size_bytes,
        });
        self.percent = 0;
        self.active = true;
    }

    /// Store a new percentage, clamped to [0, 100] and rounded to an integer.
    pub fn update(&mut self, percent: f64) {
        self.percent = percent.clamp(0.0, 100.0).round() as u8;
    }

    /// Force the run to 100%. The panel keeps showing this state for a
    /// short hold before the UI calls [`deactivate`](Self::deactivate).
    pub fn complete(&mut self) {
        self.update(100.0);
    }

    /// Hide the panel without touching the displayed values.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Back to the idle placeholders.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the panel should be shown.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current percentage.
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Percentage readout ("45%").
    pub fn percent_label(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Name of the file being processed, or the idle placeholder.
    pub fn file_label(&self) -> &str {
        self.subject
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or(IDLE_FILE_LABEL)
    }

    /// Formatted size of the file being processed, or the idle placeholder.
    pub fn size_label(&self) -> String {
        match &self.subject {
            Some(subject) => format_size(subject.size_bytes),
            None => IDLE_SIZE_LABEL.to_string(),
        }
    }

    /// Estimate matching the current percentage.
    pub fn estimate(&self) -> Estimate {
        Estimate::for_percent(self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_placeholders() {
        let model = ProgressModel::new();
        assert!(!model.is_active());
        assert_eq!(model.percent(), 0);
        assert_eq!(model.file_label(), "Waiting for files...");
        assert_eq!(model.size_label(), "0 MB");
        assert_eq!(model.estimate().to_string(), "Estimating...");
    }

    #[test]
    fn test_start_shows_the_subject() {
        let mut model = ProgressModel::new();
        model.start("report.pdf", 2_000_000);

        assert!(model.is_active());
        assert_eq!(model.percent(), 0);
        assert_eq!(model.file_label(), "report.pdf");
        assert_eq!(model.size_label(), "1.91 MB");
        assert_eq!(model.estimate(), Estimate::Pending);
    }

    #[test]
    fn test_update_clamps_and_rounds() {
        let mut model = ProgressModel::new();
        model.start("a.pdf", 1);

        model.update(-5.0);
        assert_eq!(model.percent(), 0);
        model.update(33.4);
        assert_eq!(model.percent(), 33);
        model.update(66.6);
        assert_eq!(model.percent(), 67);
        model.update(250.0);
        assert_eq!(model.percent(), 100);
    }

    #[test]
    fn test_estimate_endpoints_use_fixed_wording() {
        assert_eq!(Estimate::for_percent(0).to_string(), "Estimating...");
        assert_eq!(Estimate::for_percent(100).to_string(), "Almost done!");
    }

    #[test]
    fn test_estimate_midpoints() {
        assert_eq!(Estimate::for_percent(50), Estimate::Remaining(15));
        assert_eq!(Estimate::for_percent(10), Estimate::Remaining(27));
        assert_eq!(Estimate::for_percent(90), Estimate::Remaining(3));
        assert_eq!(Estimate::for_percent(50).to_string(), "15s remaining");
    }

    #[test]
    fn test_estimate_rounds_half_up() {
        // 75% left -> 22.5s -> 23; 25% left -> 7.5s -> 8.
        assert_eq!(Estimate::for_percent(25), Estimate::Remaining(23));
        assert_eq!(Estimate::for_percent(75), Estimate::Remaining(8));
    }

    #[test]
    fn test_complete_then_deactivate_keeps_the_values() {
        let mut model = ProgressModel::new();
        model.start("report.pdf", 1_000);
        model.complete();

        assert_eq!(model.percent(), 100);
        assert_eq!(model.estimate(), Estimate::AlmostDone);
        assert!(model.is_active());

        model.deactivate();
        assert!(!model.is_active());
        assert_eq!(model.percent(), 100);
        assert_eq!(model.file_label(), "report.pdf");
    }

    #[test]
    fn test_reset_restores_idle() {
        let mut model = ProgressModel::new();
        model.start("report.pdf", 1_000);
        model.update(60.0);
        model.reset();

        assert_eq!(model, ProgressModel::new());
        assert_eq!(model.file_label(), "Waiting for files...");
    }
}
