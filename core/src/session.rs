//! Per-tool session: the upload batch, the progress model, and the phase
//! machine that ties them together.
//!
//! ```text
//!        add/remove files                begin()
//!   Idle <------------> Ready ----------------------> Processing
//!    ^                    ^                            |       |
//!    |   reset()          |   cancel()                 |       | finish(run)
//!    +--------------------+----------------------------+       v
//!    |                                                        Done
//!    +--------------------------------------------------------+
//!                            reset()
//! ```
//!
//! Processing is simulated: the driver walks [`PERCENT_STEPS`] on a timer
//! and never reads file contents, so there is no failure branch. Every
//! `begin` hands out a fresh run id; `advance`/`finish` ticks carrying a
//! stale id are ignored, which is what makes `cancel` and `reset` safe to
//! call while a run is in flight.

use crate::error::SessionError;
use crate::progress::ProgressModel;
use crate::upload::{AcceptOutcome, FileBatch, UploadStats, UploadedFile};

// =============================================================================
// Constants
// =============================================================================

/// The fixed percentage schedule a simulated run walks through.
pub const PERCENT_STEPS: [u8; 11] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Body of the file offered for download once a run is done.
pub const PLACEHOLDER_PAYLOAD: &str =
    "This is a demo file. In a real implementation, this would be your processed file.";

/// Download name for a finished run, stamped with milliseconds since epoch.
pub fn download_filename(now_ms: u64) -> String {
    format!("processed_{}.pdf", now_ms)
}

// =============================================================================
// Phase machine
// =============================================================================

/// Where a tool session currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No files selected yet.
    #[default]
    Idle,
    /// At least one file selected, nothing running.
    Ready,
    /// A simulated run is in flight.
    Processing,
    /// The run finished; the result panel is up.
    Done,
}

/// State of one tool page.
///
/// Owns the [`FileBatch`] and the [`ProgressModel`]; the UI layer holds this
/// in a signal and supplies the timers.
#[derive(Debug, Clone, Default)]
pub struct ToolSession {
    batch: FileBatch,
    progress: ProgressModel,
    phase: Phase,
    run_id: u64,
}

impl ToolSession {
    /// Fresh session in `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Files currently selected, in acceptance order.
    pub fn files(&self) -> &[UploadedFile] {
        self.batch.files()
    }

    /// Summary statistics over the selected files.
    pub fn stats(&self) -> UploadStats {
        self.batch.stats()
    }

    /// Progress panel state.
    pub fn progress(&self) -> &ProgressModel {
        &self.progress
    }

    // -------------------------------------------------------------------------
    // File list mutations (keep Idle/Ready in step with the list)
    // -------------------------------------------------------------------------

    /// Validate and add candidates; see [`FileBatch::accept`].
    pub fn add_files(&mut self, candidates: Vec<UploadedFile>) -> AcceptOutcome {
        let outcome = self.batch.accept(candidates);
        self.sync_phase();
        outcome
    }

    /// Remove one file by position; out of bounds is a no-op.
    pub fn remove_file(&mut self, position: usize) -> Option<UploadedFile> {
        let removed = self.batch.remove_at(position);
        self.sync_phase();
        removed
    }

    /// Drop every selected file.
    pub fn clear_files(&mut self) {
        self.batch.clear();
        self.sync_phase();
    }

    // -------------------------------------------------------------------------
    // The simulated run
    // -------------------------------------------------------------------------

    /// Start a run over the current batch.
    ///
    /// The first file becomes the displayed subject regardless of how many
    /// are selected. Returns the run id the driver must present on every
    /// subsequent tick.
    pub fn begin(&mut self) -> Result<u64, SessionError> {
        if self.phase == Phase::Processing {
            return Err(SessionError::AlreadyProcessing);
        }
        let (name, size_bytes) = match self.batch.first() {
            Some(file) => (file.name.clone(), file.size_bytes),
            None => return Err(SessionError::NoFiles),
        };

        self.run_id += 1;
        self.phase = Phase::Processing;
        self.progress.start(name, size_bytes);
        Ok(self.run_id)
    }

    /// Whether `run` is the in-flight run.
    pub fn is_current_run(&self, run: u64) -> bool {
        self.run_id == run && self.phase == Phase::Processing
    }

    /// Apply one schedule tick. Stale runs are ignored and report `false`.
    pub fn advance(&mut self, run: u64, percent: u8) -> bool {
        if !self.is_current_run(run) {
            return false;
        }
        self.progress.update(percent as f64);
        true
    }

    /// Conclude the run: force 100% and move to `Done`.
    pub fn finish(&mut self, run: u64) -> bool {
        if !self.is_current_run(run) {
            return false;
        }
        self.progress.complete();
        self.phase = Phase::Done;
        true
    }

    /// Hide the progress panel after the post-completion display hold.
    ///
    /// Only acts if the session still shows the `Done` state of `run`; a
    /// reset or a new run in the meantime makes the timer a no-op.
    pub fn settle(&mut self, run: u64) -> bool {
        if self.run_id != run || self.phase != Phase::Done {
            return false;
        }
        self.progress.deactivate();
        true
    }

    /// Abandon an in-flight run, keeping the selected files.
    ///
    /// Bumping the run id strands the driver's pending ticks.
    pub fn cancel(&mut self) {
        if self.phase != Phase::Processing {
            return;
        }
        self.run_id += 1;
        self.progress.reset();
        self.phase = if self.batch.is_empty() {
            Phase::Idle
        } else {
            Phase::Ready
        };
    }

    /// Back to a pristine `Idle`: no files, idle progress panel.
    pub fn reset(&mut self) {
        self.run_id += 1;
        self.batch.clear();
        self.progress.reset();
        self.phase = Phase::Idle;
    }

    /// Keep Idle/Ready honest after a list mutation. Never touches an
    /// in-flight or finished run.
    fn sync_phase(&mut self) {
        if matches!(self.phase, Phase::Idle | Phase::Ready) {
            self.phase = if self.batch.is_empty() {
                Phase::Idle
            } else {
                Phase::Ready
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str, size: u64) -> UploadedFile {
        UploadedFile::new(name, "application/pdf", size, 0.0)
    }

    fn ready_session() -> ToolSession {
        let mut session = ToolSession::new();
        session.add_files(vec![pdf("report.pdf", 2_000_000)]);
        session
    }

    #[test]
    fn test_phase_follows_the_file_list() {
        let mut session = ToolSession::new();
        assert_eq!(session.phase(), Phase::Idle);

        session.add_files(vec![pdf("a.pdf", 1)]);
        assert_eq!(session.phase(), Phase::Ready);

        session.remove_file(0);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_begin_without_files_is_rejected() {
        let mut session = ToolSession::new();
        let err = session.begin().unwrap_err();
        assert_eq!(err.to_string(), "Please select at least one file");
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_begin_while_processing_is_rejected() {
        let mut session = ready_session();
        session.begin().unwrap();
        assert!(matches!(
            session.begin(),
            Err(SessionError::AlreadyProcessing)
        ));
    }

    #[test]
    fn test_run_walks_the_schedule_to_done() {
        let mut session = ready_session();
        let run = session.begin().unwrap();

        assert_eq!(session.phase(), Phase::Processing);
        assert_eq!(session.progress().file_label(), "report.pdf");
        assert_eq!(session.progress().size_label(), "1.91 MB");

        for step in PERCENT_STEPS {
            assert!(session.advance(run, step));
            assert_eq!(session.progress().percent(), step);
        }

        assert!(session.finish(run));
        assert_eq!(session.phase(), Phase::Done);
        assert_eq!(session.progress().percent(), 100);
        assert!(session.progress().is_active());

        assert!(session.settle(run));
        assert!(!session.progress().is_active());
    }

    #[test]
    fn test_cancel_strands_the_old_run_and_keeps_files() {
        let mut session = ready_session();
        let run = session.begin().unwrap();
        session.advance(run, 40);

        session.cancel();
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.files().len(), 1);
        assert_eq!(session.progress().percent(), 0);

        // Ticks from the abandoned driver change nothing.
        assert!(!session.advance(run, 50));
        assert!(!session.finish(run));
        assert_eq!(session.progress().percent(), 0);
        assert_eq!(session.phase(), Phase::Ready);
    }

    #[test]
    fn test_reset_returns_to_pristine_idle() {
        let mut session = ready_session();
        let run = session.begin().unwrap();
        session.finish(run);

        session.reset();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.files().is_empty());
        assert_eq!(session.progress().file_label(), "Waiting for files...");
        assert!(!session.settle(run));
    }

    #[test]
    fn test_new_run_after_done_replaces_the_result() {
        let mut session = ready_session();
        let first = session.begin().unwrap();
        session.finish(first);

        let second = session.begin().unwrap();
        assert_ne!(first, second);
        assert_eq!(session.phase(), Phase::Processing);
        assert_eq!(session.progress().percent(), 0);

        // The stale settle timer from the first run must not hide the panel.
        assert!(!session.settle(first));
        assert!(session.progress().is_active());
    }

    #[test]
    fn test_schedule_shape() {
        assert_eq!(PERCENT_STEPS.len(), 11);
        assert_eq!(PERCENT_STEPS[0], 0);
        assert_eq!(PERCENT_STEPS[10], 100);
        assert!(PERCENT_STEPS.windows(2).all(|w| w[1] == w[0] + 10));
    }

    #[test]
    fn test_download_filename_carries_the_timestamp() {
        assert_eq!(
            download_filename(1_700_000_000_000),
            "processed_1700000000000.pdf"
        );
    }
}
