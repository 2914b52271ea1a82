//! Application configuration
//!
//! Timing constants for the simulated processing pipeline and the
//! transient UI states (toasts, theme transition, preloader).

/// Delay between two progress ticks of a processing run (ms)
pub const STEP_INTERVAL_MS: u32 = 200;

/// How long the progress panel stays visible after a run finishes (ms)
pub const PROGRESS_HOLD_MS: u32 = 1500;

/// Lifetime of a toast before it dismisses itself (ms)
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Duration of the toast slide-out animation (ms)
pub const TOAST_EXIT_MS: u32 = 300;

/// Duration of the colour transition when the theme flips (ms)
pub const THEME_TRANSITION_MS: u32 = 300;

/// Fade-out time of the static preloader once the app has mounted (ms)
pub const PRELOADER_FADE_MS: u32 = 300;
