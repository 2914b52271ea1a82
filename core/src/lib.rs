//! # pdfsmith - domain logic for the client-side PDF toolbox
//!
//! Everything in this crate is pure, DOM-free state: the site crate wraps
//! these types in reactive signals and timers, but no browser API is
//! touched here, which keeps the whole model unit-testable on the host.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  FileBatch  │────▶│ ToolSession  │────▶│ placeholder  │
//! │ (validated) │     │ (Idle→Ready→ │     │   download   │
//! │             │     │  Processing→ │     │              │
//! └─────────────┘     │     Done)    │     └──────────────┘
//!        │            └──────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌──────────────┐
//! │  Notifier   │     │ProgressModel │
//! │ (one toast) │     │ (percent +   │
//! │             │     │  estimate)   │
//! └─────────────┘     └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Typed rejection/transition errors (user-facing messages)
//! - [`format`] - Byte-count formatting shared by every size display
//! - [`newsletter`] - Signup validation and the stored record shape
//! - [`notify`] - Single-slot toast state with explicit replacement
//! - [`progress`] - Percent clamping and the time-remaining estimate
//! - [`session`] - Per-tool state machine driving the simulated run
//! - [`theme`] - Light/dark scheme persisted across visits
//! - [`tools`] - Typed tool registry replacing page-name string matching
//! - [`upload`] - File snapshots, validation policy, the ordered batch

// Core state
pub mod error;
pub mod upload;
pub mod progress;
pub mod session;
pub mod notify;

// Site-wide registry
pub mod tools;

// Peripheral features
pub mod newsletter;
pub mod theme;

// Shared helpers
pub mod format;

// =============================================================================
// Re-exports - error types
// =============================================================================

pub use error::{EmailError, RejectReason, SessionError};

// =============================================================================
// Re-exports - upload & progress
// =============================================================================

pub use upload::{
    AcceptOutcome, FileBatch, UploadPolicy, UploadStats, UploadedFile, ALLOWED_MIME_TYPES,
    MAX_FILE_SIZE,
};

pub use progress::{Estimate, ProgressModel};

// =============================================================================
// Re-exports - session & notifications
// =============================================================================

pub use session::{download_filename, Phase, ToolSession, PERCENT_STEPS, PLACEHOLDER_PAYLOAD};

pub use notify::{Notifier, Toast, ToastKind};

// =============================================================================
// Re-exports - registry & peripheral
// =============================================================================

pub use tools::{ToolId, ToolSpec};

pub use newsletter::Subscriber;

pub use theme::Theme;

pub use format::format_size;
