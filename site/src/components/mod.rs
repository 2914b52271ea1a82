//! UI Components for the pdfsmith site.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with theme toggle and mobile menu
//! - [`Hero`] - Landing headline and call to action
//! - [`Footer`] - Page footer with the current year
//!
//! # Landing Components
//! - [`ToolGrid`] - Card grid linking to every tool page
//! - [`FeatureList`] - Feature highlight cards
//! - [`Faq`] - Accordion, one question open at a time
//! - [`NewsletterSignup`] - Email capture backed by localStorage
//!
//! # Tool Components
//! - [`UploadZone`] - File picker with drag & drop and the selection list
//! - [`FilePreview`] - Modal showing the metadata of one selected file
//! - [`ProgressPanel`] - Progress bar, percentage and time estimate
//! - [`ResultPanel`] - Download and reset actions once a run finishes
//!
//! # Overlay Components
//! - [`ToastHost`] - Renders the single active toast

mod header;
mod hero;
mod tool_grid;
mod features;
mod faq;
mod newsletter;
mod footer;
mod upload;
mod preview;
mod progress;
mod result;
mod toast;

pub use header::*;
pub use hero::*;
pub use tool_grid::*;
pub use features::*;
pub use faq::*;
pub use newsletter::*;
pub use footer::*;
pub use upload::*;
pub use preview::*;
pub use progress::*;
pub use result::*;
pub use toast::*;
