//! Browser-facing services.
//!
//! This module wraps the web APIs the components lean on:
//!
//! # Services
//!
//! - [`storage`] - localStorage persistence (theme, newsletter list)
//! - [`download`] - file downloads via Blob object URLs
//! - [`observer`] - scroll-reveal animations, smooth anchor scrolling and
//!   the preloader fade

pub mod download;
pub mod observer;
pub mod storage;

pub use download::*;
pub use observer::*;
pub use storage::*;
