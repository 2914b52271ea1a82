//! Error types for the pdfsmith domain logic.
//!
//! Every variant's `Display` output is the exact text shown to the user in
//! a toast, so components can forward errors without rewording them:
//!
//! - [`RejectReason`] - Why the uploader refused a candidate file
//! - [`SessionError`] - Why a tool-session transition was refused
//! - [`EmailError`] - Newsletter signup validation
//!
//! All of these are recoverable by user action; none is fatal.

use thiserror::Error;

// =============================================================================
// Upload rejections
// =============================================================================

/// Why a candidate file was rejected by the upload policy.
///
/// One reason is produced per offending file; validation of the rest of the
/// batch continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectReason {
    /// Mime type is not in the allowed set.
    #[error("File {name} is not supported")]
    UnsupportedType {
        /// File name as reported by the browser.
        name: String,
        /// The offending mime type (kept for logging, not shown).
        mime_type: String,
    },

    /// File exceeds the configured size limit.
    #[error("File {name} is too large (max {}MB)", .max_bytes / (1024 * 1024))]
    TooLarge {
        /// File name as reported by the browser.
        name: String,
        /// The limit that was exceeded, in bytes.
        max_bytes: u64,
    },
}

impl RejectReason {
    /// The name of the file that was rejected.
    pub fn file_name(&self) -> &str {
        match self {
            RejectReason::UnsupportedType { name, .. } => name,
            RejectReason::TooLarge { name, .. } => name,
        }
    }
}

// =============================================================================
// Session transitions
// =============================================================================

/// Refused transitions of the per-tool state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Process was triggered with an empty file list.
    #[error("Please select at least one file")]
    NoFiles,

    /// Process was triggered while a run is already in flight.
    #[error("Processing is already running")]
    AlreadyProcessing,
}

// =============================================================================
// Newsletter
// =============================================================================

/// Newsletter signup validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    /// The submitted address does not look like an email.
    #[error("Please enter a valid email address")]
    Invalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_messages_are_user_facing() {
        let unsupported = RejectReason::UnsupportedType {
            name: "archive.zip".to_string(),
            mime_type: "application/zip".to_string(),
        };
        assert_eq!(unsupported.to_string(), "File archive.zip is not supported");

        let too_large = RejectReason::TooLarge {
            name: "scan.pdf".to_string(),
            max_bytes: 50 * 1024 * 1024,
        };
        assert_eq!(too_large.to_string(), "File scan.pdf is too large (max 50MB)");
    }

    #[test]
    fn test_session_and_email_messages() {
        assert_eq!(SessionError::NoFiles.to_string(), "Please select at least one file");
        assert_eq!(EmailError::Invalid.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_file_name_accessor() {
        let reason = RejectReason::TooLarge {
            name: "big.pdf".to_string(),
            max_bytes: 1,
        };
        assert_eq!(reason.file_name(), "big.pdf");
    }
}
