//! File snapshots, the validation policy, and the ordered upload batch.
//!
//! The uploader never reads file *contents* - a [`UploadedFile`] is the
//! metadata snapshot taken from the browser's `File` object at accept time,
//! and that is all the simulated pipeline ever looks at.
//!
//! # Validation
//!
//! [`UploadPolicy`] holds the static rules (allowed mime types, 50 MiB size
//! cap). [`FileBatch::accept`] checks every candidate against the policy,
//! collects one [`RejectReason`] per offending file, and appends the rest in
//! input order - a bad file never short-circuits the batch.

use crate::error::RejectReason;
use crate::format::format_size;

// =============================================================================
// Constants
// =============================================================================

/// Mime type of PDF documents, special-cased in stats and page estimates.
pub const MIME_PDF: &str = "application/pdf";

/// The mime types the uploader accepts.
pub const ALLOWED_MIME_TYPES: [&str; 11] = [
    MIME_PDF,
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
];

/// Maximum accepted file size (50 MiB).
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Rough bytes-per-page divisor behind the PDF page estimate.
const BYTES_PER_PAGE: f64 = 50_000.0;

// =============================================================================
// File snapshot
// =============================================================================

/// Immutable snapshot of a user-selected file.
///
/// Owned exclusively by the [`FileBatch`] while present; consumers only see
/// clones.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    /// File name as reported by the browser.
    pub name: String,
    /// Mime type as reported by the browser (may be empty).
    pub mime_type: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Last-modified time, milliseconds since the Unix epoch.
    pub last_modified_ms: f64,
}

impl UploadedFile {
    /// Build a snapshot from the raw values a `web_sys::File` exposes.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
        last_modified_ms: f64,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            last_modified_ms,
        }
    }

    /// Whether this snapshot is a PDF document.
    pub fn is_pdf(&self) -> bool {
        self.mime_type == MIME_PDF
    }

    /// Estimated page count for PDFs: `max(1, round(size / 50000))`.
    ///
    /// `None` for anything that is not a PDF (rendered as "N/A").
    pub fn estimated_pages(&self) -> Option<u64> {
        if !self.is_pdf() {
            return None;
        }
        let estimate = (self.size_bytes as f64 / BYTES_PER_PAGE).round() as u64;
        Some(estimate.max(1))
    }

    /// Formatted size for display.
    pub fn size_label(&self) -> String {
        format_size(self.size_bytes)
    }
}

/// Display name for a mime type ("PDF", "JPEG Image", ...), defaulting to
/// "Document" for anything unrecognized.
pub fn type_label(mime_type: &str) -> &'static str {
    match mime_type {
        "application/pdf" => "PDF",
        "image/jpeg" => "JPEG Image",
        "image/png" => "PNG Image",
        "image/gif" => "GIF Image",
        "image/webp" => "WebP Image",
        "application/msword"
        | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
            "Word Document"
        }
        "application/vnd.ms-excel"
        | "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
            "Excel Spreadsheet"
        }
        "application/vnd.ms-powerpoint"
        | "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
            "PowerPoint"
        }
        _ => "Document",
    }
}

/// Font Awesome icon class for a mime type.
pub fn icon_class(mime_type: &str) -> &'static str {
    match mime_type {
        "application/pdf" => "fas fa-file-pdf",
        "image/jpeg" | "image/png" | "image/gif" | "image/webp" => "fas fa-file-image",
        "application/msword"
        | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
            "fas fa-file-word"
        }
        "application/vnd.ms-excel"
        | "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
            "fas fa-file-excel"
        }
        "application/vnd.ms-powerpoint"
        | "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
            "fas fa-file-powerpoint"
        }
        _ => "fas fa-file",
    }
}

// =============================================================================
// Validation policy
// =============================================================================

/// Static validation configuration: allowed mime types plus a size cap.
///
/// Built once per uploader and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Accepted mime types.
    pub allowed_mime_types: &'static [&'static str],
    /// Maximum size in bytes.
    pub max_size_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            allowed_mime_types: &ALLOWED_MIME_TYPES,
            max_size_bytes: MAX_FILE_SIZE,
        }
    }
}

impl UploadPolicy {
    /// Validate one candidate against the policy.
    pub fn check(&self, file: &UploadedFile) -> Result<(), RejectReason> {
        if !self
            .allowed_mime_types
            .iter()
            .any(|allowed| *allowed == file.mime_type)
        {
            return Err(RejectReason::UnsupportedType {
                name: file.name.clone(),
                mime_type: file.mime_type.clone(),
            });
        }

        if file.size_bytes > self.max_size_bytes {
            return Err(RejectReason::TooLarge {
                name: file.name.clone(),
                max_bytes: self.max_size_bytes,
            });
        }

        Ok(())
    }
}

// =============================================================================
// The batch
// =============================================================================

/// What one [`FileBatch::accept`] call did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptOutcome {
    /// Number of candidates appended to the list.
    pub accepted: usize,
    /// Per-file rejections, in input order.
    pub rejected: Vec<RejectReason>,
}

/// Ordered list of accepted files plus the policy guarding it.
///
/// Insertion order is preserved and duplicates are permitted - the list is
/// exactly the sequence of successful accepts, minus explicit removals.
/// The invariant upheld here: no entry ever failed validation.
#[derive(Debug, Clone, Default)]
pub struct FileBatch {
    files: Vec<UploadedFile>,
    policy: UploadPolicy,
}

impl FileBatch {
    /// Empty batch with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty batch with a custom policy.
    pub fn with_policy(policy: UploadPolicy) -> Self {
        Self {
            files: Vec::new(),
            policy,
        }
    }

    /// Validate and append a set of candidates.
    ///
    /// Rejected candidates are reported in the outcome and skipped;
    /// accepted ones append in input order.
    pub fn accept(&mut self, candidates: Vec<UploadedFile>) -> AcceptOutcome {
        let mut outcome = AcceptOutcome::default();

        for candidate in candidates {
            match self.policy.check(&candidate) {
                Ok(()) => {
                    self.files.push(candidate);
                    outcome.accepted += 1;
                }
                Err(reason) => outcome.rejected.push(reason),
            }
        }

        outcome
    }

    /// Remove the entry at `position`. Out of bounds is a silent no-op.
    pub fn remove_at(&mut self, position: usize) -> Option<UploadedFile> {
        if position < self.files.len() {
            Some(self.files.remove(position))
        } else {
            None
        }
    }

    /// Empty the list unconditionally.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Read-only view of the current list.
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    /// Number of accepted files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The first file, used as the displayed subject of a processing run.
    pub fn first(&self) -> Option<&UploadedFile> {
        self.files.first()
    }

    /// Summary statistics, recomputed in full on every call.
    pub fn stats(&self) -> UploadStats {
        let pdf_count = self.files.iter().filter(|f| f.is_pdf()).count();
        UploadStats {
            files: self.files.len(),
            total_bytes: self.files.iter().map(|f| f.size_bytes).sum(),
            pdf_count,
            other_count: self.files.len() - pdf_count,
        }
    }
}

/// Derived summary shown in the stats strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadStats {
    /// Total number of files.
    pub files: usize,
    /// Combined size in bytes.
    pub total_bytes: u64,
    /// How many entries are PDFs.
    pub pdf_count: usize,
    /// How many entries are anything else.
    pub other_count: usize,
}

impl UploadStats {
    /// Formatted combined size.
    pub fn total_label(&self) -> String {
        format_size(self.total_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str, size: u64) -> UploadedFile {
        UploadedFile::new(name, "application/pdf", size, 0.0)
    }

    fn png(name: &str, size: u64) -> UploadedFile {
        UploadedFile::new(name, "image/png", size, 0.0)
    }

    #[test]
    fn test_accept_appends_in_input_order() {
        let mut batch = FileBatch::new();
        let outcome = batch.accept(vec![pdf("a.pdf", 10), png("b.png", 20), pdf("c.pdf", 30)]);

        assert_eq!(outcome.accepted, 3);
        assert!(outcome.rejected.is_empty());
        let names: Vec<_> = batch.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.png", "c.pdf"]);
    }

    #[test]
    fn test_unsupported_type_rejected_without_short_circuit() {
        let mut batch = FileBatch::new();
        let outcome = batch.accept(vec![
            UploadedFile::new("archive.zip", "application/zip", 100, 0.0),
            pdf("report.pdf", 100),
        ]);

        assert_eq!(outcome.accepted, 1);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(
            outcome.rejected[0].to_string(),
            "File archive.zip is not supported"
        );
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.files()[0].name, "report.pdf");
    }

    #[test]
    fn test_oversized_file_rejected() {
        let mut batch = FileBatch::new();
        let outcome = batch.accept(vec![pdf("huge.pdf", MAX_FILE_SIZE + 1)]);

        assert_eq!(outcome.accepted, 0);
        assert_eq!(
            outcome.rejected[0].to_string(),
            "File huge.pdf is too large (max 50MB)"
        );
        assert!(batch.is_empty());
    }

    #[test]
    fn test_file_at_exact_limit_is_accepted() {
        let mut batch = FileBatch::new();
        let outcome = batch.accept(vec![pdf("limit.pdf", MAX_FILE_SIZE)]);
        assert_eq!(outcome.accepted, 1);
    }

    #[test]
    fn test_duplicates_are_permitted() {
        let mut batch = FileBatch::new();
        batch.accept(vec![pdf("same.pdf", 10)]);
        batch.accept(vec![pdf("same.pdf", 10)]);
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_remove_at_preserves_order_of_the_rest() {
        let mut batch = FileBatch::new();
        batch.accept(vec![pdf("a.pdf", 1), pdf("b.pdf", 2), pdf("c.pdf", 3)]);

        let removed = batch.remove_at(1);
        assert_eq!(removed.map(|f| f.name), Some("b.pdf".to_string()));
        let names: Vec<_> = batch.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "c.pdf"]);
    }

    #[test]
    fn test_remove_at_out_of_bounds_is_a_noop() {
        let mut batch = FileBatch::new();
        batch.accept(vec![pdf("only.pdf", 1)]);

        assert!(batch.remove_at(5).is_none());
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_clear_empties_unconditionally() {
        let mut batch = FileBatch::new();
        batch.accept(vec![pdf("a.pdf", 1), png("b.png", 2)]);
        batch.clear();
        assert!(batch.is_empty());
        assert_eq!(batch.stats().files, 0);
    }

    #[test]
    fn test_stats_for_single_pdf_scenario() {
        // One 2,000,000-byte PDF: 1 file, 1 PDF, 0 other, 40 estimated pages.
        let mut batch = FileBatch::new();
        batch.accept(vec![pdf("report.pdf", 2_000_000)]);

        let stats = batch.stats();
        assert_eq!(stats.files, 1);
        assert_eq!(stats.pdf_count, 1);
        assert_eq!(stats.other_count, 0);
        assert_eq!(stats.total_bytes, 2_000_000);
        assert_eq!(batch.files()[0].estimated_pages(), Some(40));
    }

    #[test]
    fn test_page_estimate_floors_at_one_and_skips_non_pdfs() {
        assert_eq!(pdf("tiny.pdf", 10).estimated_pages(), Some(1));
        assert_eq!(png("photo.png", 2_000_000).estimated_pages(), None);
    }

    #[test]
    fn test_mixed_stats() {
        let mut batch = FileBatch::new();
        batch.accept(vec![pdf("a.pdf", 100), png("b.png", 200), png("c.png", 300)]);

        let stats = batch.stats();
        assert_eq!(stats.files, 3);
        assert_eq!(stats.pdf_count, 1);
        assert_eq!(stats.other_count, 2);
        assert_eq!(stats.total_bytes, 600);
        assert_eq!(stats.total_label(), "600 Bytes");
    }

    #[test]
    fn test_type_labels_and_icons() {
        assert_eq!(type_label("application/pdf"), "PDF");
        assert_eq!(type_label("image/webp"), "WebP Image");
        assert_eq!(type_label("application/vnd.ms-excel"), "Excel Spreadsheet");
        assert_eq!(type_label("text/plain"), "Document");

        assert_eq!(icon_class("application/pdf"), "fas fa-file-pdf");
        assert_eq!(icon_class("image/gif"), "fas fa-file-image");
        assert_eq!(icon_class("application/octet-stream"), "fas fa-file");
    }

    #[test]
    fn test_custom_policy_is_honored() {
        let policy = UploadPolicy {
            allowed_mime_types: &["image/png"],
            max_size_bytes: 100,
        };
        let mut batch = FileBatch::with_policy(policy);

        let outcome = batch.accept(vec![pdf("doc.pdf", 10), png("ok.png", 10), png("big.png", 200)]);
        assert_eq!(outcome.accepted, 1);
        assert_eq!(outcome.rejected.len(), 2);
        assert_eq!(batch.files()[0].name, "ok.png");
    }
}
