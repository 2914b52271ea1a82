//! The tool catalog: every tool page the site offers, keyed by URL slug.
//!
//! One static table drives the landing-page grid, the router, and the
//! scaffold headline, so a tool exists exactly once and an unknown slug
//! falls through to the not-found view instead of a half-initialized page.

/// Identity of a tool page.
///
/// Declaration order is the display order of the landing grid and the
/// index into [`SPECS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolId {
    Merge,
    Split,
    Compress,
    ConvertToPdf,
    ConvertFromPdf,
    EditSign,
    Security,
    Rotate,
    Scans,
    AddRemove,
    OtherTools,
}

/// Static description of one tool page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub id: ToolId,
    /// URL path segment under `/tools/`.
    pub slug: &'static str,
    /// Card and page headline.
    pub title: &'static str,
    /// One-line description under the headline.
    pub tagline: &'static str,
    /// Font Awesome class for the grid card.
    pub icon: &'static str,
    /// Label of the button that starts a run.
    pub action_label: &'static str,
}

// Must stay aligned with the ToolId declaration order; pinned by a test.
const SPECS: [ToolSpec; 11] = [
    ToolSpec {
        id: ToolId::Merge,
        slug: "merge",
        title: "Merge PDF",
        tagline: "Combine multiple PDFs into a single document",
        icon: "fas fa-object-group",
        action_label: "Merge Files",
    },
    ToolSpec {
        id: ToolId::Split,
        slug: "split",
        title: "Split PDF",
        tagline: "Extract pages or break one PDF into many",
        icon: "fas fa-scissors",
        action_label: "Split File",
    },
    ToolSpec {
        id: ToolId::Compress,
        slug: "compress",
        title: "Compress PDF",
        tagline: "Shrink file size while keeping the quality",
        icon: "fas fa-minimize",
        action_label: "Compress Files",
    },
    ToolSpec {
        id: ToolId::ConvertToPdf,
        slug: "convert-to-pdf",
        title: "Convert to PDF",
        tagline: "Turn images and Office documents into PDFs",
        icon: "fas fa-file-import",
        action_label: "Convert Files",
    },
    ToolSpec {
        id: ToolId::ConvertFromPdf,
        slug: "convert-from-pdf",
        title: "Convert from PDF",
        tagline: "Export PDF pages as images or Office files",
        icon: "fas fa-file-export",
        action_label: "Convert Files",
    },
    ToolSpec {
        id: ToolId::EditSign,
        slug: "edit-sign",
        title: "Edit & Sign",
        tagline: "Annotate, fill out and sign documents",
        icon: "fas fa-pen-nib",
        action_label: "Edit Files",
    },
    ToolSpec {
        id: ToolId::Security,
        slug: "security",
        title: "Protect PDF",
        tagline: "Password-protect and manage permissions",
        icon: "fas fa-lock",
        action_label: "Protect Files",
    },
    ToolSpec {
        id: ToolId::Rotate,
        slug: "rotate",
        title: "Rotate PDF",
        tagline: "Fix page orientation in one click",
        icon: "fas fa-rotate",
        action_label: "Rotate Pages",
    },
    ToolSpec {
        id: ToolId::Scans,
        slug: "scans",
        title: "Scan to PDF",
        tagline: "Clean up scans into crisp PDFs",
        icon: "fas fa-camera",
        action_label: "Process Scans",
    },
    ToolSpec {
        id: ToolId::AddRemove,
        slug: "add-remove",
        title: "Add & Remove Pages",
        tagline: "Insert, reorder or delete pages",
        icon: "fas fa-plus-minus",
        action_label: "Apply Changes",
    },
    ToolSpec {
        id: ToolId::OtherTools,
        slug: "other-tools",
        title: "Other Tools",
        tagline: "Page numbers, watermarks and more",
        icon: "fas fa-toolbox",
        action_label: "Process Files",
    },
];

/// The whole catalog, in display order.
pub fn all() -> &'static [ToolSpec] {
    &SPECS
}

impl ToolId {
    /// Resolve a URL slug. Unknown slugs yield `None`.
    pub fn from_slug(slug: &str) -> Option<ToolId> {
        SPECS.iter().find(|spec| spec.slug == slug).map(|spec| spec.id)
    }

    /// This tool's catalog entry.
    pub fn spec(self) -> &'static ToolSpec {
        &SPECS[self as usize]
    }

    /// URL path segment under `/tools/`.
    pub fn slug(self) -> &'static str {
        self.spec().slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_aligned_with_the_enum() {
        for (index, spec) in all().iter().enumerate() {
            assert_eq!(spec.id as usize, index, "misplaced entry: {:?}", spec.id);
            assert_eq!(spec.id.spec(), spec);
        }
    }

    #[test]
    fn test_every_slug_round_trips() {
        for spec in all() {
            assert_eq!(ToolId::from_slug(spec.slug), Some(spec.id));
        }
    }

    #[test]
    fn test_unknown_slugs_resolve_to_none() {
        assert_eq!(ToolId::from_slug("watermark"), None);
        assert_eq!(ToolId::from_slug(""), None);
        assert_eq!(ToolId::from_slug("MERGE"), None);
    }

    #[test]
    fn test_catalog_has_eleven_distinct_tools() {
        assert_eq!(all().len(), 11);

        let mut slugs: Vec<_> = all().iter().map(|spec| spec.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), 11);
    }

    #[test]
    fn test_specs_are_fully_populated() {
        for spec in all() {
            assert!(!spec.title.is_empty());
            assert!(!spec.tagline.is_empty());
            assert!(spec.icon.starts_with("fas fa-"));
            assert!(!spec.action_label.is_empty());
        }
    }

    #[test]
    fn test_merge_entry() {
        let spec = ToolId::Merge.spec();
        assert_eq!(spec.slug, "merge");
        assert_eq!(spec.title, "Merge PDF");
        assert_eq!(spec.action_label, "Merge Files");
    }
}
