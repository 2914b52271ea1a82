//! Single-slot toast notifications.
//!
//! The site shows at most one toast at a time: pushing a new one replaces
//! whatever is on screen. Each toast gets a fresh id so the auto-dismiss
//! timer of a replaced toast can recognize it is stale and leave the newer
//! toast alone. Timers and the slide-out animation belong to the UI layer.

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier suffix ("notification-info" and friends).
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// One on-screen notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Identity of this toast, unique within the notifier.
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Holds the (at most one) active toast.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    current: Option<Toast>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, replacing any current one. Returns its id for the
    /// dismiss timer.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    /// Clear the active toast, but only if `id` still names it. Stale
    /// timers fall through without touching a newer toast.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match &self.current {
            Some(toast) if toast.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// The toast currently on screen, if any.
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_replaces_the_current_toast() {
        let mut notifier = Notifier::new();
        notifier.info("File removed");
        notifier.success("Added 2 file(s)");

        let current = notifier.current().unwrap();
        assert_eq!(current.kind, ToastKind::Success);
        assert_eq!(current.message, "Added 2 file(s)");
    }

    #[test]
    fn test_ids_are_distinct_across_pushes() {
        let mut notifier = Notifier::new();
        let first = notifier.info("one");
        let second = notifier.info("two");
        assert_ne!(first, second);
    }

    #[test]
    fn test_stale_dismiss_leaves_the_newer_toast() {
        let mut notifier = Notifier::new();
        let old = notifier.info("old");
        notifier.error("new");

        assert!(!notifier.dismiss(old));
        assert_eq!(notifier.current().unwrap().message, "new");
    }

    #[test]
    fn test_matching_dismiss_clears() {
        let mut notifier = Notifier::new();
        let id = notifier.success("Processing complete!");

        assert!(notifier.dismiss(id));
        assert!(notifier.current().is_none());
        assert!(!notifier.dismiss(id));
    }

    #[test]
    fn test_kind_css_suffixes() {
        assert_eq!(ToastKind::Info.as_str(), "info");
        assert_eq!(ToastKind::Success.as_str(), "success");
        assert_eq!(ToastKind::Error.as_str(), "error");
    }
}
