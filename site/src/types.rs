//! Shared UI types
//!
//! [`Toasts`] wraps the single-slot [`Notifier`] in reactive signals and
//! owns the timers around it: auto-dismiss after five seconds and the
//! slide-out animation before removal. The handle is `Copy`, so components
//! take it as a plain prop and call `info`/`success`/`error` directly.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use pdfsmith::{Notifier, Toast, ToastKind};

use crate::config::{TOAST_DURATION_MS, TOAST_EXIT_MS};

/// Copyable handle to the toast slot.
#[derive(Clone, Copy)]
pub struct Toasts {
    notifier: RwSignal<Notifier>,
    /// Toast currently playing its exit animation, if any
    leaving: RwSignal<Option<u64>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            notifier: create_rw_signal(Notifier::new()),
            leaving: create_rw_signal(None),
        }
    }

    /// The toast on screen, if any.
    pub fn current(&self) -> Option<Toast> {
        self.notifier.with(|n| n.current().cloned())
    }

    /// Whether the given toast is sliding out.
    pub fn is_leaving(&self, id: u64) -> bool {
        self.leaving.get() == Some(id)
    }

    pub fn info(self, message: impl Into<String>) {
        self.show(ToastKind::Info, message.into());
    }

    pub fn success(self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    /// Dismiss on user request (close button), with the exit animation.
    pub fn dismiss(self, id: u64) {
        spawn_local(async move {
            self.animate_out(id).await;
        });
    }

    fn show(self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.notifier.update(|n| id = n.push(kind, message));
        self.leaving.set(None);
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            self.animate_out(id).await;
        });
    }

    /// Slide the toast out, then drop it. Stale ids (already replaced or
    /// dismissed) fall through without touching a newer toast.
    async fn animate_out(self, id: u64) {
        let showing = self
            .notifier
            .try_with(|n| n.current().map(|t| t.id) == Some(id))
            .unwrap_or(false);
        if !showing {
            return;
        }
        self.leaving.set(Some(id));
        TimeoutFuture::new(TOAST_EXIT_MS).await;
        let _ = self.notifier.try_update(|n| n.dismiss(id));
        let _ = self.leaving.try_update(|leaving| {
            if *leaving == Some(id) {
                *leaving = None;
            }
        });
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
