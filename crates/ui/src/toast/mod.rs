//! Toast notifications
//!
//! [`provide_toasts`] installs a [`Toasts`] handle in context at the app
//! root; any component below it calls [`use_toasts`] to raise messages, and
//! the [`crate::components::Toaster`] host renders them.
//!
//! ```rust,ignore
//! let toasts = use_toasts();
//! let id = toasts.loading("Syncing application...");
//! // later
//! toasts.resolve(id, ToastKind::Success, "Synced");
//! ```

mod queue;

use std::time::Duration;

use leptos::prelude::*;

pub use queue::*;

use crate::{ToastConfig, ToastPosition};

/// Copyable handle over the reactive toast queue
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
    position: ToastPosition,
}

impl Toasts {
    pub fn new(config: &ToastConfig) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(config.max_visible)),
            position: config.position,
        }
    }

    pub fn blank(&self, message: impl Into<String>) -> ToastId {
        self.show(ToastKind::Blank, message)
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.show(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.show(ToastKind::Error, message)
    }

    /// Sticky until resolved or dismissed
    pub fn loading(&self, message: impl Into<String>) -> ToastId {
        self.show(ToastKind::Loading, message)
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let message = message.into();
        tracing::debug!(?kind, %message, "Showing toast");

        let mut id = ToastId::default();
        self.queue.update(|queue| id = queue.push(kind, message));

        if let Some(duration) = kind.default_duration() {
            self.dismiss_after(id, 0, duration);
        }
        id
    }

    /// Turn an existing toast (typically a loading one) into another kind
    pub fn resolve(&self, id: ToastId, kind: ToastKind, message: impl Into<String>) {
        let mut resolved = None;
        self.queue.update(|queue| {
            resolved = queue
                .update(id, kind, message)
                .map(|toast| (toast.revision, toast.duration));
        });

        match resolved {
            Some((revision, Some(duration))) => self.dismiss_after(id, revision, duration),
            Some((_, None)) => {}
            None => tracing::debug!(%id, "Resolved toast was already dismissed"),
        }
    }

    pub fn dismiss(&self, id: ToastId) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }

    pub fn clear(&self) {
        self.queue.update(ToastQueue::clear);
    }

    /// Snapshot of visible toasts, oldest first
    pub fn visible(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.iter().cloned().collect())
    }

    pub fn position(&self) -> ToastPosition {
        self.position
    }

    /// Arm a timer for the toast as it stands at `revision`
    fn dismiss_after(&self, id: ToastId, revision: u32, duration: Duration) {
        let queue = self.queue;
        set_timeout(
            move || {
                // The signal is gone once the app unmounts
                let _ = queue.try_update(|queue| queue.expire(id, revision));
            },
            duration,
        );
    }
}

/// Create the app-wide toast handle and put it in context
pub fn provide_toasts(config: &ToastConfig) -> Toasts {
    let toasts = Toasts::new(config);
    provide_context(toasts);
    toasts
}

/// Fetch the toast handle installed by [`provide_toasts`]
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}
