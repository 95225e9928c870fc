//! Toast model and bounded queue

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

/// Identifies one toast for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Blank,
    Success,
    Error,
    Loading,
}

impl ToastKind {
    /// How long a toast of this kind stays up; `None` means until dismissed
    pub fn default_duration(&self) -> Option<Duration> {
        match self {
            ToastKind::Blank => Some(Duration::from_millis(4000)),
            ToastKind::Success => Some(Duration::from_millis(2000)),
            ToastKind::Error => Some(Duration::from_millis(4000)),
            ToastKind::Loading => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Blank => "",
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Loading => "…",
        }
    }

    /// ARIA role: errors interrupt, everything else is polite
    pub fn role(&self) -> &'static str {
        match self {
            ToastKind::Error => "alert",
            _ => "status",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub duration: Option<Duration>,
    /// Bumped on every in-place update so keyed lists re-render
    pub revision: u32,
}

/// Visible toasts, oldest first, capped at `max_visible`
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    max_visible: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(5)
    }
}

impl ToastQueue {
    /// A cap of zero is treated as one
    pub fn new(max_visible: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 0,
            max_visible: max_visible.max(1),
        }
    }

    /// Append a toast, evicting the oldest past the cap
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        self.toasts.push_back(Toast {
            id,
            kind,
            message: message.into(),
            duration: kind.default_duration(),
            revision: 0,
        });

        while self.toasts.len() > self.max_visible {
            self.toasts.pop_front();
        }

        id
    }

    /// Replace kind and message in place, resetting the duration for the new
    /// kind and bumping the revision. `None` if the toast is gone.
    pub fn update(
        &mut self,
        id: ToastId,
        kind: ToastKind,
        message: impl Into<String>,
    ) -> Option<&Toast> {
        let toast = self.toasts.iter_mut().find(|t| t.id == id)?;
        toast.kind = kind;
        toast.message = message.into();
        toast.duration = kind.default_duration();
        toast.revision += 1;
        Some(&*toast)
    }

    /// Timer expiry: remove the toast only if it is still at `revision`.
    /// Timers armed before an in-place update are stale and do nothing.
    pub fn expire(&mut self, id: ToastId, revision: u32) -> bool {
        let current = self.get(id).map(|toast| toast.revision);
        current == Some(revision) && self.dismiss(id)
    }

    /// Remove a toast; false if it was already gone
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(queue: &ToastQueue) -> Vec<&str> {
        queue.iter().map(|t| t.message.as_str()).collect()
    }

    #[test]
    fn test_push_keeps_order_and_assigns_unique_ids() {
        let mut queue = ToastQueue::new(5);
        let a = queue.push(ToastKind::Blank, "first");
        let b = queue.push(ToastKind::Success, "second");

        assert_ne!(a, b);
        assert_eq!(messages(&queue), vec!["first", "second"]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_push_evicts_oldest_past_cap() {
        let mut queue = ToastQueue::new(2);
        let first = queue.push(ToastKind::Blank, "one");
        queue.push(ToastKind::Blank, "two");
        queue.push(ToastKind::Blank, "three");

        assert_eq!(messages(&queue), vec!["two", "three"]);
        assert!(queue.get(first).is_none());
    }

    #[test]
    fn test_zero_cap_still_shows_latest() {
        let mut queue = ToastQueue::new(0);
        queue.push(ToastKind::Blank, "one");
        queue.push(ToastKind::Blank, "two");

        assert_eq!(queue.max_visible(), 1);
        assert_eq!(messages(&queue), vec!["two"]);
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::new(5);
        let a = queue.push(ToastKind::Blank, "a");
        assert!(queue.dismiss(a));
        let b = queue.push(ToastKind::Blank, "b");

        assert_ne!(a, b);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::new(5);
        let a = queue.push(ToastKind::Blank, "a");
        let b = queue.push(ToastKind::Error, "b");

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(messages(&queue), vec!["b"]);
        assert!(queue.get(b).is_some());
    }

    #[test]
    fn test_default_durations() {
        let mut queue = ToastQueue::default();
        let ok = queue.push(ToastKind::Success, "saved");
        let err = queue.push(ToastKind::Error, "failed");
        let busy = queue.push(ToastKind::Loading, "syncing");

        assert_eq!(queue.get(ok).unwrap().duration, Some(Duration::from_secs(2)));
        assert_eq!(queue.get(err).unwrap().duration, Some(Duration::from_secs(4)));
        assert_eq!(queue.get(busy).unwrap().duration, None);
    }

    #[test]
    fn test_update_resolves_loading_in_place() {
        let mut queue = ToastQueue::new(5);
        queue.push(ToastKind::Blank, "before");
        let id = queue.push(ToastKind::Loading, "syncing");
        queue.push(ToastKind::Blank, "after");

        let updated = queue.update(id, ToastKind::Success, "synced").unwrap();
        assert_eq!(updated.duration, Some(Duration::from_secs(2)));

        let toast = queue.get(id).unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "synced");
        assert_eq!(toast.revision, 1);
        assert_eq!(messages(&queue), vec!["before", "synced", "after"]);
    }

    #[test]
    fn test_update_missing_toast() {
        let mut queue = ToastQueue::new(5);
        let id = queue.push(ToastKind::Loading, "syncing");
        queue.dismiss(id);

        assert!(queue.update(id, ToastKind::Success, "done").is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_stale_timer_keeps_toast_resolved_to_loading() {
        let mut queue = ToastQueue::new(5);
        let id = queue.push(ToastKind::Error, "sync failed");
        let armed_at = queue.get(id).unwrap().revision;

        let updated = queue.update(id, ToastKind::Loading, "retrying").unwrap();
        assert_eq!(updated.duration, None);

        // The error timer fires after the toast became sticky
        assert!(!queue.expire(id, armed_at));
        assert_eq!(queue.get(id).unwrap().kind, ToastKind::Loading);
    }

    #[test]
    fn test_stale_timer_does_not_shorten_resolved_toast() {
        let mut queue = ToastQueue::new(5);
        let id = queue.push(ToastKind::Success, "saved");
        let success_timer = queue.get(id).unwrap().revision;
        let error_timer = queue.update(id, ToastKind::Error, "save failed").unwrap().revision;

        assert!(!queue.expire(id, success_timer));
        assert!(queue.get(id).is_some());

        assert!(queue.expire(id, error_timer));
        assert!(queue.get(id).is_none());
        assert!(!queue.expire(id, error_timer));
    }

    #[test]
    fn test_clear() {
        let mut queue = ToastQueue::new(5);
        queue.push(ToastKind::Blank, "a");
        queue.push(ToastKind::Blank, "b");
        queue.clear();

        assert!(queue.is_empty());
    }

    #[test]
    fn test_kind_roles() {
        assert_eq!(ToastKind::Error.role(), "alert");
        assert_eq!(ToastKind::Success.role(), "status");
        assert_eq!(ToastId::default().to_string(), "toast-0");
    }
}
