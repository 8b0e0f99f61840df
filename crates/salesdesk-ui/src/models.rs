//! Transient notification models.

/// Maximum toasts kept on screen; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;
/// Auto-dismiss delay for every toast.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Mutation succeeded.
    Success,
    /// Mutation or fetch failed.
    Error,
}

impl ToastKind {
    /// CSS modifier class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Toast payload rendered by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message.
    pub message: String,
    /// Severity.
    pub kind: ToastKind,
}

/// Ordered toast queue, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast, evicting the oldest beyond [`MAX_TOASTS`]. Returns its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Toasts on screen.
    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_caps_at_four_keeping_newest() {
        let mut queue = ToastQueue::default();
        for idx in 0..6 {
            queue.push(ToastKind::Info, format!("toast {idx}"));
        }
        let messages: Vec<_> = queue.items().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["toast 2", "toast 3", "toast 4", "toast 5"]);
    }

    #[test]
    fn dismiss_removes_only_matching_id() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Lưu thành công");
        let second = queue.push(ToastKind::Error, "Không thể lưu");
        queue.dismiss(first);
        queue.dismiss(999);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, second);
        assert_eq!(queue.items()[0].kind.class(), "error");
    }
}
