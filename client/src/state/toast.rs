//! Toast notification state.
//!
//! Success and error messages from network calls and validation surface here;
//! the `Toasts` component renders whatever is queued.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity of a queued toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible notifications, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a success toast; returns its id for later dismissal.
    pub fn push_success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into())
    }

    /// Queue an error toast; returns its id for later dismissal.
    pub fn push_error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
