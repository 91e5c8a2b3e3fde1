//! Transient notification state.
//!
//! DESIGN
//! ======
//! Pages push toasts for simulated actions (OTP sent, login success,
//! validation failures); `components::toaster` renders the stack and
//! `util::toast::notify` schedules browser-side auto-dismissal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual treatment of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    /// A default-styled toast with a fresh id.
    #[must_use]
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_owned(),
            description: description.to_owned(),
            variant: ToastVariant::Default,
        }
    }

    /// A destructive-styled toast for rejections and failures.
    #[must_use]
    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// The visible toast stack, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, toast: Toast) {
        self.items.push(toast);
    }

    /// Remove a toast by id. Unknown ids are ignored (the toast may have
    /// been dismissed by hand before its timer fired).
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }
}
