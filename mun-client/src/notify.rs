use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

pub trait Toaster: Send + Sync {
    fn toast(&self, toast: Toast);
}

/// Keeps every toast in order. Useful as the sink for headless frontends and tests.
#[derive(Clone, Default)]
pub struct ToastLog {
    inner: Arc<Mutex<Vec<Toast>>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.lock().last().cloned()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|t| t.kind == ToastKind::Error)
            .map(|t| t.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Toaster for ToastLog {
    fn toast(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Error => log::warn!("toast: {}", toast.message),
            ToastKind::Success => log::info!("toast: {}", toast.message),
        }
        self.lock().push(toast);
    }
}
