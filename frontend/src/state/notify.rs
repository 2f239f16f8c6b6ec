use leptos::*;
use std::rc::Rc;
use uuid::Uuid;

#[cfg(target_arch = "wasm32")]
const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Sink for transient user-facing notifications. Page view-models receive one
/// instead of reaching for a global toast helper.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub notification: Notification,
}

/// Signal-backed toast queue rendered by `components::toast::Toasts`.
#[derive(Clone, Copy)]
pub struct ToastCenter {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn push(&self, notification: Notification) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));
        #[cfg(target_arch = "wasm32")]
        {
            let center = *self;
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
                center.dismiss(id);
            });
        }
        id
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastCenter {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => log::warn!("toast: {}", notification.message),
            NotificationLevel::Success => log::debug!("toast: {}", notification.message),
        }
        self.push(notification);
    }
}

pub fn provide_toasts() -> ToastCenter {
    let center = ToastCenter::new();
    provide_context(center);
    center
}

pub fn use_toasts() -> ToastCenter {
    use_context::<ToastCenter>().unwrap_or_else(provide_toasts)
}

pub fn use_notifier() -> Rc<dyn Notifier> {
    Rc::new(use_toasts())
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn toast_center_queues_and_dismisses() {
        with_runtime(|| {
            let center = ToastCenter::new();
            center.notify(Notification::success("Saved"));
            let id = center.push(Notification::error("Failed"));
            assert_eq!(center.toasts().get_untracked().len(), 2);
            center.dismiss(id);
            let remaining = center.toasts().get_untracked();
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].notification.level, NotificationLevel::Success);
        });
    }
}
