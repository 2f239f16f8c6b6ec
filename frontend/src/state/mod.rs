pub mod delete;
pub mod form;
pub mod load;
pub mod notify;
pub mod request;

pub use delete::DeleteFlow;
pub use form::{FieldErrors, Form, FormField, FormState, FormStatus};
pub use load::LoadState;
pub use notify::{
    provide_toasts, use_notifier, use_toasts, Notification, NotificationLevel, Notifier, ToastCenter,
};
pub use request::{RequestToken, RequestTokens};
