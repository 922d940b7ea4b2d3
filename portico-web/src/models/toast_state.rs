use gloo_timers::callback::Timeout;
use yewdux::Store;
use yewdux::prelude::Dispatch;

/// How long a notification stays up, matching the source console.
const TOAST_MILLIS: u32 = 3000;

/// One transient notification.
#[derive(Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub is_error: bool,
}

/// The queue of visible notifications.
#[derive(Default, Clone, PartialEq, Store)]
pub struct ToastState {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

fn push(dispatch: &Dispatch<ToastState>, message: String, is_error: bool) {
    let mut id = 0;
    dispatch.reduce_mut(|state| {
        id = state.next_id;
        state.next_id = state.next_id.wrapping_add(1);
        state.toasts.push(Toast {
            id,
            message,
            is_error,
        });
    });

    // Auto-dismiss; failures are never sticky and never fatal.
    let dismiss = dispatch.clone();
    Timeout::new(TOAST_MILLIS, move || {
        dismiss.reduce_mut(|state| {
            state.toasts.retain(|toast| toast.id != id);
        });
    })
    .forget();
}

/// Show a transient error notification.
pub fn push_error(dispatch: &Dispatch<ToastState>, message: impl Into<String>) {
    push(dispatch, message.into(), true);
}

/// Show a transient confirmation notification.
pub fn push_info(dispatch: &Dispatch<ToastState>, message: impl Into<String>) {
    push(dispatch, message.into(), false);
}
