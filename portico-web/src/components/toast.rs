use crate::models::toast_state::ToastState;
use yew::{Html, function_component, html};
use yewdux::prelude::use_store;

/// Renders the transient notification queue in a fixed corner.
///
/// Entries are added through `toast_state::push_error` / `push_info`
/// and remove themselves on a timer; this component only mirrors the
/// store.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let (state, _) = use_store::<ToastState>();

    if state.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="toast toast-end z-50">
            { for state.toasts.iter().map(|toast| {
                let class = if toast.is_error { "alert alert-error" } else { "alert alert-success" };
                html! {
                    <div key={toast.id} class={class}>
                        <span>{toast.message.clone()}</span>
                    </div>
                }
            }) }
        </div>
    }
}
