use std::time::Duration;

use leptos::prelude::*;

use super::state::use_page_state;
use crate::view_state::NotificationKind;

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[component]
pub fn Toaster() -> impl IntoView {
    let state = use_page_state();

    // auto-dismiss; a newer toast keeps its own timer since ids differ
    Effect::new(move |_| {
        if let Some(id) = state.toast.with(|t| t.as_ref().map(|t| t.id)) {
            set_timeout(move || state.dismiss_toast(id), TOAST_LIFETIME);
        }
    });

    move || {
        state.toast.get().map(|toast| {
            let id = toast.id;
            let class = match toast.notification.kind {
                NotificationKind::Success => "border-green-500 bg-green-50 text-green-900",
                NotificationKind::Error => "border-red-500 bg-red-50 text-red-900",
                NotificationKind::Info => "border-blue-500 bg-blue-50 text-blue-900",
            };
            view! {
                <div
                    role="status"
                    class=format!("fixed bottom-4 right-4 z-50 max-w-sm rounded-lg border-l-4 p-4 shadow-lg {class}")
                >
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <p class="font-semibold">{toast.notification.title}</p>
                            <p class="text-sm">{toast.notification.message}</p>
                        </div>
                        <button aria-label="Dismiss" on:click=move |_| state.dismiss_toast(id)>
                            "✕"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
