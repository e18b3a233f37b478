//! Transient toast shared by the edit and launch flows.

use leptos::prelude::*;

use crate::state::notice::{NoticeState, Severity};

/// Renders the shared notice and auto-dismisses it after a fixed duration.
///
/// Dismissal hides the toast but keeps the last message in state; a newer
/// notice cancels the pending timer by virtue of the message comparison.
#[component]
pub fn Snackbar() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    Effect::new(move || {
        let current = notice.get();
        if !current.visible {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let message = current.message.clone();
            leptos::task::spawn_local(async move {
                use crate::state::notice::AUTO_DISMISS_MS;
                gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_DISMISS_MS)).await;
                notice.update(|n| {
                    if n.visible && n.message == message {
                        n.dismiss();
                    }
                });
            });
        }
    });

    let severity_class = move || match notice.get().severity {
        Severity::Success => "snackbar snackbar--success",
        Severity::Error => "snackbar snackbar--error",
    };

    view! {
        <Show when=move || notice.get().visible>
            <div class=severity_class>
                <span class="snackbar__message">{move || notice.get().message.clone()}</span>
                <button
                    class="snackbar__close"
                    on:click=move |_| notice.update(NoticeState::dismiss)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
