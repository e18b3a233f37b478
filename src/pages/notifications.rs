//! Notifications page listing alerts from the campaign service.

use leptos::prelude::*;

use crate::components::notification_item::NotificationItem;
use crate::state::notifications::NotificationsState;

/// Fetches the alert list on mount and renders one row per notification
/// with a running unread count.
#[component]
pub fn NotificationsPage() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    Effect::new(move || {
        notifications.update(NotificationsState::load_started);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_notifications().await {
                    Ok(items) => notifications.update(|n| n.load_succeeded(items)),
                    Err(e) => {
                        leptos::logging::warn!("notification fetch failed: {e}");
                        notifications.update(NotificationsState::load_failed);
                    }
                }
            });
        }
    });

    view! {
        <div class="notifications-page">
            <header class="notifications-page__header">
                <h1>"Notifications"</h1>
                <span class="notifications-page__unread">
                    {move || format!("{} unread", notifications.get().unread_count())}
                </span>
            </header>
            {move || {
                let n = notifications.get();
                if n.loading {
                    view! { <p>"Loading notifications..."</p> }.into_any()
                } else if n.items.is_empty() {
                    view! { <p>"No notifications."</p> }.into_any()
                } else {
                    view! {
                        <div class="notifications-page__list">
                            {n.items
                                .into_iter()
                                .map(|item| view! { <NotificationItem notification=item/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
