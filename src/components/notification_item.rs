//! One row in the notifications list.

use leptos::prelude::*;

use crate::net::types::{Notification, NotificationKind};
use crate::state::notifications::NotificationsState;

/// A single alert: kind marker, message, campaign name, and the raw
/// `updated_at` string. Clicking marks it read via the alerts service.
#[component]
pub fn NotificationItem(notification: Notification) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    let kind_class = match notification.kind {
        NotificationKind::Info => "notification notification--info",
        NotificationKind::Warning => "notification notification--warning",
        NotificationKind::Error => "notification notification--error",
    };
    let unread = !notification.read;
    let id = notification.id.clone();

    let on_click = move |_| {
        let id = id.clone();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::mark_notification_read(&id).await {
                    Ok(()) => notifications.update(|n| n.mark_read(&id)),
                    Err(e) => leptos::logging::warn!("mark-read failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, notifications);
        }
    };

    view! {
        <div class=kind_class class:notification--unread=unread on:click=on_click>
            <span class="notification__message">{notification.message.clone()}</span>
            <span class="notification__campaign">{notification.campaign_name.clone()}</span>
            <span class="notification__time">{notification.updated_at.clone()}</span>
        </div>
    }
}
