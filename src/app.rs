//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{campaigns::CampaignsPage, login::LoginPage, notifications::NotificationsPage};
use crate::state::campaigns::{CampaignsState, RefreshTick};
use crate::state::delete::DeleteState;
use crate::state::editor::EditorState;
use crate::state::notice::NoticeState;
use crate::state::notifications::NotificationsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let campaigns = RwSignal::new(CampaignsState::default());
    let editor = RwSignal::new(EditorState::default());
    let delete = RwSignal::new(DeleteState::default());
    let notice = RwSignal::new(NoticeState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let refresh = RwSignal::new(RefreshTick::default());

    provide_context(campaigns);
    provide_context(editor);
    provide_context(delete);
    provide_context(notice);
    provide_context(notifications);
    provide_context(refresh);

    view! {
        <Stylesheet id="leptos" href="/pkg/mailboard.css"/>
        <Title text="Mailboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=CampaignsPage/>
                <Route path=StaticSegment("notifications") view=NotificationsPage/>
            </Routes>
        </Router>
    }
}
