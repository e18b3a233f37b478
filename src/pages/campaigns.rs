//! Campaign history page: list loader plus table, dialogs, and toast.

use leptos::prelude::*;

use crate::components::campaign_table::CampaignTable;
use crate::components::delete_dialog::DeleteDialog;
use crate::components::edit_dialog::EditDialog;
use crate::components::snackbar::Snackbar;
use crate::state::campaigns::{CampaignsState, RefreshTick};

/// Hosts the campaign table and its dialogs.
///
/// The loader runs on mount and again whenever the shared [`RefreshTick`]
/// bumps: loading indicator around the fetch, wholesale list replacement on
/// success, page-level error with an empty list on failure. No retry.
#[component]
pub fn CampaignsPage() -> impl IntoView {
    let campaigns = expect_context::<RwSignal<CampaignsState>>();
    let refresh = expect_context::<RwSignal<RefreshTick>>();

    Effect::new(move || {
        refresh.track();
        campaigns.update(CampaignsState::load_started);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_campaigns().await {
                    Ok(items) => campaigns.update(|c| c.load_succeeded(items)),
                    Err(e) => {
                        leptos::logging::warn!("campaign fetch failed: {e}");
                        campaigns.update(|c| {
                            c.load_failed("Failed to load campaigns. Please try again later.");
                        });
                    }
                }
            });
        }
    });

    view! {
        <div class="campaigns-page">
            {move || {
                let c = campaigns.get();
                if c.loading {
                    view! { <p class="campaigns-page__loading">"Loading campaigns..."</p> }
                        .into_any()
                } else if let Some(err) = c.error.clone() {
                    view! { <p class="campaigns-page__error">{err}</p> }.into_any()
                } else if c.items.is_empty() {
                    view! { <p class="campaigns-page__empty">"No campaigns found."</p> }
                        .into_any()
                } else {
                    view! { <CampaignTable/> }.into_any()
                }
            }}
            <EditDialog/>
            <DeleteDialog/>
            <Snackbar/>
        </div>
    }
}
