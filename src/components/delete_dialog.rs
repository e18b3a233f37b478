//! Delete-confirmation dialog.

use leptos::prelude::*;

use crate::state::campaigns::CampaignsState;
use crate::state::delete::DeleteState;

/// Static warning plus Cancel/Delete actions.
///
/// On DELETE success the record is removed locally and the dialog closes.
/// On failure the page-level error channel is set (not the toast) and the
/// confirmation stays open.
#[component]
pub fn DeleteDialog() -> impl IntoView {
    let campaigns = expect_context::<RwSignal<CampaignsState>>();
    let delete = expect_context::<RwSignal<DeleteState>>();

    let on_cancel = move |_| delete.update(DeleteState::cancel);

    let on_confirm = move |_| {
        let Some(id) = delete.try_update(DeleteState::begin_delete).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_campaign(&id).await {
                    Ok(()) => {
                        campaigns.update(|c| c.remove(&id));
                        delete.update(DeleteState::close);
                    }
                    Err(e) => {
                        leptos::logging::warn!("campaign delete failed: {e}");
                        campaigns.update(|c| {
                            c.error =
                                Some("Failed to delete campaign. Please try again later.".to_owned());
                        });
                        delete.update(DeleteState::delete_failed);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, campaigns);
        }
    };

    view! {
        <Show when=move || delete.get().is_open()>
            <div class="dialog-backdrop" on:click=on_cancel>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Confirm Delete"</h2>
                    <p>"Are you sure you want to delete this campaign?"</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" on:click=on_confirm>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
