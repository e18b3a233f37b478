//! Modal dialog for editing one campaign record.

use leptos::prelude::*;

use crate::net::types::{Campaign, Column, FieldKind};
use crate::state::campaigns::CampaignsState;
use crate::state::editor::{EditError, EditorState};
use crate::state::notice::NoticeState;

/// One text input per declared column; `id` and `status` are read-only and
/// the list fields edit as comma-separated text.
///
/// Save validates locally first: a validation failure raises an error toast
/// and performs no network call. On PATCH success the locally edited payload
/// replaces the list entry and the dialog closes; on PATCH failure the
/// dialog stays open with the draft intact.
#[component]
pub fn EditDialog() -> impl IntoView {
    let campaigns = expect_context::<RwSignal<CampaignsState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();

    let on_cancel = move |_| editor.update(EditorState::cancel);

    let on_save = move |_| {
        let attempt = editor
            .try_update(EditorState::begin_submit)
            .unwrap_or(Err(EditError::NothingSelected));

        match attempt {
            Err(err) => {
                notice.update(|n| n.show_error(&err.to_string()));
            }
            Ok((id, payload)) => {
                #[cfg(feature = "hydrate")]
                {
                    leptos::task::spawn_local(async move {
                        match crate::net::api::update_campaign(&id, &payload).await {
                            Ok(()) => {
                                // The locally edited payload is the source of
                                // truth, not the server's response body.
                                campaigns.update(|c| c.apply_update(&id, payload.clone()));
                                notice.update(|n| n.show_success("Campaign updated successfully"));
                                editor.update(EditorState::close);
                            }
                            Err(e) => {
                                leptos::logging::warn!("campaign update failed: {e}");
                                notice.update(|n| n.show_error(&e));
                                editor.update(EditorState::submit_failed);
                            }
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (id, payload, campaigns);
                }
            }
        }
    };

    view! {
        <Show when=move || editor.get().is_open()>
            <div class="dialog-backdrop" on:click=on_cancel>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Edit Campaign"</h2>
                    {Campaign::COLUMNS
                        .iter()
                        .map(|&col| {
                            let read_only = col.kind() == FieldKind::ReadOnly;
                            view! {
                                <label class="dialog__label">
                                    {col.label()}
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        readonly=read_only
                                        prop:value=move || editor.get().field(col).unwrap_or_default()
                                        on:input=move |ev| {
                                            editor.update(|e| e.set_field(col, event_target_value(&ev)));
                                        }
                                    />
                                    <Show when=move || col == Column::To>
                                        <span class="dialog__hint">
                                            "Separate multiple email addresses with commas"
                                        </span>
                                    </Show>
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <div class="dialog__actions">
                        <button class="btn" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=on_save>
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
