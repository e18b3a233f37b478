//! Paginated campaign table with per-row edit/delete/send actions.

use leptos::prelude::*;

use crate::net::types::Campaign;
use crate::state::campaigns::{CampaignsState, ROWS_PER_PAGE_OPTIONS};
use crate::state::delete::DeleteState;
use crate::state::editor::EditorState;
use crate::state::notice::NoticeState;

/// The campaign history table.
///
/// Headers come from the declared column list, rows from the current page
/// slice. The send action is fire-and-report: it never mutates the local
/// list, so a status change only shows up on the next full reload.
#[component]
pub fn CampaignTable() -> impl IntoView {
    let campaigns = expect_context::<RwSignal<CampaignsState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let delete = expect_context::<RwSignal<DeleteState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();

    let launch = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::launch_campaign(&id).await {
                    Ok(()) => {
                        notice.update(|n| n.show_success("Campaign sent successfully"));
                    }
                    Err(e) => {
                        leptos::logging::warn!("campaign launch failed: {e}");
                        notice.update(|n| n.show_error(&format!("Failed to send campaign: {e}")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, notice);
        }
    };

    let rows = move || campaigns.get().page_slice().to_vec();

    let page_label = move || {
        let c = campaigns.get();
        format!("Page {} of {}", c.page + 1, c.page_count())
    };
    let prev_disabled = move || campaigns.get().page == 0;
    let next_disabled = move || {
        let c = campaigns.get();
        c.page + 1 >= c.page_count()
    };

    view! {
        <div class="campaign-table">
            <h2 class="campaign-table__title">"Campaign History"</h2>
            <table>
                <thead>
                    <tr>
                        {Campaign::COLUMNS
                            .iter()
                            .map(|col| view! { <th>{col.label()}</th> })
                            .collect::<Vec<_>>()}
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows()
                            .into_iter()
                            .map(|c| {
                                let edit_target = c.clone();
                                let delete_id = c.id.clone();
                                let launch_id = c.id.clone();
                                view! {
                                    <tr>
                                        {Campaign::COLUMNS
                                            .iter()
                                            .map(|col| view! { <td>{c.display(*col)}</td> })
                                            .collect::<Vec<_>>()}
                                        <td class="campaign-table__actions">
                                            <button
                                                title="Edit"
                                                on:click=move |_| editor.update(|e| e.open(&edit_target))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                title="Delete"
                                                on:click=move |_| delete.update(|d| d.request(&delete_id))
                                            >
                                                "Delete"
                                            </button>
                                            <button
                                                title="Send"
                                                on:click=move |_| launch(launch_id.clone())
                                            >
                                                "Send"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <div class="campaign-table__pagination">
                <label class="campaign-table__rows">
                    "Rows per page"
                    <select on:change=move |ev| {
                        if let Ok(n) = event_target_value(&ev).parse::<usize>() {
                            campaigns.update(|c| c.set_rows_per_page(n));
                        }
                    }>
                        {ROWS_PER_PAGE_OPTIONS
                            .iter()
                            .map(|&n| {
                                view! {
                                    <option
                                        value=n.to_string()
                                        selected=move || campaigns.get().rows_per_page == n
                                    >
                                        {n}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <button
                    disabled=prev_disabled
                    on:click=move |_| {
                        campaigns.update(|c| {
                            let page = c.page.saturating_sub(1);
                            c.set_page(page);
                        });
                    }
                >
                    "Previous"
                </button>
                <span class="campaign-table__page">{page_label}</span>
                <button
                    disabled=next_disabled
                    on:click=move |_| {
                        campaigns.update(|c| {
                            if c.page + 1 < c.page_count() {
                                let page = c.page + 1;
                                c.set_page(page);
                            }
                        });
                    }
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
