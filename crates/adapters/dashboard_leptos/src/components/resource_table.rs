//! Generic table of a resource's records with per-row delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use rntly_client::{Cell, Resource};

use crate::api::{BrowserConfirm, Controller};
use crate::components::{Loading, StatusBadge};

/// Records of `R` as a table, the loading indicator, or the empty-state text.
#[component]
pub fn ResourceTable<R: Resource>(
    /// Controller owning the records.
    controller: Controller<R>,
) -> impl IntoView {
    let state = controller.store().signal();

    move || {
        if state.with(|s| s.loading) {
            return view! { <Loading/> }.into_any();
        }
        if let Some(text) = state.with(|s| s.empty_text()) {
            return view! { <p class="empty">{text}</p> }.into_any();
        }

        let rows = state.with(|s| s.rows());
        view! {
            <table>
                <thead>
                    <tr>
                        {R::COLUMNS.iter().map(|column| view! { <th>{*column}</th> }).collect_view()}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|(id, cells)| {
                            view! { <ResourceRow controller=controller.clone() id=id cells=cells/> }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

#[component]
fn ResourceRow<R: Resource>(controller: Controller<R>, id: String, cells: Vec<Cell>) -> impl IntoView {
    let on_delete = move |_| {
        let controller = controller.clone();
        let id = id.clone();
        spawn_local(async move { controller.delete(&id, &BrowserConfirm).await });
    };

    view! {
        <tr>
            {cells
                .into_iter()
                .map(|cell| match cell {
                    Cell::Text(text) => view! { <td>{text}</td> }.into_any(),
                    Cell::Badge { text, tone } => {
                        view! { <td><StatusBadge text=text tone=tone/></td> }.into_any()
                    }
                })
                .collect_view()}
            <td class="actions">
                <button class="danger" on:click=on_delete>"Delete"</button>
            </td>
        </tr>
    }
}
