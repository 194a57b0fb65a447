//! Generic list-and-form screen.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rntly_client::{Resource, ViewState};

use crate::api::Controller;
use crate::components::ResourceTable;

/// Header with the add/cancel toggle, error banner, optional creation form
/// and the records table.
///
/// `children` are the form's fields. They should write through the store
/// signal so the controller submits what the user typed.
#[component]
pub fn ResourcePage<R: Resource>(controller: Controller<R>, children: ChildrenFn) -> impl IntoView {
    let state = controller.store().signal();

    let toggler = controller.clone();
    let submitter = controller.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submitter = submitter.clone();
        spawn_local(async move { submitter.submit().await });
    };

    view! {
        <section class="page">
            <header class="page-header">
                <h1>{R::TITLE}</h1>
                <button class="primary" on:click=move |_| toggler.toggle_form()>
                    {move || state.with(ViewState::toggle_label)}
                </button>
            </header>
            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|error| view! { <div class="error">{error}</div> })
            }}
            {move || {
                let on_submit = on_submit.clone();
                let children = children.clone();
                state
                    .with(|s| s.form_visible)
                    .then(move || {
                        view! {
                            <form class="resource-form" on:submit=on_submit>
                                {children()}
                                <div class="form-actions">
                                    <button type="submit" class="primary">"Save"</button>
                                </div>
                            </form>
                        }
                    })
            }}
            <ResourceTable controller=controller/>
        </section>
    }
}
