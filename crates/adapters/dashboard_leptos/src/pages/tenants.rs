use leptos::prelude::*;
use rntly_client::Tenants;

use crate::api::use_controller;
use crate::components::ResourcePage;

#[component]
pub fn TenantsPage() -> impl IntoView {
    let controller = use_controller::<Tenants>();
    let state = controller.store().signal();

    view! {
        <ResourcePage controller=controller>
            <label>
                "First name"
                <input
                    type="text"
                    required=true
                    prop:value=move || state.with(|s| s.form.first_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.form.first_name = value);
                    }
                />
            </label>
            <label>
                "Last name"
                <input
                    type="text"
                    required=true
                    prop:value=move || state.with(|s| s.form.last_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.form.last_name = value);
                    }
                />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    required=true
                    prop:value=move || state.with(|s| s.form.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.form.email = value);
                    }
                />
            </label>
            <label>
                "Phone"
                <input
                    type="tel"
                    prop:value=move || state.with(|s| s.form.phone.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.form.phone = value);
                    }
                />
            </label>
        </ResourcePage>
    }
}
