use leptos::prelude::*;
use rntly_client::Properties;
use rntly_domain::property::PropertyKind;

use crate::api::use_controller;
use crate::components::ResourcePage;

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let controller = use_controller::<Properties>();
    let state = controller.store().signal();

    view! {
        <ResourcePage controller=controller>
            <label>
                "Address"
                <input
                    type="text"
                    required=true
                    prop:value=move || state.with(|s| s.form.address.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.form.address = value);
                    }
                />
            </label>
            <label>
                "Type"
                <select on:change=move |ev| {
                    if let Ok(kind) = event_target_value(&ev).parse::<PropertyKind>() {
                        state.update(|s| s.form.kind = kind);
                    }
                }>
                    {PropertyKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <option
                                    value=kind.as_str()
                                    selected=move || state.with(|s| s.form.kind == kind)
                                >
                                    {kind.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Bedrooms"
                <input
                    type="number"
                    min="0"
                    prop:value=move || state.with(|s| s.form.bedrooms.to_string())
                    on:input=move |ev| {
                        let bedrooms = event_target_value(&ev).parse().unwrap_or_default();
                        state.update(|s| s.form.bedrooms = bedrooms);
                    }
                />
            </label>
            <label>
                "Monthly rent"
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    required=true
                    prop:value=move || state.with(|s| s.form.rent_amount.to_string())
                    on:input=move |ev| {
                        let rent = event_target_value(&ev).parse().unwrap_or_default();
                        state.update(|s| s.form.rent_amount = rent);
                    }
                />
            </label>
        </ResourcePage>
    }
}
