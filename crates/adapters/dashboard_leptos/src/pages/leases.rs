use leptos::prelude::*;
use rntly_client::Leases;
use rntly_domain::id::{PropertyId, TenantId};
use rntly_domain::time::Date;

use crate::api::{self, use_controller};
use crate::components::ResourcePage;

#[component]
pub fn LeasesPage() -> impl IntoView {
    let controller = use_controller::<Leases>();
    let state = controller.store().signal();

    let properties = LocalResource::new(api::fetch_property_options);
    let tenants = LocalResource::new(api::fetch_tenant_options);

    view! {
        <ResourcePage controller=controller>
            <label>
                "Property"
                <select
                    required=true
                    on:change=move |ev| {
                        let id = PropertyId::from(event_target_value(&ev));
                        state.update(|s| s.form.property_id = id);
                    }
                >
                    <option value="">"Select a property"</option>
                    {move || {
                        properties
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|property| {
                                let id = property.id.to_string();
                                let current = id.clone();
                                view! {
                                    <option
                                        value=id
                                        selected=move || state.with(|s| s.form.property_id.as_str() == current)
                                    >
                                        {property.address}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </label>
            <label>
                "Tenant"
                <select
                    required=true
                    on:change=move |ev| {
                        let id = TenantId::from(event_target_value(&ev));
                        state.update(|s| s.form.tenant_id = id);
                    }
                >
                    <option value="">"Select a tenant"</option>
                    {move || {
                        tenants
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|tenant| {
                                let id = tenant.id.to_string();
                                let current = id.clone();
                                view! {
                                    <option
                                        value=id
                                        selected=move || state.with(|s| s.form.tenant_id.as_str() == current)
                                    >
                                        {tenant.full_name()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </label>
            <label>
                "Start"
                <input
                    type="date"
                    required=true
                    prop:value=move || state.with(|s| s.form.start_date.to_string())
                    on:input=move |ev| {
                        if let Ok(date) = event_target_value(&ev).parse::<Date>() {
                            state.update(|s| s.form.start_date = date);
                        }
                    }
                />
            </label>
            <label>
                "End"
                <input
                    type="date"
                    required=true
                    prop:value=move || state.with(|s| s.form.end_date.to_string())
                    on:input=move |ev| {
                        if let Ok(date) = event_target_value(&ev).parse::<Date>() {
                            state.update(|s| s.form.end_date = date);
                        }
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
            <label>
                "Deposit"
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    prop:value=move || state.with(|s| s.form.deposit.to_string())
                    on:input=move |ev| {
                        let deposit = event_target_value(&ev).parse().unwrap_or_default();
                        state.update(|s| s.form.deposit = deposit);
                    }
                />
            </label>
        </ResourcePage>
    }
}
