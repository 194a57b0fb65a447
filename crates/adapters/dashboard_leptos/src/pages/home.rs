use leptos::prelude::*;

use crate::api;
use crate::components::{Loading, StatCard};

/// Landing page with a count per resource.
#[component]
pub fn Home() -> impl IntoView {
    let counts = LocalResource::new(api::fetch_dashboard_counts);

    view! {
        <section class="page">
            <h1>"Dashboard"</h1>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    counts.get().map(|result| match result {
                        Ok(counts) => view! {
                            <div class="stats">
                                <StatCard
                                    label="Properties"
                                    value=counts.properties
                                    detail=format!("{} vacant", counts.vacant)
                                />
                                <StatCard label="Tenants" value=counts.tenants/>
                                <StatCard label="Leases" value=counts.leases/>
                            </div>
                        }.into_any(),
                        Err(err) => view! {
                            <div class="error">{"Failed to load dashboard: "} {err}</div>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}
