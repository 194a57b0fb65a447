use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod pages;

use components::Nav;
use pages::{Home, LeasesPage, NotFound, PropertiesPage, TenantsPage};

/// Root application component.
///
/// Side navigation plus the routed content region. Every page owns its own
/// state; the shell holds none.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="shell">
                <Nav/>
                <main class="content">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Home/>
                        <Route path=path!("properties") view=PropertiesPage/>
                        <Route path=path!("tenants") view=TenantsPage/>
                        <Route path=path!("leases") view=LeasesPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
