use leptos::prelude::*;
use leptos_router::components::A;

/// Persistent side navigation. The link matching the current route gets
/// `aria-current="page"`.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="brand">"rntly"</div>
            <nav>
                <ul>
                    <li><A href="/" exact=true>"Dashboard"</A></li>
                    <li><A href="/properties">"Properties"</A></li>
                    <li><A href="/tenants">"Tenants"</A></li>
                    <li><A href="/leases">"Leases"</A></li>
                </ul>
            </nav>
        </aside>
    }
}
