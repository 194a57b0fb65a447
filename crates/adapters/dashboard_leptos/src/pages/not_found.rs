use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page displayed when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="page not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <p>
                <A href="/">"Go back to the dashboard"</A>
            </p>
        </section>
    }
}
