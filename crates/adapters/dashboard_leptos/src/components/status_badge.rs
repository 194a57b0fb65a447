//! Status badge component.

use leptos::prelude::*;
use rntly_client::Tone;

/// A small pill showing a status word, colored by its [`Tone`].
#[component]
pub fn StatusBadge(
    /// The text inside the badge.
    #[prop(into)]
    text: String,
    /// Color of the badge.
    #[prop(default = Tone::Neutral)]
    tone: Tone,
) -> impl IntoView {
    view! { <span class=tone.css_class()>{text}</span> }
}
