//! Home-page navigation button.

use leptos::prelude::*;

use crate::util::screen::Screen;

/// Button-styled link to a screen's route.
///
/// Rendered as an anchor so navigation works from the server-rendered page
/// before hydration; once hydrated the router intercepts the click.
#[component]
pub fn NavButton(screen: Screen) -> impl IntoView {
    let label = screen.button_label().unwrap_or_default();

    view! {
        <a class="nav-button" role="button" href=screen.path()>
            {label}
        </a>
    }
}
