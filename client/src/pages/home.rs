//! Home page: background image and role navigation.

use leptos::prelude::*;

use crate::components::nav_button::NavButton;
use crate::util::screen::Screen;

/// Background image served from the site root.
pub const BACKGROUND_IMAGE: &str = "/meditrack.svg";

#[component]
pub fn HomePage() -> impl IntoView {
    let background = format!("background-image: url('{BACKGROUND_IMAGE}')");

    view! {
        <div class="home-page" style=background>
            <div class="home-card">
                <h1 class="home-card__title">{Screen::Home.title()}</h1>
                <nav class="home-card__buttons">
                    {Screen::HOME_BUTTONS
                        .into_iter()
                        .map(|screen| view! { <NavButton screen=screen/> })
                        .collect_view()}
                </nav>
            </div>
        </div>
    }
}
