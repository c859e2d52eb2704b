//! Root application component with routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `Screen` maps to exactly one static route. There are no guards,
//! redirects, or nested routes; unknown paths fall through to a plain
//! not-found view.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;

use crate::pages::home::HomePage;
use crate::pages::login::{AdminLoginPage, DoctorLoginPage, PatientLoginPage};
use crate::pages::sign_up::SignUpPage;
use crate::util::screen::{NOT_FOUND_TITLE, Screen};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/meditrack.css"/>

        <Router>
            <ScreenTitle/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(Screen::Home.segment()) view=HomePage/>
                <Route path=StaticSegment(Screen::AdminLogin.segment()) view=AdminLoginPage/>
                <Route path=StaticSegment(Screen::DoctorLogin.segment()) view=DoctorLoginPage/>
                <Route path=StaticSegment(Screen::PatientLogin.segment()) view=PatientLoginPage/>
                <Route path=StaticSegment(Screen::SignUp.segment()) view=SignUpPage/>
            </Routes>
        </Router>
    }
}

/// Keeps the document title in step with the current route.
#[component]
fn ScreenTitle() -> impl IntoView {
    let location = use_location();
    let title = move || {
        location
            .pathname
            .with(|path| Screen::from_path(path).map_or(NOT_FOUND_TITLE, Screen::title))
    };

    view! { <Title text=title/> }
}
