//! Catalogue of routed screens.
//!
//! DESIGN
//! ======
//! `Screen` is the single source for route paths, document titles, and
//! home-button labels. The router and the home page both read from it, so
//! a button can never point at a path the router does not serve.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use crate::net::types::Role;

/// Document title for paths that match no screen.
pub const NOT_FOUND_TITLE: &str = "Page Not Found | MediTrack";

/// A top-level routed view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    AdminLogin,
    DoctorLogin,
    PatientLogin,
    SignUp,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::AdminLogin,
        Screen::DoctorLogin,
        Screen::PatientLogin,
        Screen::SignUp,
    ];

    /// Screens reachable from the home page, in button order.
    pub const HOME_BUTTONS: [Screen; 4] =
        [Screen::AdminLogin, Screen::DoctorLogin, Screen::PatientLogin, Screen::SignUp];

    /// Absolute route path.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::AdminLogin => "/admin-login",
            Self::DoctorLogin => "/doctor-login",
            Self::PatientLogin => "/patient-login",
            Self::SignUp => "/sign-up",
        }
    }

    /// Route path without the leading slash, as the router declares it.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::AdminLogin => "admin-login",
            Self::DoctorLogin => "doctor-login",
            Self::PatientLogin => "patient-login",
            Self::SignUp => "sign-up",
        }
    }

    /// Resolve a location pathname. Query strings and fragments are ignored;
    /// the path itself must match exactly, as the router matches it.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        Self::ALL.into_iter().find(|screen| screen.path() == path)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "MediTrack Healthcare System",
            Self::AdminLogin => "Admin Login | MediTrack",
            Self::DoctorLogin => "Doctor Login | MediTrack",
            Self::PatientLogin => "Patient Login | MediTrack",
            Self::SignUp => "Sign Up | MediTrack",
        }
    }

    /// Label of the home-page button leading here. `None` for `Home`.
    pub fn button_label(self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::AdminLogin => Some("Admin Login"),
            Self::DoctorLogin => Some("Doctor Login"),
            Self::PatientLogin => Some("Patient Login"),
            Self::SignUp => Some("Sign Up"),
        }
    }

    /// Role a login screen is labelled for.
    pub fn login_role(self) -> Option<Role> {
        match self {
            Self::AdminLogin => Some(Role::Admin),
            Self::DoctorLogin => Some(Role::Doctor),
            Self::PatientLogin => Some(Role::Patient),
            Self::Home | Self::SignUp => None,
        }
    }

    /// Login screen for a role.
    pub fn login_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::AdminLogin,
            Role::Doctor => Self::DoctorLogin,
            Role::Patient => Self::PatientLogin,
        }
    }
}
