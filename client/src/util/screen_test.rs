use super::*;

// =============================================================
// Home buttons
// =============================================================

#[test]
fn home_buttons_have_exact_labels_in_order() {
    let labels: Vec<_> = Screen::HOME_BUTTONS.iter().filter_map(|s| s.button_label()).collect();
    assert_eq!(labels, ["Admin Login", "Doctor Login", "Patient Login", "Sign Up"]);
}

#[test]
fn home_has_no_button_label() {
    assert_eq!(Screen::Home.button_label(), None);
    assert!(!Screen::HOME_BUTTONS.contains(&Screen::Home));
}

#[test]
fn every_home_button_targets_its_own_route() {
    for screen in Screen::HOME_BUTTONS {
        assert_eq!(Screen::from_path(screen.path()), Some(screen), "{screen:?}");
    }
}

// =============================================================
// Paths
// =============================================================

#[test]
fn paths_match_route_table() {
    assert_eq!(Screen::Home.path(), "/");
    assert_eq!(Screen::AdminLogin.path(), "/admin-login");
    assert_eq!(Screen::DoctorLogin.path(), "/doctor-login");
    assert_eq!(Screen::PatientLogin.path(), "/patient-login");
    assert_eq!(Screen::SignUp.path(), "/sign-up");
}

#[test]
fn segment_is_path_without_leading_slash() {
    for screen in Screen::ALL {
        assert_eq!(format!("/{}", screen.segment()), screen.path());
    }
}

#[test]
fn paths_are_distinct() {
    for (i, a) in Screen::ALL.iter().enumerate() {
        for b in &Screen::ALL[i + 1..] {
            assert_ne!(a.path(), b.path());
        }
    }
}

#[test]
fn from_path_ignores_query_and_fragment() {
    assert_eq!(Screen::from_path("/doctor-login?next=1"), Some(Screen::DoctorLogin));
    assert_eq!(Screen::from_path("/#top"), Some(Screen::Home));
    assert_eq!(Screen::from_path("/"), Some(Screen::Home));
}

#[test]
fn from_path_rejects_unknown_and_nested_paths() {
    assert_eq!(Screen::from_path("/login"), None);
    assert_eq!(Screen::from_path("/admin-login/extra"), None);
    assert_eq!(Screen::from_path("admin-login"), None);
    assert_eq!(Screen::from_path(""), None);
}

#[test]
fn from_path_rejects_trailing_slash() {
    assert_eq!(Screen::from_path("/sign-up/"), None);
    assert_eq!(Screen::from_path("/admin-login/"), None);
    assert_eq!(Screen::from_path("//"), None);
}

// =============================================================
// Titles and roles
// =============================================================

#[test]
fn titles_name_the_app() {
    assert_eq!(Screen::Home.title(), "MediTrack Healthcare System");
    assert_eq!(Screen::PatientLogin.title(), "Patient Login | MediTrack");
    assert!(NOT_FOUND_TITLE.ends_with("MediTrack"));
}

#[test]
fn login_screens_round_trip_through_role() {
    for role in [Role::Admin, Role::Doctor, Role::Patient] {
        assert_eq!(Screen::login_for(role).login_role(), Some(role));
    }
    assert_eq!(Screen::SignUp.login_role(), None);
    assert_eq!(Screen::Home.login_role(), None);
}

#[test]
fn login_button_label_is_role_then_login() {
    for role in [Role::Admin, Role::Doctor, Role::Patient] {
        let label = Screen::login_for(role).button_label().unwrap();
        assert_eq!(label, format!("{} Login", role.label()));
    }
}
