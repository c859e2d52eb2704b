use super::*;

// =============================================================
// Role serde
// =============================================================

#[test]
fn role_serializes_to_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");
    assert_eq!(serde_json::to_string(&Role::Patient).unwrap(), "\"patient\"");
}

#[test]
fn role_rejects_unknown_value() {
    assert!(serde_json::from_str::<Role>("\"nurse\"").is_err());
}

#[test]
fn role_label_is_capitalized() {
    assert_eq!(Role::Admin.label(), "Admin");
    assert_eq!(Role::Doctor.to_string(), "Doctor");
    assert_eq!(format!("{}", Role::Patient), "Patient");
}

// =============================================================
// SignUpRole
// =============================================================

#[test]
fn sign_up_role_cannot_be_admin() {
    assert!(serde_json::from_str::<SignUpRole>("\"admin\"").is_err());
    assert_eq!(serde_json::from_str::<SignUpRole>("\"doctor\"").unwrap(), SignUpRole::Doctor);
}

#[test]
fn sign_up_role_converts_into_role() {
    assert_eq!(Role::from(SignUpRole::Doctor), Role::Doctor);
    assert_eq!(Role::from(SignUpRole::Patient), Role::Patient);
}

// =============================================================
// Struct shapes
// =============================================================

#[test]
fn user_deserializes_wire_shape() {
    let json = r#"{"id":"u-1","username":"admin1","password":"admin","role":"admin"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.username, "admin1");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn login_credentials_serializes_both_fields() {
    let creds = LoginCredentials { username: "D001".to_owned(), password: "pw".to_owned() };
    let value = serde_json::to_value(&creds).unwrap();
    assert_eq!(value, serde_json::json!({ "username": "D001", "password": "pw" }));
}

#[test]
fn sign_up_details_uses_camel_case_confirm_password() {
    let details = SignUpDetails {
        username: "pat".to_owned(),
        password: "a".to_owned(),
        confirm_password: "b".to_owned(),
        role: SignUpRole::Patient,
    };
    let value = serde_json::to_value(&details).unwrap();
    assert_eq!(value["confirmPassword"], "b");
    assert_eq!(value["role"], "patient");
    assert!(value.get("confirm_password").is_none());
}

#[test]
fn sign_up_details_keeps_mismatched_passwords() {
    let json = r#"{"username":"u","password":"one","confirmPassword":"two","role":"doctor"}"#;
    let details: SignUpDetails = serde_json::from_str(json).unwrap();
    assert_ne!(details.password, details.confirm_password);
    assert_eq!(details.role, SignUpRole::Doctor);
}
