use super::*;

#[test]
fn validate_login_trims_email_and_builds_request() {
    assert_eq!(
        validate_auth_input(false, "", "  a@b.com ", "x"),
        Ok(AuthRequest::Login { email: "a@b.com".to_owned(), password: "x".to_owned() })
    );
}

#[test]
fn validate_signup_requires_name() {
    assert_eq!(validate_auth_input(true, "   ", "a@b.com", "x"), Err("Please enter your full name."));
    assert_eq!(
        validate_auth_input(true, " Asha ", "a@b.com", "x"),
        Ok(AuthRequest::Register { name: "Asha".to_owned(), email: "a@b.com".to_owned(), password: "x".to_owned() })
    );
}

#[test]
fn validate_requires_email_and_password() {
    assert_eq!(validate_auth_input(false, "", "", "x"), Err("Please enter your email and password."));
    assert_eq!(validate_auth_input(false, "", "a@b.com", ""), Err("Please enter your email and password."));
}

#[test]
fn auth_error_prefers_server_message() {
    let rejected = ApiError::Unauthorized { status: 401, message: "Invalid email or password".to_owned() };
    assert_eq!(auth_error_message(&rejected), "Invalid email or password");

    let conflict = ApiError::Status { status: 400, message: "User already exists".to_owned() };
    assert_eq!(auth_error_message(&conflict), "User already exists");
}

#[test]
fn auth_error_falls_back_to_generic_message() {
    assert_eq!(auth_error_message(&ApiError::Network("offline".to_owned())), "An unexpected error occurred.");
    assert_eq!(
        auth_error_message(&ApiError::Status { status: 500, message: String::new() }),
        "An unexpected error occurred."
    );
}
