use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::identity::Role;

/// Sign-in form submission.
///
/// `name` is whatever display name the visitor typed, if any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub remember_me: bool,
}

/// Sign-up form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub name: String,
    pub email: String,
    pub password: String,
    #[validate(must_match(other = "password", message = "Password confirmation does not match"))]
    pub confirm_password: String,
    pub role: Role,
}

/// Which form the auth page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    SignIn,
    SignUp,
}
