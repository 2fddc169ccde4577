//! Mock identity provider.
//!
//! Credentials are accepted as given; every sign-in mints a new user id.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("email is required")]
    EmptyEmail,

    #[error("name is required")]
    EmptyName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Fresh id of the form `user_<hex>`.
pub fn new_user_id() -> String {
    format!("user_{}", Uuid::new_v4().simple())
}

/// Sign in with any password. The name is the local part of the email.
pub fn sign_in(email: &str, _password: &str) -> Result<User, AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::EmptyEmail);
    }

    let name = email.split('@').next().unwrap_or(email);
    Ok(User {
        id: new_user_id(),
        name: name.to_string(),
        email: email.to_string(),
    })
}

pub fn sign_up(name: &str, email: &str, _password: &str) -> Result<User, AuthError> {
    let (name, email) = (name.trim(), email.trim());
    if email.is_empty() {
        return Err(AuthError::EmptyEmail);
    }
    if name.is_empty() {
        return Err(AuthError::EmptyName);
    }

    Ok(User {
        id: new_user_id(),
        name: name.to_string(),
        email: email.to_string(),
    })
}
