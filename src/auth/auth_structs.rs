// src/auth/auth_structs.rs

use serde::{Deserialize, Serialize};

/// JWT payload issued by the user service.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user e-mail
    pub role: String,
    pub exp: i64,
}

/// Authenticated caller, extracted from a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    pub subject: String,
    pub role: String,
}

impl CallerContext {
    pub fn new(subject: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            role: role.into(),
        }
    }
}

impl From<Claims> for CallerContext {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            role: claims.role,
        }
    }
}
