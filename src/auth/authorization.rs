// src/auth/authorization.rs

use super::auth_structs::CallerContext;
use crate::shared::service_error::{ServiceError, ServiceResult};

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationDecision {
    Granted,
    Denied,
}

/// Decides whether the caller may mutate the catalog.
pub fn authorize_admin(caller: &CallerContext) -> AuthorizationDecision {
    if caller.role.trim().eq_ignore_ascii_case(ADMIN_ROLE) {
        AuthorizationDecision::Granted
    } else {
        AuthorizationDecision::Denied
    }
}

/// `authorize_admin` as a `?`-friendly guard for service operations.
pub fn require_admin(caller: &CallerContext) -> ServiceResult<()> {
    match authorize_admin(caller) {
        AuthorizationDecision::Granted => Ok(()),
        AuthorizationDecision::Denied => Err(ServiceError::AuthorizationDenied),
    }
}
