//! Error types for the service layer
//!
//! One aggregate enum so the UI edge handles a single error type. The
//! `is_user_error` split separates "the request was wrong" from "the system
//! failed" without a full taxonomy.

use crate::intake::IntakeStep;

/// Aggregate service error
#[derive(Debug, thiserror::Error)]
pub enum OpsError {
    /// Domain validation failed
    #[error("domain error: {0}")]
    Domain(#[from] hooomz_domain::DomainError),

    /// Storage failed
    #[error("store error: {0}")]
    Store(#[from] hooomz_store::StoreError),

    /// Permission denied
    #[error("auth error: {0}")]
    Auth(#[from] hooomz_auth::AuthError),

    /// Matcher construction failed
    #[error("matcher error: {0}")]
    Match(#[from] hooomz_match::MatchError),

    /// Estimate calculation failed
    #[error("estimate error: {0}")]
    Estimate(#[from] hooomz_estimate::EstimateError),

    /// Intake session incomplete
    #[error("intake incomplete: missing {0:?} step")]
    IntakeIncomplete(IntakeStep),

    /// A contact already has a running clock
    #[error("contact {0} already has an open time entry")]
    AlreadyClockedIn(hooomz_domain::ContactId),

    /// Clock-out with no running clock
    #[error("contact {0} has no open time entry")]
    NotClockedIn(hooomz_domain::ContactId),

    /// Configuration file failed to load
    #[error("config error: {0}")]
    Config(String),
}

impl OpsError {
    /// Whether the caller sent a bad request (as opposed to a system fault)
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::Domain(_)
            | Self::Auth(_)
            | Self::Estimate(_)
            | Self::IntakeIncomplete(_)
            | Self::AlreadyClockedIn(_)
            | Self::NotClockedIn(_) => true,
            Self::Store(err) => err.is_not_found(),
            Self::Match(_) | Self::Config(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hooomz_auth::AuthError;
    use hooomz_store::{EntityKind, StoreError};

    #[test]
    fn auth_denial_is_user_error() {
        let err = OpsError::Auth(AuthError::Denied {
            user: "Sam".to_string(),
            permission: "tasks.write".to_string(),
        });
        assert!(err.is_user_error());
    }

    #[test]
    fn io_failure_is_system_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "disk");
        let err = OpsError::Store(StoreError::Io(io));
        assert!(!err.is_user_error());
    }

    #[test]
    fn not_found_is_user_error() {
        let err = OpsError::Store(StoreError::not_found(EntityKind::Task, "01H"));
        assert!(err.is_user_error());
    }
}
