//! Hooomz Auth - the permission gate
//!
//! Static set membership, nothing more: a user's effective permission set is
//! their role's built-ins plus explicit grants, and `all` is a wildcard that
//! satisfies any check. No delegation, no inheritance resolution, no dynamic
//! policy evaluation.
//!
//! # Example
//!
//! ```rust
//! use hooomz_auth::{has_permission, Role, User};
//!
//! let owner = User::new("Pat", Role::Owner);
//! assert!(has_permission(&owner, "projects.archive"));
//!
//! let crew = User::new("Sam", Role::Crew);
//! assert!(has_permission(&crew, "time.clock"));
//! assert!(!has_permission(&crew, "projects.archive"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

use hooomz_domain::ContactId;
use serde::{Deserialize, Serialize};

/// The wildcard permission satisfying every check
pub const ALL: &str = "all";

/// Auth errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The user lacks the required permission
    #[error("{user} lacks permission {permission:?}")]
    Denied { user: String, permission: String },
}

/// Built-in user roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Company owner
    Owner,
    /// Runs projects day to day
    ProjectManager,
    /// Crew lead on site
    Lead,
    /// Crew member
    Crew,
    /// Subcontractor
    Subcontractor,
    /// Customer with read access to their project
    Client,
}

/// Built-in permission set for a role
///
/// Permission strings are dotted `area.action` names. Owner holds the `all`
/// wildcard rather than an enumeration.
#[must_use]
pub fn builtin_permissions(role: Role) -> &'static [&'static str] {
    match role {
        Role::Owner => &[ALL],
        Role::ProjectManager => &[
            "projects.read",
            "projects.write",
            "intake.submit",
            "tasks.read",
            "tasks.write",
            "estimates.create",
            "time.clock",
            "time.review",
            "expenses.write",
            "feed.read",
        ],
        Role::Lead => &[
            "projects.read",
            "tasks.read",
            "tasks.write",
            "time.clock",
            "expenses.write",
            "feed.read",
        ],
        Role::Crew => &["projects.read", "tasks.read", "time.clock", "feed.read"],
        Role::Subcontractor => &["tasks.read", "time.clock"],
        Role::Client => &["projects.read", "feed.read"],
    }
}

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Contact the user corresponds to
    pub id: ContactId,
    /// Display name
    pub name: String,
    /// Role, supplying the built-in permission set
    pub role: Role,
    /// Explicit grants on top of the role's built-ins
    pub permissions: Vec<String>,
}

impl User {
    /// Create a user with no explicit grants
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            id: ContactId::new(),
            name: name.into(),
            role,
            permissions: Vec::new(),
        }
    }

    /// With an explicit grant
    #[inline]
    #[must_use]
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }
}

/// Whether the user's effective set contains `permission` or the wildcard
#[must_use]
pub fn has_permission(user: &User, permission: &str) -> bool {
    let builtins = builtin_permissions(user.role);
    builtins.contains(&ALL)
        || builtins.contains(&permission)
        || user.permissions.iter().any(|p| p == ALL || p == permission)
}

/// Permission gate for the service layer
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissionGate;

impl PermissionGate {
    /// Create a gate
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Require a permission, erroring with who and what on denial
    ///
    /// # Errors
    /// Returns `AuthError::Denied` when the check fails.
    pub fn require(&self, user: &User, permission: &str) -> Result<(), AuthError> {
        if has_permission(user, permission) {
            Ok(())
        } else {
            Err(AuthError::Denied {
                user: user.name.clone(),
                permission: permission.to_string(),
            })
        }
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_satisfies_any_permission() {
        let owner = User::new("Pat", Role::Owner);
        for permission in ["projects.archive", "made.up.permission", "tasks.write"] {
            assert!(has_permission(&owner, permission), "{permission}");
        }
    }

    #[test]
    fn explicit_wildcard_grant_works_on_any_role() {
        let crew = User::new("Sam", Role::Crew).with_permission(ALL);
        assert!(has_permission(&crew, "projects.archive"));
    }

    #[test]
    fn role_builtins_apply() {
        let pm = User::new("Jo", Role::ProjectManager);
        assert!(has_permission(&pm, "estimates.create"));
        assert!(!has_permission(&pm, "projects.archive"));
    }

    #[test]
    fn explicit_grant_extends_builtins() {
        let lead = User::new("Max", Role::Lead);
        assert!(!has_permission(&lead, "estimates.create"));

        let lead = lead.with_permission("estimates.create");
        assert!(has_permission(&lead, "estimates.create"));
    }

    #[test]
    fn gate_denies_with_context() {
        let client = User::new("Taylor", Role::Client);
        let gate = PermissionGate::new();

        assert!(gate.require(&client, "projects.read").is_ok());
        let err = gate.require(&client, "tasks.write").unwrap_err();
        assert_eq!(
            err,
            AuthError::Denied {
                user: "Taylor".to_string(),
                permission: "tasks.write".to_string(),
            }
        );
    }

    #[test]
    fn every_role_has_builtins() {
        for role in [
            Role::Owner,
            Role::ProjectManager,
            Role::Lead,
            Role::Crew,
            Role::Subcontractor,
            Role::Client,
        ] {
            assert!(!builtin_permissions(role).is_empty(), "{role:?}");
        }
    }
}
