//! Standard policies.
//!
//! The reference policy set, registered by [`default_policy_engine`] in this
//! order:
//!
//! | # | Policy                     | Effect when it applies                         |
//! |---|----------------------------|------------------------------------------------|
//! | 1 | `AdminFullAccess`          | Allow admins everything                        |
//! | 2 | `MFARequiredForRestricted` | Deny restricted resources without MFA          |
//! | 3 | `ProductionImmutability`   | Deny non-admin write/delete in production      |
//! | 4 | `AnalystReadOnly`          | Analysts: read non-sensitive only              |
//! | 5 | `EngineerAccess`           | Engineers: all in dev/staging, read in prod    |
//!
//! The order matters. `EngineerAccess` abstains on restricted resources and
//! relies on `MFARequiredForRestricted` running first to deny them without MFA.

use warden_types::RequestContext;

use crate::engine::PolicyEngine;
use crate::policy::{FnPolicy, Policy, PolicyMetadata, PolicyOutcome};

pub const ADMIN_FULL_ACCESS: &str = "AdminFullAccess";
pub const MFA_REQUIRED_FOR_RESTRICTED: &str = "MFARequiredForRestricted";
pub const PRODUCTION_IMMUTABILITY: &str = "ProductionImmutability";
pub const ANALYST_READ_ONLY: &str = "AnalystReadOnly";
pub const ENGINEER_ACCESS: &str = "EngineerAccess";

/// Names of the standard policies, in recommended evaluation order.
pub const STANDARD_POLICY_NAMES: [&str; 5] = [
    ADMIN_FULL_ACCESS,
    MFA_REQUIRED_FOR_RESTRICTED,
    PRODUCTION_IMMUTABILITY,
    ANALYST_READ_ONLY,
    ENGINEER_ACCESS,
];

const AUTHOR: &str = "governance-team";

fn metadata(name: &str, description: &str) -> PolicyMetadata {
    PolicyMetadata::new(name)
        .with_author(AUTHOR)
        .with_description(description)
}

/// Admins bypass all restrictions.
pub fn admin_full_access() -> impl Policy {
    FnPolicy::new(
        metadata(
            ADMIN_FULL_ACCESS,
            "Grants unrestricted access to all principals with the admin role.",
        ),
        |ctx: &RequestContext| {
            if ctx.principal.role == "admin" {
                PolicyOutcome::allow("Admin role has unrestricted access.")
            } else {
                PolicyOutcome::Abstain
            }
        },
    )
}

/// Denies restricted resources when MFA has not been verified.
pub fn mfa_required_for_restricted() -> impl Policy {
    FnPolicy::new(
        metadata(
            MFA_REQUIRED_FOR_RESTRICTED,
            "Denies access to restricted resources when MFA has not been verified.",
        ),
        |ctx: &RequestContext| {
            if ctx.resource.classification == "restricted" && !ctx.mfa_verified {
                PolicyOutcome::deny("MFA required to access restricted resources.")
            } else {
                PolicyOutcome::Abstain
            }
        },
    )
}

/// Non-admins cannot write or delete in production.
pub fn production_immutability() -> impl Policy {
    FnPolicy::new(
        metadata(
            PRODUCTION_IMMUTABILITY,
            "Prevents non-admin principals from writing or deleting in production.",
        ),
        |ctx: &RequestContext| {
            let mutating = matches!(ctx.action.verb.as_str(), "write" | "delete");
            if ctx.environment == "production" && ctx.principal.role != "admin" && mutating {
                PolicyOutcome::deny("Write/delete operations require admin role in production.")
            } else {
                PolicyOutcome::Abstain
            }
        },
    )
}

/// Analysts are limited to read-only access on non-sensitive resources.
pub fn analyst_read_only() -> impl Policy {
    FnPolicy::new(
        metadata(
            ANALYST_READ_ONLY,
            "Restricts analysts to read-only access on non-sensitive resources.",
        ),
        |ctx: &RequestContext| {
            if ctx.principal.role != "analyst" {
                return PolicyOutcome::Abstain;
            }
            if ctx.action.verb != "read" {
                return PolicyOutcome::deny("Analysts are limited to read-only access.");
            }
            if matches!(
                ctx.resource.classification.as_str(),
                "restricted" | "confidential"
            ) {
                return PolicyOutcome::deny(
                    "Analysts cannot access confidential or restricted data.",
                );
            }
            PolicyOutcome::allow("Analyst read access on non-sensitive resource allowed.")
        },
    )
}

/// Engineers have full access in dev/staging and read-only access in production.
pub fn engineer_access() -> impl Policy {
    FnPolicy::new(
        metadata(
            ENGINEER_ACCESS,
            "Grants engineers full access in dev/staging and read-only in production.",
        ),
        |ctx: &RequestContext| {
            if ctx.principal.role != "engineer" {
                return PolicyOutcome::Abstain;
            }
            // Restricted resources are left to MFARequiredForRestricted.
            if ctx.resource.classification == "restricted" {
                return PolicyOutcome::Abstain;
            }
            match (ctx.environment.as_str(), ctx.action.verb.as_str()) {
                ("dev" | "staging", _) => PolicyOutcome::allow(
                    "Engineers have full access in non-production environments.",
                ),
                ("production", "read") => {
                    PolicyOutcome::allow("Engineers can read production resources.")
                }
                _ => PolicyOutcome::Abstain,
            }
        },
    )
}

/// Looks up a standard policy by name.
pub fn by_name(name: &str) -> Option<Box<dyn Policy>> {
    let policy: Box<dyn Policy> = match name {
        ADMIN_FULL_ACCESS => Box::new(admin_full_access()),
        MFA_REQUIRED_FOR_RESTRICTED => Box::new(mfa_required_for_restricted()),
        PRODUCTION_IMMUTABILITY => Box::new(production_immutability()),
        ANALYST_READ_ONLY => Box::new(analyst_read_only()),
        ENGINEER_ACCESS => Box::new(engineer_access()),
        _ => return None,
    };
    Some(policy)
}

/// Returns a fresh engine loaded with all standard policies in recommended order.
///
/// Each call returns an independent engine.
pub fn default_policy_engine() -> PolicyEngine {
    PolicyEngine::new()
        .with_policy(admin_full_access())
        .with_policy(mfa_required_for_restricted())
        .with_policy(production_immutability())
        .with_policy(analyst_read_only())
        .with_policy(engineer_access())
}

// ============================================================================
// Tests
// ============================================================================
