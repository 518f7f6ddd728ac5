//! # warden-types: Core types for `Warden`
//!
//! Value types describing an access request and its outcome:
//! - Identities and targets ([`Principal`], [`Resource`], [`Action`])
//! - The evaluation input ([`RequestContext`])
//! - The evaluation output ([`Effect`], [`Decision`])
//!
//! Every type here owns its data. A [`RequestContext`] can be cloned into an
//! audit record and sent across threads without any borrowing from the caller.

use std::collections::HashMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

// ============================================================================
// Principal
// ============================================================================

/// The identity making an access request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    /// Stable identifier (e.g., "alice@corp.io").
    pub id: String,
    /// Role name (e.g., "admin", "engineer", "analyst", "guest").
    pub role: String,
    /// Owning department (e.g., "IT", "Backend").
    pub department: String,
}

impl Principal {
    pub fn new(
        id: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            department: department.into(),
        }
    }
}

// ============================================================================
// Resource
// ============================================================================

/// The target of an access request.
///
/// An empty `classification` is a valid value. It marks the resource as
/// unclassified, which compliance rules report as a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Stable identifier (e.g., "db-patient-records").
    pub id: String,
    /// Resource kind (e.g., "database", "storage", "compute", "secret").
    #[serde(rename = "type")]
    pub kind: String,
    /// Sensitivity label (e.g., "public", "internal", "confidential", "restricted").
    pub classification: String,
    /// Free-form metadata. Keys are unique; iteration order is unspecified.
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl Resource {
    /// Creates a resource with no tags.
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        classification: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            classification: classification.into(),
            tags: HashMap::new(),
        }
    }

    /// Adds a tag, replacing any existing value under the same key.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Returns the value of a tag, if present.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }
}

// ============================================================================
// Action
// ============================================================================

/// The verb being requested.
///
/// No set of verbs is enforced here; whether a verb is meaningful is for
/// policies to decide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action {
    pub verb: String,
}

impl Action {
    pub fn new(verb: impl Into<String>) -> Self {
        Self { verb: verb.into() }
    }
}

impl From<&str> for Action {
    fn from(verb: &str) -> Self {
        Self::new(verb)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.verb)
    }
}

// ============================================================================
// Request Context
// ============================================================================

/// One access request: who, what, which verb, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub principal: Principal,
    pub resource: Resource,
    pub action: Action,
    /// Deployment environment (e.g., "production", "staging", "dev").
    pub environment: String,
    /// Whether the principal completed multi-factor authentication.
    #[serde(default)]
    pub mfa_verified: bool,
}

impl RequestContext {
    /// Creates a context with `mfa_verified` set to `false`.
    pub fn new(
        principal: Principal,
        resource: Resource,
        action: impl Into<Action>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            principal,
            resource,
            action: action.into(),
            environment: environment.into(),
            mfa_verified: false,
        }
    }

    /// Sets the MFA flag.
    pub fn with_mfa(mut self, verified: bool) -> Self {
        self.mfa_verified = verified;
        self
    }
}

// ============================================================================
// Effect & Decision
// ============================================================================

/// The effect of a decision: allow or deny access.
///
/// There is deliberately no third variant. A policy that declines to decide
/// abstains; it never produces a `Decision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Grant access.
    Allow,
    /// Deny access.
    Deny,
}

impl Default for Effect {
    /// Defaults to `Deny` (fail-closed).
    fn default() -> Self {
        Self::Deny
    }
}

impl Effect {
    pub fn is_allow(self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn is_deny(self) -> bool {
        matches!(self, Self::Deny)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "Allow",
            Self::Deny => "Deny",
        }
    }
}

impl Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An access decision rendered by one policy or by the engine as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decision {
    /// Whether access is allowed or denied.
    pub effect: Effect,
    /// Name of the policy that rendered the decision, or `"default"`.
    pub policy_name: String,
    /// Human-readable explanation.
    pub reason: String,
}

impl Decision {
    pub fn allow(policy_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            effect: Effect::Allow,
            policy_name: policy_name.into(),
            reason: reason.into(),
        }
    }

    pub fn deny(policy_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            effect: Effect::Deny,
            policy_name: policy_name.into(),
            reason: reason.into(),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.effect.is_allow()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn patient_db() -> Resource {
        Resource::new("db-patient-records", "database", "restricted")
            .with_tag("owner", "health-team")
            .with_tag("region", "us-west-2")
    }

    #[test]
    fn test_effect_defaults_to_deny() {
        assert_eq!(Effect::default(), Effect::Deny);
    }

    #[test]
    fn test_effect_display() {
        assert_eq!(Effect::Allow.to_string(), "Allow");
        assert_eq!(Effect::Deny.to_string(), "Deny");
    }

    #[test]
    fn test_resource_tags() {
        let resource = patient_db().with_tag("owner", "platform-team");

        assert_eq!(resource.tags.len(), 2, "re-tagging replaces, never duplicates");
        assert_eq!(resource.tag("owner"), Some("platform-team"));
        assert!(resource.has_tag("region"));
        assert!(!resource.has_tag("cost-center"));
    }

    #[test]
    fn test_empty_classification_is_representable() {
        let resource = Resource::new("bucket-unknown", "storage", "");
        assert!(resource.classification.is_empty());
    }

    #[test]
    fn test_context_builder() {
        let ctx = RequestContext::new(
            Principal::new("bob@corp.io", "engineer", "Backend"),
            patient_db(),
            "read",
            "staging",
        );
        assert!(!ctx.mfa_verified, "MFA must be opt-in");

        let ctx = ctx.with_mfa(true);
        assert!(ctx.mfa_verified);
        assert_eq!(ctx.action.verb, "read");
        assert_eq!(ctx.environment, "staging");
    }

    #[test]
    fn test_context_clone_is_independent() {
        let original = RequestContext::new(
            Principal::new("alice@corp.io", "admin", "IT"),
            patient_db(),
            "delete",
            "production",
        );
        let snapshot = original.clone();

        let mut mutated = original;
        mutated.resource.tags.clear();
        mutated.environment = "dev".to_string();

        assert_eq!(snapshot.environment, "production");
        assert_eq!(snapshot.resource.tags.len(), 2);
    }

    #[test]
    fn test_decision_constructors() {
        let allow = Decision::allow("AdminFullAccess", "Admin role has unrestricted access.");
        assert!(allow.is_allowed());

        let deny = Decision::deny("default", "No policy explicitly granted access.");
        assert_eq!(deny.effect, Effect::Deny);
        assert_eq!(deny.policy_name, "default");
    }

    #[test]
    fn test_resource_serde_uses_type_key() {
        let json = serde_json::to_value(Resource::new("s-1", "secret", "public")).unwrap();
        assert_eq!(json["type"], "secret");
        assert!(json.get("kind").is_none());
    }
}
