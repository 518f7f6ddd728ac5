//! Policy decision engine.
//!
//! Evaluates an access request against registered policies in registration
//! order. The first Deny wins immediately. An Allow is remembered but never
//! short-circuits, so a later Deny can still override it. If nothing allows,
//! the request is denied by default.

use std::fmt;

use tracing::{debug, info, warn};
use warden_types::{Decision, RequestContext};

use crate::policy::{Policy, PolicyMetadata, PolicyOutcome};
use crate::trace::{EvaluationResult, EvaluationTrace, PolicyStep};

/// Policy name carried by the fail-closed default decision.
pub const DEFAULT_POLICY_NAME: &str = "default";

/// Reason carried by the fail-closed default decision.
pub const DEFAULT_DENY_REASON: &str = "No policy explicitly granted access.";

/// The decision returned when no registered policy allows or denies.
pub fn default_decision() -> Decision {
    Decision::deny(DEFAULT_POLICY_NAME, DEFAULT_DENY_REASON)
}

/// Deny-wins, fail-closed policy engine.
///
/// Registration takes `&mut self` and evaluation takes `&self`, so once the
/// engine is built it can be shared between threads and evaluated
/// concurrently without locking.
pub struct PolicyEngine {
    /// Registered policies, in evaluation order.
    policies: Vec<Box<dyn Policy>>,

    /// Whether to emit audit events for each decision.
    audit_enabled: bool,
}

impl PolicyEngine {
    /// Creates an engine with no policies. It denies every request.
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
            audit_enabled: true,
        }
    }

    /// Disables audit logging (for testing).
    pub fn without_audit(mut self) -> Self {
        self.audit_enabled = false;
        self
    }

    /// Appends a policy. Names are not required to be unique.
    pub fn register_policy(&mut self, policy: impl Policy + 'static) {
        debug!(
            policy = %policy.name(),
            position = self.policies.len(),
            "Policy registered"
        );
        self.policies.push(Box::new(policy));
    }

    /// Appends a policy (builder pattern).
    pub fn with_policy(mut self, policy: impl Policy + 'static) -> Self {
        self.register_policy(policy);
        self
    }

    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }

    /// Metadata of the registered policies, in evaluation order.
    pub fn policies(&self) -> impl Iterator<Item = &PolicyMetadata> {
        self.policies.iter().map(|policy| policy.metadata())
    }

    /// Evaluates a request.
    ///
    /// # Postconditions
    ///
    /// - A Deny at index `i` (with no earlier Deny) yields that Deny and
    ///   exactly `i + 1` trace steps.
    /// - Otherwise the trace holds one step per registered policy and the
    ///   decision is the first Allow, or [`default_decision`] if none.
    pub fn evaluate(&self, ctx: &RequestContext) -> EvaluationResult {
        let mut trace = EvaluationTrace::new(ctx.clone());
        let mut first_allow: Option<Decision> = None;

        for policy in &self.policies {
            let name = policy.name();
            let outcome = policy.evaluate(ctx);
            debug!(
                policy = %name,
                outcome = ?outcome,
                principal = %ctx.principal.id,
                "Policy evaluated"
            );

            match outcome {
                PolicyOutcome::Abstain => trace.push(PolicyStep::abstain(name)),
                PolicyOutcome::Deny(reason) => {
                    trace.push(PolicyStep::deny(name, reason.clone()));
                    let decision = Decision::deny(name, reason);
                    self.audit(ctx, &decision);
                    return EvaluationResult { decision, trace };
                }
                PolicyOutcome::Allow(reason) => {
                    trace.push(PolicyStep::allow(name, reason.clone()));
                    if first_allow.is_none() {
                        first_allow = Some(Decision::allow(name, reason));
                    }
                }
            }
        }

        let decision = first_allow.unwrap_or_else(default_decision);
        self.audit(ctx, &decision);
        EvaluationResult { decision, trace }
    }

    fn audit(&self, ctx: &RequestContext, decision: &Decision) {
        if !self.audit_enabled {
            return;
        }

        if decision.is_allowed() {
            info!(
                principal = %ctx.principal.id,
                resource = %ctx.resource.id,
                action = %ctx.action,
                environment = %ctx.environment,
                policy = %decision.policy_name,
                "Access granted"
            );
        } else {
            warn!(
                principal = %ctx.principal.id,
                resource = %ctx.resource.id,
                action = %ctx.action,
                environment = %ctx.environment,
                policy = %decision.policy_name,
                reason = %decision.reason,
                "Access denied"
            );
        }
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PolicyEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyEngine")
            .field(
                "policies",
                &self.policies().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            )
            .field("audit_enabled", &self.audit_enabled)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
