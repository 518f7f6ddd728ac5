//! Policy definitions.
//!
//! A policy is a named predicate over a [`RequestContext`]. It either renders
//! an opinion ([`PolicyOutcome::Allow`] / [`PolicyOutcome::Deny`]) or abstains,
//! deferring to the policies registered after it.

use std::fmt;

use warden_types::RequestContext;

// ============================================================================
// Outcome
// ============================================================================

/// What a single policy says about a request.
///
/// `Abstain` is a first-class variant rather than an absent value so that
/// every consumer handles all three cases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PolicyOutcome {
    /// Grant access, with a human-readable reason.
    Allow(String),
    /// Deny access, with a human-readable reason.
    Deny(String),
    /// No opinion on this request.
    Abstain,
}

impl PolicyOutcome {
    pub fn allow(reason: impl Into<String>) -> Self {
        Self::Allow(reason.into())
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self::Deny(reason.into())
    }

    pub fn is_abstain(&self) -> bool {
        matches!(self, Self::Abstain)
    }

    /// The reason text, or `""` when abstaining.
    pub fn reason(&self) -> &str {
        match self {
            Self::Allow(reason) | Self::Deny(reason) => reason,
            Self::Abstain => "",
        }
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Descriptive metadata carried by every policy.
///
/// Only `name` takes part in evaluation: it labels trace steps and decisions.
/// The other fields exist for audit and catalog listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolicyMetadata {
    pub name: String,
    /// Policy revision (e.g., "1.0").
    pub version: String,
    /// Owning team (e.g., "governance-team").
    pub author: String,
    pub description: String,
}

impl PolicyMetadata {
    /// Creates metadata with version "1.0" and empty author and description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: "1.0".to_string(),
            author: String::new(),
            description: String::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

// ============================================================================
// Policy
// ============================================================================

/// A named access-control predicate.
///
/// Implementations must be pure and must not block: the engine calls
/// `evaluate` synchronously and does not guard against panics or hangs.
/// Ill-defined input should be answered with `Abstain` or `Deny`.
pub trait Policy: Send + Sync {
    /// Metadata identifying this policy.
    fn metadata(&self) -> &PolicyMetadata;

    /// Renders this policy's outcome for a request.
    fn evaluate(&self, ctx: &RequestContext) -> PolicyOutcome;

    /// The name recorded in traces and decisions.
    fn name(&self) -> &str {
        &self.metadata().name
    }
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn metadata(&self) -> &PolicyMetadata {
        (**self).metadata()
    }

    fn evaluate(&self, ctx: &RequestContext) -> PolicyOutcome {
        (**self).evaluate(ctx)
    }
}

/// A policy backed by a closure.
///
/// ```
/// use warden_policy::{FnPolicy, Policy, PolicyMetadata, PolicyOutcome};
///
/// let weekend_freeze = FnPolicy::new(PolicyMetadata::new("WeekendFreeze"), |ctx| {
///     if ctx.environment == "production" && ctx.action.verb == "deploy" {
///         PolicyOutcome::deny("Deploys are frozen.")
///     } else {
///         PolicyOutcome::Abstain
///     }
/// });
/// assert_eq!(weekend_freeze.name(), "WeekendFreeze");
/// ```
pub struct FnPolicy<F> {
    metadata: PolicyMetadata,
    predicate: F,
}

impl<F> FnPolicy<F>
where
    F: Fn(&RequestContext) -> PolicyOutcome + Send + Sync,
{
    pub fn new(metadata: PolicyMetadata, predicate: F) -> Self {
        Self {
            metadata,
            predicate,
        }
    }
}

impl<F> Policy for FnPolicy<F>
where
    F: Fn(&RequestContext) -> PolicyOutcome + Send + Sync,
{
    fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    fn evaluate(&self, ctx: &RequestContext) -> PolicyOutcome {
        (self.predicate)(ctx)
    }
}

impl<F> fmt::Debug for FnPolicy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPolicy")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
