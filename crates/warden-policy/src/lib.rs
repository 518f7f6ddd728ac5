//! # warden-policy: Policy Decision Engine
//!
//! Turns an ordered list of named policies into one auditable access decision.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  RequestContext                              │
//! │  (Principal + Resource + Action + Env + MFA) │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  PolicyEngine                                │
//! │  ├─ Consult policies in registration order   │
//! │  ├─ First Deny wins immediately              │
//! │  ├─ First Allow sticks, scanning continues   │
//! │  └─ Nothing allowed → default Deny           │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  EvaluationResult                            │
//! │  - Decision (effect, policy name, reason)    │
//! │  - Trace (request snapshot + ordered steps)  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Examples
//!
//! ```
//! use warden_policy::default_policy_engine;
//! use warden_types::{Effect, Principal, RequestContext, Resource};
//!
//! let engine = default_policy_engine();
//! let ctx = RequestContext::new(
//!     Principal::new("bob@corp.io", "engineer", "Backend"),
//!     Resource::new("compute-prod-api", "compute", "confidential"),
//!     "read",
//!     "production",
//! );
//!
//! let result = engine.evaluate(&ctx);
//! assert_eq!(result.decision.effect, Effect::Allow);
//! assert_eq!(result.decision.policy_name, "EngineerAccess");
//! assert_eq!(result.trace.steps.len(), 5);
//! ```

pub mod engine;
pub mod policy;
pub mod standard;
pub mod trace;

#[cfg(test)]
mod properties;

pub use engine::{DEFAULT_DENY_REASON, DEFAULT_POLICY_NAME, PolicyEngine, default_decision};
pub use policy::{FnPolicy, Policy, PolicyMetadata, PolicyOutcome};
pub use standard::default_policy_engine;
pub use trace::{EvaluationResult, EvaluationTrace, PolicyStep, StepOutcome};
