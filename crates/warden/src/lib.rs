//! # Warden
//!
//! Access decisions and compliance audits for infrastructure resources.
//!
//! Warden answers two questions about a resource:
//!
//! - **May this principal perform this action here?** A deny-wins,
//!   fail-closed policy engine consults every policy in order and records a
//!   trace of what each one said.
//! - **Is this resource configured acceptably?** A compliance checker runs
//!   every rule and reports every failure.
//!
//! Decisions, traces and reports project to a canonical JSON text form for
//! audit logs.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                            Warden                            │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐  │
//! │  │ PolicyEngine │   │  Compliance  │   │    Projector     │  │
//! │  │ (deny-wins)  │   │   Checker    │ → │ (canonical JSON) │  │
//! │  └──────────────┘   └──────────────┘   └──────────────────┘  │
//! │          ↑ assembled from WardenConfig (catalog names)       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use warden::{Effect, Principal, RequestContext, Resource, Warden};
//!
//! let warden = Warden::default();
//!
//! let ctx = RequestContext::new(
//!     Principal::new("carol@corp.io", "analyst", "Data"),
//!     Resource::new("db-customers", "database", "confidential"),
//!     "read",
//!     "production",
//! );
//! let result = warden.evaluate(&ctx);
//! assert_eq!(result.decision.effect, Effect::Deny);
//! assert_eq!(result.decision.policy_name, "AnalystReadOnly");
//!
//! let report = warden.check(&ctx.resource);
//! assert!(report.violates("RequiresOwnerTag"));
//!
//! let audit_line = warden.render(&result.decision)?;
//! assert!(audit_line.contains("\"effect\": \"Deny\""));
//! # Ok::<(), warden::WardenError>(())
//! ```
//!
//! # Modules
//!
//! - **SDK Layer**: [`Warden`], [`catalog`]
//! - **Evaluators**: [`PolicyEngine`], [`ComplianceChecker`]
//! - **Projection**: [`Projector`], [`escape()`], [`unescape()`]
//! - **Configuration**: [`WardenConfig`], [`ConfigLoader`]

pub mod catalog;
mod error;
mod warden;

// SDK Layer - Main API
pub use error::{Result, WardenError};
pub use warden::Warden;

// Re-export the data model
pub use warden_types::{Action, Decision, Effect, Principal, RequestContext, Resource};

// Re-export the policy engine
pub use warden_policy::{
    EvaluationResult, EvaluationTrace, FnPolicy, Policy, PolicyEngine, PolicyMetadata,
    PolicyOutcome, PolicyStep, StepOutcome, default_policy_engine,
};

// Re-export the compliance checker
pub use warden_compliance::{
    ComplianceChecker, ComplianceReport, ComplianceRule, FnRule, RuleMetadata,
    default_compliance_checker,
};

// Re-export projection
pub use warden_render::{Layout, Project, Projector, RenderError, escape, to_json, unescape};

// Re-export configuration
pub use warden_config::{ConfigError, ConfigLoader, WardenConfig};
