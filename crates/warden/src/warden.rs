//! Main entry point for the Warden SDK.
//!
//! `Warden` bundles a policy engine, a compliance checker and a projector
//! assembled from configuration or from the built-in defaults.

use std::path::Path;

use tracing::info;
use warden_compliance::{ComplianceChecker, ComplianceReport, ComplianceRule};
use warden_config::WardenConfig;
use warden_policy::{EvaluationResult, Policy, PolicyEngine};
use warden_render::{Layout, Project, Projector};
use warden_types::{RequestContext, Resource};

use crate::catalog;
use crate::error::Result;

/// An assembled engine, checker and projector.
///
/// Registration methods take `&mut self`; evaluation and rendering take
/// `&self`, so a built `Warden` can be shared across threads.
#[derive(Debug)]
pub struct Warden {
    engine: PolicyEngine,
    checker: ComplianceChecker,
    projector: Projector,
}

impl Warden {
    pub fn new(engine: PolicyEngine, checker: ComplianceChecker, projector: Projector) -> Self {
        Self {
            engine,
            checker,
            projector,
        }
    }

    /// Assembles a `Warden` from configuration.
    ///
    /// Fails with `UnknownPolicy` or `UnknownRule` on the first name that is
    /// not in the built-in catalog.
    pub fn from_config(config: &WardenConfig) -> Result<Self> {
        config.validate()?;

        let mut engine = PolicyEngine::new();
        let mut checker = ComplianceChecker::new();
        if !config.audit.enabled {
            engine = engine.without_audit();
            checker = checker.without_audit();
        }

        catalog::register_policies(&mut engine, &config.engine.policies)?;
        catalog::add_rules(&mut checker, &config.compliance.rules)?;

        info!(
            policies = engine.policy_count(),
            rules = checker.rule_count(),
            layout = ?config.projection.layout,
            audit = config.audit.enabled,
            "Warden assembled from configuration"
        );

        Ok(Self::new(
            engine,
            checker,
            Projector::new(config.projection.layout),
        ))
    }

    /// Loads layered configuration from default locations and assembles.
    pub fn load() -> Result<Self> {
        Self::from_config(&WardenConfig::load()?)
    }

    /// Loads layered configuration rooted at `project_dir` and assembles.
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(&WardenConfig::load_from_dir(project_dir)?)
    }

    pub fn engine(&self) -> &PolicyEngine {
        &self.engine
    }

    pub fn checker(&self) -> &ComplianceChecker {
        &self.checker
    }

    pub fn projector(&self) -> Projector {
        self.projector
    }

    pub fn layout(&self) -> Layout {
        self.projector.layout()
    }

    /// Appends a host-defined policy after the configured ones.
    pub fn register_policy(&mut self, policy: impl Policy + 'static) {
        self.engine.register_policy(policy);
    }

    /// Appends a host-defined rule after the configured ones.
    pub fn add_rule(&mut self, rule: impl ComplianceRule + 'static) {
        self.checker.add_rule(rule);
    }

    pub fn evaluate(&self, ctx: &RequestContext) -> EvaluationResult {
        self.engine.evaluate(ctx)
    }

    pub fn check(&self, resource: &Resource) -> ComplianceReport {
        self.checker.evaluate(resource)
    }

    /// Renders any projectable value with the configured layout.
    pub fn render<T: Project + ?Sized>(&self, value: &T) -> Result<String> {
        Ok(self.projector.render(value)?)
    }
}

impl Default for Warden {
    /// All built-in policies and rules in reference order, pretty layout.
    fn default() -> Self {
        Self::new(
            warden_policy::default_policy_engine(),
            warden_compliance::default_compliance_checker(),
            Projector::default(),
        )
    }
}
