//! Compliance checking.
//!
//! Unlike the policy engine, the checker never short-circuits: every rule is
//! run against every resource so the report lists the complete set of
//! violations.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use warden_types::Resource;

use crate::rule::{ComplianceRule, RuleMetadata};

/// The exhaustive result of checking one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub resource_id: String,
    /// `[name] description` for each failed rule, in rule registration order.
    pub violations: Vec<String>,
    /// Names of the failed rules, parallel to `violations`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    failed_rules: Vec<String>,
}

impl ComplianceReport {
    pub fn new(resource_id: impl Into<String>) -> Self {
        Self {
            resource_id: resource_id.into(),
            violations: Vec::new(),
            failed_rules: Vec::new(),
        }
    }

    /// Records a failed rule.
    pub fn record(&mut self, rule: &RuleMetadata) {
        self.violations.push(rule.violation());
        self.failed_rules.push(rule.name.clone());
    }

    /// Names of the failed rules, in rule registration order.
    pub fn failed_rules(&self) -> impl Iterator<Item = &str> {
        self.failed_rules.iter().map(String::as_str)
    }

    /// True iff no rule failed.
    pub fn compliant(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Whether the named rule failed. Compares whole rule names, so any
    /// characters (including brackets) may appear in a name.
    pub fn violates(&self, rule_name: &str) -> bool {
        self.failed_rules.iter().any(|name| name == rule_name)
    }
}

/// Runs every registered compliance rule against a resource.
pub struct ComplianceChecker {
    rules: Vec<Box<dyn ComplianceRule>>,
    audit_enabled: bool,
}

impl ComplianceChecker {
    /// Creates a checker with no rules. Every resource is vacuously compliant.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            audit_enabled: true,
        }
    }

    /// Disables audit logging (for testing).
    pub fn without_audit(mut self) -> Self {
        self.audit_enabled = false;
        self
    }

    /// Appends a rule. Registration order is report order.
    pub fn add_rule(&mut self, rule: impl ComplianceRule + 'static) {
        debug!(rule = %rule.name(), position = self.rules.len(), "Compliance rule added");
        self.rules.push(Box::new(rule));
    }

    /// Appends a rule (builder pattern).
    pub fn with_rule(mut self, rule: impl ComplianceRule + 'static) -> Self {
        self.add_rule(rule);
        self
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Metadata of the registered rules, in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &RuleMetadata> {
        self.rules.iter().map(|rule| rule.metadata())
    }

    /// Checks a resource against every rule.
    pub fn evaluate(&self, resource: &Resource) -> ComplianceReport {
        let mut report = ComplianceReport::new(resource.id.clone());

        for rule in &self.rules {
            if !rule.check(resource) {
                debug!(resource = %resource.id, rule = %rule.name(), "Compliance rule failed");
                report.record(rule.metadata());
            }
        }

        if self.audit_enabled {
            if report.compliant() {
                info!(
                    resource = %resource.id,
                    rules = self.rules.len(),
                    "Resource compliant"
                );
            } else {
                warn!(
                    resource = %resource.id,
                    violations = report.violations.len(),
                    rules = self.rules.len(),
                    "Resource non-compliant"
                );
            }
        }

        report
    }
}

impl Default for ComplianceChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComplianceChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComplianceChecker")
            .field(
                "rules",
                &self.rules().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            )
            .field("audit_enabled", &self.audit_enabled)
            .finish()
    }
}
