//! Built-in catalog lookup.
//!
//! Resolves policy and rule names to fresh instances of the built-in
//! implementations. Each call returns an independent value.

use warden_compliance::{ComplianceChecker, ComplianceRule};
use warden_policy::{Policy, PolicyEngine};

use crate::error::{Result, WardenError};

pub use warden_compliance::standard::STANDARD_RULE_NAMES;
pub use warden_policy::standard::STANDARD_POLICY_NAMES;

/// Looks up a built-in policy by name.
pub fn policy(name: &str) -> Result<Box<dyn Policy>> {
    warden_policy::standard::by_name(name)
        .ok_or_else(|| WardenError::UnknownPolicy(name.to_string()))
}

/// Looks up a built-in compliance rule by name.
pub fn rule(name: &str) -> Result<Box<dyn ComplianceRule>> {
    warden_compliance::standard::by_name(name)
        .ok_or_else(|| WardenError::UnknownRule(name.to_string()))
}

/// Registers the named policies into `engine`, in order.
///
/// Nothing is registered unless every name resolves.
pub fn register_policies<S: AsRef<str>>(engine: &mut PolicyEngine, names: &[S]) -> Result<()> {
    let policies = names
        .iter()
        .map(|name| policy(name.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    for boxed in policies {
        engine.register_policy(boxed);
    }
    Ok(())
}

/// Adds the named rules to `checker`, in order.
///
/// Nothing is added unless every name resolves.
pub fn add_rules<S: AsRef<str>>(checker: &mut ComplianceChecker, names: &[S]) -> Result<()> {
    let rules = names
        .iter()
        .map(|name| rule(name.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    for boxed in rules {
        checker.add_rule(boxed);
    }
    Ok(())
}
