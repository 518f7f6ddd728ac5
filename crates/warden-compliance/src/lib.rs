//! # warden-compliance: Exhaustive Compliance Checking
//!
//! Runs every registered rule against a resource and reports every failure.
//! This is the deliberate opposite of the policy engine: an access decision
//! stops at the first blocking fact, an audit needs all of them.
//!
//! ## Examples
//!
//! ```
//! use warden_compliance::default_compliance_checker;
//! use warden_types::Resource;
//!
//! let checker = default_compliance_checker();
//! let rogue_db = Resource::new("db-legacy-public", "database", "public");
//!
//! let report = checker.evaluate(&rogue_db);
//! assert!(!report.compliant());
//! assert!(report.violates("RequiresOwnerTag"));
//! assert!(report.violates("DatabasesMustBeRestricted"));
//! ```

pub mod checker;
pub mod rule;
pub mod standard;

#[cfg(test)]
mod properties;

pub use checker::{ComplianceChecker, ComplianceReport};
pub use rule::{ComplianceRule, FnRule, RuleMetadata};
pub use standard::default_compliance_checker;
