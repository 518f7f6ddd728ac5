//! Standard compliance rules.
//!
//! | # | Rule                        | Requirement                                          |
//! |---|-----------------------------|------------------------------------------------------|
//! | 1 | `RequiresOwnerTag`          | `owner` tag present                                  |
//! | 2 | `SecretsNotPublic`          | secrets are never classified `public`                |
//! | 3 | `DatabasesMustBeRestricted` | databases are `restricted` or `confidential`         |
//! | 4 | `NoUnclassifiedResources`   | classification is non-empty                          |

use warden_types::Resource;

use crate::checker::ComplianceChecker;
use crate::rule::{ComplianceRule, FnRule, RuleMetadata};

pub const REQUIRES_OWNER_TAG: &str = "RequiresOwnerTag";
pub const SECRETS_NOT_PUBLIC: &str = "SecretsNotPublic";
pub const DATABASES_MUST_BE_RESTRICTED: &str = "DatabasesMustBeRestricted";
pub const NO_UNCLASSIFIED_RESOURCES: &str = "NoUnclassifiedResources";

/// Names of the standard rules, in report order.
pub const STANDARD_RULE_NAMES: [&str; 4] = [
    REQUIRES_OWNER_TAG,
    SECRETS_NOT_PUBLIC,
    DATABASES_MUST_BE_RESTRICTED,
    NO_UNCLASSIFIED_RESOURCES,
];

const AUTHOR: &str = "governance-team";

fn metadata(name: &str, description: &str) -> RuleMetadata {
    RuleMetadata::new(name, description).with_author(AUTHOR)
}

pub fn requires_owner_tag() -> impl ComplianceRule {
    FnRule::new(
        metadata(REQUIRES_OWNER_TAG, "Resource must have an 'owner' tag."),
        |r: &Resource| r.has_tag("owner"),
    )
}

pub fn secrets_not_public() -> impl ComplianceRule {
    FnRule::new(
        metadata(
            SECRETS_NOT_PUBLIC,
            "Resources of type 'secret' must not be classified as 'public'.",
        ),
        |r: &Resource| !(r.kind == "secret" && r.classification == "public"),
    )
}

pub fn databases_must_be_restricted() -> impl ComplianceRule {
    FnRule::new(
        metadata(
            DATABASES_MUST_BE_RESTRICTED,
            "Database resources must be classified as 'restricted' or 'confidential'.",
        ),
        |r: &Resource| {
            r.kind != "database"
                || matches!(r.classification.as_str(), "restricted" | "confidential")
        },
    )
}

pub fn no_unclassified_resources() -> impl ComplianceRule {
    FnRule::new(
        metadata(
            NO_UNCLASSIFIED_RESOURCES,
            "Every resource must have a non-empty classification.",
        ),
        |r: &Resource| !r.classification.is_empty(),
    )
}

/// Looks up a standard rule by name.
pub fn by_name(name: &str) -> Option<Box<dyn ComplianceRule>> {
    let rule: Box<dyn ComplianceRule> = match name {
        REQUIRES_OWNER_TAG => Box::new(requires_owner_tag()),
        SECRETS_NOT_PUBLIC => Box::new(secrets_not_public()),
        DATABASES_MUST_BE_RESTRICTED => Box::new(databases_must_be_restricted()),
        NO_UNCLASSIFIED_RESOURCES => Box::new(no_unclassified_resources()),
        _ => return None,
    };
    Some(rule)
}

/// Returns a fresh checker loaded with the standard rules.
pub fn default_compliance_checker() -> ComplianceChecker {
    ComplianceChecker::new()
        .with_rule(requires_owner_tag())
        .with_rule(secrets_not_public())
        .with_rule(databases_must_be_restricted())
        .with_rule(no_unclassified_resources())
}
