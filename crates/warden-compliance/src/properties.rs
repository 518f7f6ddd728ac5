//! Property tests for exhaustive checking.

use proptest::prelude::*;
use warden_types::Resource;

use crate::checker::ComplianceChecker;
use crate::rule::{FnRule, RuleMetadata};
use crate::standard::default_compliance_checker;

fn checker_from(verdicts: &[bool]) -> ComplianceChecker {
    verdicts
        .iter()
        .enumerate()
        .fold(ComplianceChecker::new().without_audit(), |checker, (i, &passes)| {
            checker.with_rule(FnRule::new(
                RuleMetadata::new(format!("R{i}"), format!("rule {i}")),
                move |_: &Resource| passes,
            ))
        })
}

fn resource_strategy() -> impl Strategy<Value = Resource> {
    (
        "[a-z0-9-]{1,12}",
        prop::sample::select(vec!["database", "storage", "compute", "secret"]),
        prop::sample::select(vec!["public", "internal", "confidential", "restricted", ""]),
        prop::collection::hash_map(
            prop::sample::select(vec!["owner", "region", "env"]),
            "[a-z]{1,6}",
            0..3,
        ),
    )
        .prop_map(|(id, kind, class, tags)| {
            tags.into_iter()
                .fold(Resource::new(id, kind, class), |r, (k, v)| r.with_tag(k, v))
        })
}

proptest! {
    /// One violation per failing rule, in registration order.
    #[test]
    fn prop_violations_match_failing_rules(verdicts in prop::collection::vec(any::<bool>(), 0..16),
                                           resource in resource_strategy()) {
        let report = checker_from(&verdicts).evaluate(&resource);

        let expected: Vec<String> = verdicts
            .iter()
            .enumerate()
            .filter(|(_, passes)| !**passes)
            .map(|(i, _)| format!("[R{i}] rule {i}"))
            .collect();

        prop_assert_eq!(report.compliant(), expected.is_empty());
        prop_assert_eq!(report.violations, expected);
    }

    /// The standard checker agrees with a direct reading of each rule.
    #[test]
    fn prop_standard_rules(resource in resource_strategy()) {
        let report = default_compliance_checker().without_audit().evaluate(&resource);

        let expected = [
            !resource.has_tag("owner"),
            resource.kind == "secret" && resource.classification == "public",
            resource.kind == "database"
                && !matches!(resource.classification.as_str(), "restricted" | "confidential"),
            resource.classification.is_empty(),
        ]
        .iter()
        .filter(|failed| **failed)
        .count();

        prop_assert_eq!(report.violation_count(), expected);
        prop_assert_eq!(&report.resource_id, &resource.id);
    }
}
