//! Property tests for engine evaluation.
//!
//! Engines are generated from random sequences of fixed outcomes, so the
//! expected decision can be computed directly from the sequence.

use proptest::prelude::*;
use warden_types::{Decision, Principal, RequestContext, Resource};

use crate::engine::{PolicyEngine, default_decision};
use crate::policy::{FnPolicy, PolicyMetadata, PolicyOutcome};
use crate::trace::StepOutcome;

fn outcome_strategy() -> impl Strategy<Value = PolicyOutcome> {
    prop_oneof![
        Just(PolicyOutcome::Abstain),
        "[a-z ]{0,12}".prop_map(PolicyOutcome::Allow),
        "[a-z ]{0,12}".prop_map(PolicyOutcome::Deny),
    ]
}

fn engine_from(outcomes: &[PolicyOutcome]) -> PolicyEngine {
    outcomes
        .iter()
        .enumerate()
        .fold(PolicyEngine::new().without_audit(), |engine, (i, outcome)| {
            let outcome = outcome.clone();
            engine.with_policy(FnPolicy::new(
                PolicyMetadata::new(format!("P{i}")),
                move |_: &RequestContext| outcome.clone(),
            ))
        })
}

fn context_strategy() -> impl Strategy<Value = RequestContext> {
    (
        "[a-z]{1,8}",
        prop::sample::select(vec!["admin", "engineer", "analyst", "guest"]),
        prop::sample::select(vec!["public", "confidential", "restricted", ""]),
        prop::sample::select(vec!["read", "write", "delete"]),
        prop::sample::select(vec!["dev", "staging", "production"]),
        any::<bool>(),
    )
        .prop_map(|(id, role, class, verb, env, mfa)| {
            RequestContext::new(
                Principal::new(id, role, "dept"),
                Resource::new("r-1", "database", class),
                verb,
                env,
            )
            .with_mfa(mfa)
        })
}

proptest! {
    /// An engine with no policies denies every request by default.
    #[test]
    fn prop_empty_engine_denies(ctx in context_strategy()) {
        let result = PolicyEngine::new().without_audit().evaluate(&ctx);
        prop_assert_eq!(result.decision, default_decision());
        prop_assert!(result.trace.steps.is_empty());
    }

    /// The first Deny decides, and the trace stops right after it.
    #[test]
    fn prop_first_deny_truncates(outcomes in prop::collection::vec(outcome_strategy(), 0..12),
                                 ctx in context_strategy()) {
        let result = engine_from(&outcomes).evaluate(&ctx);

        if let Some(i) = outcomes.iter().position(|o| matches!(o, PolicyOutcome::Deny(_))) {
            let PolicyOutcome::Deny(reason) = &outcomes[i] else { unreachable!() };
            prop_assert_eq!(&result.decision, &Decision::deny(format!("P{i}"), reason.clone()));
            prop_assert_eq!(result.trace.steps.len(), i + 1);
        } else {
            prop_assert_eq!(result.trace.steps.len(), outcomes.len());
        }
    }

    /// Without a Deny, the first Allow decides and every policy is recorded.
    #[test]
    fn prop_first_allow_wins_without_deny(
        outcomes in prop::collection::vec(
            prop_oneof![
                Just(PolicyOutcome::Abstain),
                "[a-z]{1,6}".prop_map(PolicyOutcome::Allow),
            ],
            0..12,
        ),
        ctx in context_strategy(),
    ) {
        let result = engine_from(&outcomes).evaluate(&ctx);
        prop_assert_eq!(result.trace.steps.len(), outcomes.len());

        match outcomes.iter().position(|o| !o.is_abstain()) {
            Some(i) => {
                let expected = Decision::allow(format!("P{i}"), outcomes[i].reason());
                prop_assert_eq!(result.decision, expected);
            }
            None => {
                prop_assert_eq!(result.decision, default_decision());
            }
        }
    }

    /// Evaluated and abstained steps partition the trace.
    #[test]
    fn prop_step_counts_partition(outcomes in prop::collection::vec(outcome_strategy(), 0..12),
                                  ctx in context_strategy()) {
        let result = engine_from(&outcomes).evaluate(&ctx);
        let trace = &result.trace;
        prop_assert_eq!(trace.evaluated_count() + trace.abstain_count(), trace.steps.len());

        for step in &trace.steps {
            if step.outcome == StepOutcome::Abstain {
                prop_assert!(step.reason.is_empty());
            }
        }
    }

    /// The trace carries an exact copy of the request.
    #[test]
    fn prop_trace_snapshots_request(outcomes in prop::collection::vec(outcome_strategy(), 0..6),
                                    ctx in context_strategy()) {
        let result = engine_from(&outcomes).evaluate(&ctx);
        prop_assert_eq!(result.trace.context, ctx);
    }
}
