//! End-to-end decisions and audits with the built-in policies and rules.

use test_case::test_case;
use warden::{Effect, Principal, RequestContext, Resource, StepOutcome, Warden};

fn warden() -> Warden {
    Warden::new(
        warden::default_policy_engine().without_audit(),
        warden::default_compliance_checker().without_audit(),
        warden::Projector::compact(),
    )
}

fn request(role: &str, classification: &str, action: &str, env: &str, mfa: bool) -> RequestContext {
    RequestContext::new(
        Principal::new(format!("{role}@corp.io"), role, "Platform"),
        Resource::new("res-1", "compute", classification).with_tag("owner", "platform"),
        action,
        env,
    )
    .with_mfa(mfa)
}

#[test]
fn scenario_a_admin_with_mfa_may_delete_restricted_in_production() {
    let result = warden().evaluate(&request("admin", "restricted", "delete", "production", true));

    assert_eq!(result.decision.effect, Effect::Allow);
    assert_eq!(result.decision.policy_name, "AdminFullAccess");
    assert_eq!(result.decision.reason, "Admin role has unrestricted access.");
    // Allow never short-circuits
    assert_eq!(result.trace.steps.len(), 5);
}

#[test]
fn scenario_b_restricted_without_mfa_is_denied() {
    let result = warden().evaluate(&request("engineer", "restricted", "read", "staging", false));

    assert_eq!(result.decision.effect, Effect::Deny);
    assert_eq!(result.decision.policy_name, "MFARequiredForRestricted");
    assert_eq!(result.decision.reason, "MFA required to access restricted resources.");
    assert_eq!(result.trace.steps.len(), 2);
    assert_eq!(result.trace.steps[1].outcome, StepOutcome::Deny);
}

#[test]
fn scenario_c_engineer_in_production() {
    let w = warden();

    let write = w.evaluate(&request("engineer", "confidential", "write", "production", false));
    assert_eq!(write.decision.effect, Effect::Deny);
    assert_eq!(write.decision.policy_name, "ProductionImmutability");
    assert_eq!(write.trace.steps.len(), 3);

    let read = w.evaluate(&request("engineer", "confidential", "read", "production", false));
    assert_eq!(read.decision.effect, Effect::Allow);
    assert_eq!(read.decision.policy_name, "EngineerAccess");
    assert_eq!(read.decision.reason, "Engineers can read production resources.");
}

#[test]
fn scenario_d_public_secret() {
    let secret = Resource::new("secret-api-keys", "secret", "public").with_tag("owner", "devops");
    let report = warden().check(&secret);

    assert_eq!(report.violations.len(), 1);
    assert!(report.violations[0].starts_with("[SecretsNotPublic]"));
    assert!(!report.compliant());
}

#[test]
fn scenario_e_public_database_without_owner() {
    let db = Resource::new("db-legacy-public", "database", "public");
    let report = warden().check(&db);

    assert_eq!(
        report.violations,
        vec![
            "[RequiresOwnerTag] Resource must have an 'owner' tag.",
            "[DatabasesMustBeRestricted] Database resources must be classified as 'restricted' or 'confidential'.",
        ]
    );
}

#[test_case("admin", "internal", "write", "production" => "Allow AdminFullAccess" ; "admin writes production")]
#[test_case("analyst", "public", "read", "production" => "Allow AnalystReadOnly" ; "analyst reads public")]
#[test_case("analyst", "internal", "write", "dev" => "Deny AnalystReadOnly" ; "analyst writes")]
#[test_case("analyst", "restricted", "read", "dev" => "Deny MFARequiredForRestricted" ; "analyst restricted without mfa")]
#[test_case("engineer", "internal", "delete", "dev" => "Allow EngineerAccess" ; "engineer deletes in dev")]
#[test_case("engineer", "internal", "deploy", "production" => "Deny default" ; "engineer deploys production")]
#[test_case("guest", "public", "read", "dev" => "Deny default" ; "unknown role")]
fn built_in_decisions(role: &str, classification: &str, action: &str, env: &str) -> String {
    let decision = warden()
        .evaluate(&request(role, classification, action, env, false))
        .decision;
    format!("{} {}", decision.effect, decision.policy_name)
}

#[test]
fn trace_snapshot_survives_caller_mutation() {
    let w = warden();
    let mut ctx = request("engineer", "internal", "read", "production", false);
    let result = w.evaluate(&ctx);

    ctx.environment = "dev".to_string();
    ctx.principal.role = "admin".to_string();

    assert_eq!(result.trace.context.environment, "production");
    assert_eq!(result.trace.context.principal.role, "engineer");
}

#[test]
fn shared_across_threads() {
    let w = warden();
    let ctx = request("engineer", "confidential", "read", "production", false);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| w.evaluate(&ctx).decision))
            .collect();
        for handle in handles {
            let decision = handle.join().unwrap();
            assert_eq!(decision.policy_name, "EngineerAccess");
        }
    });
}
