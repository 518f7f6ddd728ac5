//! Projection views.
//!
//! Each view borrows from the value it projects and fixes the field order of
//! the external text format. The evaluation view flattens the request to four
//! scalar fields; principal and resource objects (including resource tags)
//! are never written.

use serde::Serialize;
use warden_compliance::ComplianceReport;
use warden_policy::{EvaluationResult, EvaluationTrace, PolicyStep, StepOutcome};
use warden_types::{Decision, Effect};

/// A value with a canonical projection.
pub trait Project {
    type View<'a>: Serialize
    where
        Self: 'a;

    fn view(&self) -> Self::View<'_>;
}

#[derive(Debug, Clone, Serialize)]
pub struct DecisionView<'a> {
    pub effect: Effect,
    pub policy_name: &'a str,
    pub reason: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepView<'a> {
    pub policy: &'a str,
    pub outcome: StepOutcome,
    pub reason: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraceView<'a> {
    pub principal: &'a str,
    pub resource: &'a str,
    pub action: &'a str,
    pub environment: &'a str,
    pub steps: Vec<StepView<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationView<'a> {
    pub decision: DecisionView<'a>,
    pub trace: TraceView<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportView<'a> {
    pub resource_id: &'a str,
    pub compliant: bool,
    pub violations: &'a [String],
}

impl Project for Decision {
    type View<'a> = DecisionView<'a>;

    fn view(&self) -> DecisionView<'_> {
        DecisionView {
            effect: self.effect,
            policy_name: &self.policy_name,
            reason: &self.reason,
        }
    }
}

impl Project for PolicyStep {
    type View<'a> = StepView<'a>;

    fn view(&self) -> StepView<'_> {
        StepView {
            policy: &self.policy_name,
            outcome: self.outcome,
            reason: &self.reason,
        }
    }
}

impl Project for EvaluationTrace {
    type View<'a> = TraceView<'a>;

    fn view(&self) -> TraceView<'_> {
        TraceView {
            principal: &self.context.principal.id,
            resource: &self.context.resource.id,
            action: &self.context.action.verb,
            environment: &self.context.environment,
            steps: self.steps.iter().map(Project::view).collect(),
        }
    }
}

impl Project for EvaluationResult {
    type View<'a> = EvaluationView<'a>;

    fn view(&self) -> EvaluationView<'_> {
        EvaluationView {
            decision: self.decision.view(),
            trace: self.trace.view(),
        }
    }
}

impl Project for ComplianceReport {
    type View<'a> = ReportView<'a>;

    fn view(&self) -> ReportView<'_> {
        ReportView {
            resource_id: &self.resource_id,
            compliant: self.compliant(),
            violations: &self.violations,
        }
    }
}
