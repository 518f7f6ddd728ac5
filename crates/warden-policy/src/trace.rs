//! Evaluation traces.
//!
//! A trace is the audit record of one `PolicyEngine::evaluate` call: an owned
//! copy of the request plus one step per policy that was consulted, in
//! registration order. Steps stop at the first Deny.

use std::fmt;

use serde::{Deserialize, Serialize};
use warden_types::{Decision, RequestContext};

/// The outcome of one policy within a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepOutcome {
    Allow,
    Deny,
    Abstain,
}

impl StepOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "Allow",
            Self::Deny => "Deny",
            Self::Abstain => "Abstain",
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One policy's contribution to a trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyStep {
    pub policy_name: String,
    pub outcome: StepOutcome,
    /// Empty when the policy abstained.
    ///
    /// The converse does not hold: a host policy may allow or deny with an
    /// empty reason, and that reason is recorded verbatim.
    pub reason: String,
}

impl PolicyStep {
    pub fn allow(policy_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            policy_name: policy_name.into(),
            outcome: StepOutcome::Allow,
            reason: reason.into(),
        }
    }

    pub fn deny(policy_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            policy_name: policy_name.into(),
            outcome: StepOutcome::Deny,
            reason: reason.into(),
        }
    }

    pub fn abstain(policy_name: impl Into<String>) -> Self {
        Self {
            policy_name: policy_name.into(),
            outcome: StepOutcome::Abstain,
            reason: String::new(),
        }
    }
}

/// The full audit record of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationTrace {
    /// Snapshot of the request taken before any policy ran.
    pub context: RequestContext,
    pub steps: Vec<PolicyStep>,
}

impl EvaluationTrace {
    pub fn new(context: RequestContext) -> Self {
        Self {
            context,
            steps: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, step: PolicyStep) {
        self.steps.push(step);
    }

    /// Number of steps that rendered an Allow or Deny.
    pub fn evaluated_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.outcome != StepOutcome::Abstain)
            .count()
    }

    /// Number of steps that abstained.
    pub fn abstain_count(&self) -> usize {
        self.steps.len() - self.evaluated_count()
    }
}

/// What `PolicyEngine::evaluate` returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub decision: Decision,
    pub trace: EvaluationTrace,
}

impl EvaluationResult {
    pub fn is_allowed(&self) -> bool {
        self.decision.is_allowed()
    }
}
